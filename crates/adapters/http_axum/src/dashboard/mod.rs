//! Server-side rendered HTML manager (no JavaScript).

pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod places;
#[allow(clippy::missing_errors_doc)]
pub mod submissions;
pub mod views;

use axum::Router;
use axum::routing::get;

use placeadmin_app::ports::PlacesApi;

pub use crate::error::DashboardError;
use crate::state::AppState;

/// Build the sub-router for SSR HTML pages.
///
/// Methods not listed for a path are answered with `405 Method Not Allowed`.
pub fn routes<A>() -> Router<AppState<A>>
where
    A: PlacesApi + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index))
        .route("/places/", get(places::list::<A>))
        .route(
            "/places/new/",
            get(places::new_form).post(places::create::<A>),
        )
        .route(
            "/places/{id}/",
            get(places::detail::<A>).post(places::submit::<A>),
        )
        .route(
            "/places/{id}/submissions/",
            get(submissions::index::<A>),
        )
}
