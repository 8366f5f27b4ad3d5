//! Dashboard page listing a place's submissions, grouped by type.

use std::str::FromStr;

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};

use placeadmin_app::ports::PlacesApi;
use placeadmin_domain::id::PlaceId;

use super::DashboardError;
use super::views::{PlaceView, SubmissionSetView};
use crate::flash::{ClearFlash, Flash, IncomingFlash};
use crate::state::AppState;

/// Submissions index template.
#[derive(Template)]
#[template(path = "place_submissions.html")]
pub struct PlaceSubmissionsTemplate {
    flash: Option<Flash>,
    place: PlaceView,
    sets: Vec<SubmissionSetView>,
}

impl IntoResponse for PlaceSubmissionsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /places/:id/submissions/`: every submission set of a place.
pub async fn index<A>(
    State(state): State<AppState<A>>,
    Path(id): Path<String>,
    flash: IncomingFlash,
) -> Result<(ClearFlash, PlaceSubmissionsTemplate), DashboardError>
where
    A: PlacesApi + Send + Sync + 'static,
{
    let place_id = PlaceId::from_str(&id)?;
    let (place, sets) = state.place_service.place_submissions(&place_id).await?;
    let mut view = PlaceView::from(&place);
    if view.id.is_empty() {
        view.id = place_id.to_string();
    }
    let (clear, flash) = flash.take();

    Ok((
        clear,
        PlaceSubmissionsTemplate {
            flash,
            place: view,
            sets: sets.iter().map(SubmissionSetView::from).collect(),
        },
    ))
}
