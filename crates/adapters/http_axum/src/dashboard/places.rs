//! Dashboard pages for places.

use std::str::FromStr;

use askama::Template;
use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Response};

use placeadmin_app::ports::PlacesApi;
use placeadmin_domain::error::ManagerError;
use placeadmin_domain::form::{self, FormSubmission};
use placeadmin_domain::id::PlaceId;

use super::DashboardError;
use super::views::{NEW_ATTRIBUTE_SLOTS, PlaceRow, PlaceView};
use crate::flash::{ClearFlash, Flash, FlashRedirect, IncomingFlash};
use crate::state::AppState;

const SAVED: &str = "Successfully saved!";
const DELETED: &str = "Successfully deleted!";

/// Place list page template.
#[derive(Template)]
#[template(path = "place_list.html")]
pub struct PlaceListTemplate {
    flash: Option<Flash>,
    places: Vec<PlaceRow>,
}

impl IntoResponse for PlaceListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Place form template, used both for creating and editing.
#[derive(Template)]
#[template(path = "place.html")]
pub struct PlaceFormTemplate {
    flash: Option<Flash>,
    is_new: bool,
    action_url: String,
    place: PlaceView,
    new_slots: Vec<u32>,
}

impl PlaceFormTemplate {
    fn new(flash: Option<Flash>, place: Option<PlaceView>) -> Self {
        let (is_new, action_url, place) = match place {
            Some(place) => (false, format!("/places/{}/", place.id), place),
            None => (true, "/places/new/".to_string(), PlaceView::default()),
        };
        Self {
            flash,
            is_new,
            action_url,
            place,
            new_slots: (1..=NEW_ATTRIBUTE_SLOTS).collect(),
        }
    }
}

impl IntoResponse for PlaceFormTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// What a POST to an existing place asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Save,
    Delete,
}

impl FromStr for Action {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "save" => Ok(Self::Save),
            "delete" => Ok(Self::Delete),
            other => Err(DashboardError::BadRequest(format!(
                "unsupported action `{other}`"
            ))),
        }
    }
}

fn failure(err: &ManagerError) -> Flash {
    if matches!(err, ManagerError::Malformed(_) | ManagerError::Unavailable(_)) {
        tracing::error!(error = ?err, "places API failure");
    }
    Flash::error(format!("Error: {}", err.user_message()))
}

/// `GET /places/`: list all places.
pub async fn list<A>(
    State(state): State<AppState<A>>,
    flash: IncomingFlash,
) -> Result<(ClearFlash, PlaceListTemplate), DashboardError>
where
    A: PlacesApi + Send + Sync + 'static,
{
    let places = state.place_service.list_places().await?;
    let (clear, flash) = flash.take();

    Ok((
        clear,
        PlaceListTemplate {
            flash,
            places: places.iter().map(PlaceRow::from).collect(),
        },
    ))
}

/// `GET /places/new/`: empty place form.
pub async fn new_form(flash: IncomingFlash) -> (ClearFlash, PlaceFormTemplate) {
    let (clear, flash) = flash.take();
    (clear, PlaceFormTemplate::new(flash, None))
}

/// `POST /places/new/`: create a place (PRG).
pub async fn create<A>(
    State(state): State<AppState<A>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> FlashRedirect
where
    A: PlacesApi + Send + Sync + 'static,
{
    match state.place_service.create_place(form::collect(fields)).await {
        Ok(id) => FlashRedirect::new(format!("/places/{id}/"), Flash::success(SAVED)),
        Err(err) => FlashRedirect::new("/places/new/", failure(&err)),
    }
}

/// `GET /places/:id/`: place form pre-filled with the stored place.
pub async fn detail<A>(
    State(state): State<AppState<A>>,
    Path(id): Path<String>,
    flash: IncomingFlash,
) -> Result<(ClearFlash, PlaceFormTemplate), DashboardError>
where
    A: PlacesApi + Send + Sync + 'static,
{
    let place_id = PlaceId::from_str(&id)?;
    let place = state.place_service.get_place(&place_id).await?;
    let mut view = PlaceView::from(&place);
    if view.id.is_empty() {
        view.id = place_id.to_string();
    }
    let (clear, flash) = flash.take();

    Ok((clear, PlaceFormTemplate::new(flash, Some(view))))
}

/// `POST /places/:id/`: save or delete depending on the `action` field (PRG).
pub async fn submit<A>(
    State(state): State<AppState<A>>,
    Path(id): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<FlashRedirect, DashboardError>
where
    A: PlacesApi + Send + Sync + 'static,
{
    let place_id = PlaceId::from_str(&id)?;
    let submission: FormSubmission = form::collect(fields);
    let action = submission
        .get("action")
        .map_or("", String::as_str)
        .parse::<Action>()?;
    let here = format!("/places/{place_id}/");

    let redirect = match action {
        Action::Save => match state.place_service.update_place(&place_id, submission).await {
            Ok(()) => FlashRedirect::new(here, Flash::success(SAVED)),
            Err(err) => FlashRedirect::new(here, failure(&err)),
        },
        Action::Delete => match state.place_service.delete_place(&place_id).await {
            Ok(()) => FlashRedirect::new("/places/", Flash::success(DELETED)),
            Err(err) => FlashRedirect::new(here, failure(&err)),
        },
    };
    Ok(redirect)
}
