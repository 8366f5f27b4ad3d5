//! Shared application state for axum handlers.

use std::sync::Arc;

use placeadmin_app::ports::PlacesApi;
use placeadmin_app::services::place_service::PlaceService;

/// Application state shared across all axum handlers.
///
/// Generic over the places API client to avoid dynamic dispatch.
/// `Clone` is implemented manually so the client itself does not need to be
/// `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<A> {
    /// Place CRUD service.
    pub place_service: Arc<PlaceService<A>>,
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            place_service: Arc::clone(&self.place_service),
        }
    }
}

impl<A> AppState<A>
where
    A: PlacesApi + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(place_service: PlaceService<A>) -> Self {
        Self {
            place_service: Arc::new(place_service),
        }
    }
}
