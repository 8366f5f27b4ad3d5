//! Places API port: the remote REST API that owns places and submissions.

use std::future::Future;

use placeadmin_domain::error::ManagerError;
use placeadmin_domain::form::PlacePayload;
use placeadmin_domain::id::{PlaceId, SubmissionType};
use placeadmin_domain::place::Place;
use placeadmin_domain::submission::Submission;

/// Remote API for [`Place`]s and their [`Submission`]s.
///
/// Implementations enforce the status contract of each call and report any
/// other answer as [`ManagerError::Rejected`] with the response body.
pub trait PlacesApi {
    /// List all places (`200`).
    fn list_places(&self) -> impl Future<Output = Result<Vec<Place>, ManagerError>> + Send;

    /// Create a place (`201`), returning the stored resource.
    fn create_place(
        &self,
        payload: PlacePayload,
    ) -> impl Future<Output = Result<Place, ManagerError>> + Send;

    /// Fetch a place by identifier (`200`).
    fn get_place(&self, id: &PlaceId) -> impl Future<Output = Result<Place, ManagerError>> + Send;

    /// Replace a place's attributes (`200`).
    fn update_place(
        &self,
        id: &PlaceId,
        payload: PlacePayload,
    ) -> impl Future<Output = Result<(), ManagerError>> + Send;

    /// Delete a place (`204`).
    fn delete_place(&self, id: &PlaceId) -> impl Future<Output = Result<(), ManagerError>> + Send;

    /// List a place's submissions of one type (`200`).
    fn list_submissions(
        &self,
        id: &PlaceId,
        kind: &SubmissionType,
    ) -> impl Future<Output = Result<Vec<Submission>, ManagerError>> + Send;
}

impl<T: PlacesApi + Send + Sync> PlacesApi for std::sync::Arc<T> {
    fn list_places(&self) -> impl Future<Output = Result<Vec<Place>, ManagerError>> + Send {
        (**self).list_places()
    }

    fn create_place(
        &self,
        payload: PlacePayload,
    ) -> impl Future<Output = Result<Place, ManagerError>> + Send {
        (**self).create_place(payload)
    }

    fn get_place(&self, id: &PlaceId) -> impl Future<Output = Result<Place, ManagerError>> + Send {
        (**self).get_place(id)
    }

    fn update_place(
        &self,
        id: &PlaceId,
        payload: PlacePayload,
    ) -> impl Future<Output = Result<(), ManagerError>> + Send {
        (**self).update_place(id, payload)
    }

    fn delete_place(&self, id: &PlaceId) -> impl Future<Output = Result<(), ManagerError>> + Send {
        (**self).delete_place(id)
    }

    fn list_submissions(
        &self,
        id: &PlaceId,
        kind: &SubmissionType,
    ) -> impl Future<Output = Result<Vec<Submission>, ManagerError>> + Send {
        (**self).list_submissions(id, kind)
    }
}
