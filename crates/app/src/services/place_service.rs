//! Place service: use-cases for managing places through the places API.

use placeadmin_domain::error::ManagerError;
use placeadmin_domain::form::{self, FormSubmission};
use placeadmin_domain::id::PlaceId;
use placeadmin_domain::place::Place;
use placeadmin_domain::submission::SubmissionSet;

use crate::ports::PlacesApi;

/// Application service for place CRUD operations.
pub struct PlaceService<A> {
    api: A,
}

impl<A: PlacesApi> PlaceService<A> {
    /// Create a new service backed by the given API client.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// List all places.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the API client.
    pub async fn list_places(&self) -> Result<Vec<Place>, ManagerError> {
        self.api.list_places().await
    }

    /// Look up a place by id.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError::Rejected`] when the API refuses the lookup
    /// (including `404`), or a transport/decoding error.
    pub async fn get_place(&self, id: &PlaceId) -> Result<Place, ManagerError> {
        self.api.get_place(id).await
    }

    /// Normalize a form submission and create the place it describes.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError::Validation`] if the form lacks coordinates,
    /// [`ManagerError::Malformed`] if the created place carries no usable id,
    /// or any error reported by the API client.
    pub async fn create_place(&self, submission: FormSubmission) -> Result<PlaceId, ManagerError> {
        let payload = form::normalize_place_form(submission)?;
        let created = self.api.create_place(payload).await?;
        let id = created
            .id()
            .ok_or_else(|| ManagerError::Malformed("created place has no usable id".into()))?;
        tracing::info!(place_id = %id, "place created");
        Ok(id)
    }

    /// Normalize a form submission and replace the place's attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError::Validation`] if the form lacks coordinates, or
    /// any error reported by the API client.
    pub async fn update_place(
        &self,
        id: &PlaceId,
        submission: FormSubmission,
    ) -> Result<(), ManagerError> {
        let payload = form::normalize_place_form(submission)?;
        self.api.update_place(id, payload).await?;
        tracing::info!(place_id = %id, "place updated");
        Ok(())
    }

    /// Delete a place by id.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the API client.
    pub async fn delete_place(&self, id: &PlaceId) -> Result<(), ManagerError> {
        self.api.delete_place(id).await?;
        tracing::info!(place_id = %id, "place deleted");
        Ok(())
    }

    /// Fetch a place together with every submission set it lists.
    ///
    /// Sets are fetched one after another, in the order the place lists them.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError::Malformed`] if the place's `submissions` list
    /// cannot be read, or the first error reported by the API client.
    pub async fn place_submissions(
        &self,
        id: &PlaceId,
    ) -> Result<(Place, Vec<SubmissionSet>), ManagerError> {
        let place = self.api.get_place(id).await?;
        let summaries = place
            .submission_sets()
            .map_err(|err| ManagerError::Malformed(Box::new(err)))?;

        let mut sets = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let submissions = self.api.list_submissions(id, &summary.kind).await?;
            sets.push(SubmissionSet::new(summary.kind, submissions));
        }
        Ok((place, sets))
    }
}
