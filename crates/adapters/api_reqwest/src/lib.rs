//! # placeadmin-adapter-api-reqwest
//!
//! Driven adapter implementing the [`PlacesApi`] port over HTTP with
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Status contract
//! | Call | Method | Path | Accepted status |
//! |------|--------|------|-----------------|
//! | list places | `GET` | `places/` | 200 |
//! | create place | `POST` | `places/` | 201 |
//! | read place | `GET` | `places/{id}/` | 200 |
//! | update place | `PUT` | `places/{id}/` | 200 |
//! | delete place | `DELETE` | `places/{id}/` | 204 |
//! | list submissions | `GET` | `places/{id}/{type}/` | 200 |
//!
//! Any other status is reported as a rejection carrying the response body
//! verbatim. Calls are single-shot: no retries.

pub mod config;
pub mod error;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use placeadmin_app::ports::PlacesApi;
use placeadmin_domain::error::ManagerError;
use placeadmin_domain::form::PlacePayload;
use placeadmin_domain::id::{PlaceId, SubmissionType};
use placeadmin_domain::place::Place;
use placeadmin_domain::submission::Submission;

pub use config::ApiConfig;
pub use error::GatewayError;

/// [`PlacesApi`] implementation talking JSON to the remote places API.
#[derive(Debug, Clone)]
pub struct ReqwestPlacesApi {
    client: Client,
    root_url: String,
}

impl ReqwestPlacesApi {
    /// Build a client for the API described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`] if the underlying HTTP client cannot be
    /// initialised (e.g. TLS backend failure).
    pub fn new(config: &ApiConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            root_url: config.root_url(),
        })
    }

    /// Absolute URL of the API root.
    #[must_use]
    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    fn places_url(&self) -> String {
        format!("{}places/", self.root_url)
    }

    fn place_url(&self, id: &PlaceId) -> String {
        format!("{}places/{id}/", self.root_url)
    }

    fn submissions_url(&self, id: &PlaceId, kind: &SubmissionType) -> String {
        format!("{}places/{id}/{kind}/", self.root_url)
    }

    /// Send `request` and return the body when the status is `expected`.
    async fn send(
        &self,
        request: RequestBuilder,
        expected: StatusCode,
    ) -> Result<String, GatewayError> {
        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if status != expected {
            tracing::warn!(status = status.as_u16(), %expected, "places API rejected request");
            return Err(GatewayError::Unexpected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, GatewayError> {
        tracing::info!(%url, "GET");
        let body = self.send(self.client.get(url), StatusCode::OK).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl PlacesApi for ReqwestPlacesApi {
    async fn list_places(&self) -> Result<Vec<Place>, ManagerError> {
        Ok(self.fetch(&self.places_url()).await?)
    }

    async fn create_place(&self, payload: PlacePayload) -> Result<Place, ManagerError> {
        let url = self.places_url();
        tracing::info!(%url, "POST");
        let body = self
            .send(self.client.post(&url).json(&payload), StatusCode::CREATED)
            .await?;
        serde_json::from_str(&body).map_err(|err| GatewayError::Decode(err).into())
    }

    async fn get_place(&self, id: &PlaceId) -> Result<Place, ManagerError> {
        Ok(self.fetch(&self.place_url(id)).await?)
    }

    async fn update_place(&self, id: &PlaceId, payload: PlacePayload) -> Result<(), ManagerError> {
        let url = self.place_url(id);
        tracing::info!(%url, "PUT");
        self.send(self.client.put(&url).json(&payload), StatusCode::OK)
            .await?;
        Ok(())
    }

    async fn delete_place(&self, id: &PlaceId) -> Result<(), ManagerError> {
        let url = self.place_url(id);
        tracing::info!(%url, "DELETE");
        self.send(self.client.delete(&url), StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }

    async fn list_submissions(
        &self,
        id: &PlaceId,
        kind: &SubmissionType,
    ) -> Result<Vec<Submission>, ManagerError> {
        Ok(self.fetch(&self.submissions_url(id, kind)).await?)
    }
}
