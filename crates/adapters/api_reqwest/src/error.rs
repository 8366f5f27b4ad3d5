//! Places API adapter error types.

use placeadmin_domain::error::{ManagerError, RejectedError};

/// Errors specific to the reqwest places API adapter.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request could not be sent or the response not received.
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON the call expects.
    #[error("failed to decode API response")]
    Decode(#[from] serde_json::Error),

    /// The API answered with a status the call does not accept.
    #[error("API responded with {status}: {body}")]
    Unexpected { status: u16, body: String },
}

impl GatewayError {
    /// Convert into a [`ManagerError`] for propagation across the port
    /// boundary.
    pub fn into_domain(self) -> ManagerError {
        match self {
            Self::Unexpected { status, body } => RejectedError { status, body }.into(),
            Self::Decode(err) => ManagerError::Malformed(Box::new(err)),
            Self::Http(err) if err.is_decode() => ManagerError::Malformed(Box::new(err)),
            Self::Http(err) => ManagerError::Unavailable(Box::new(err)),
        }
    }
}

impl From<GatewayError> for ManagerError {
    fn from(err: GatewayError) -> Self {
        err.into_domain()
    }
}
