//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ManagerError`] via `From` at the port boundary.

use std::error::Error as StdError;

/// Boxed source error carried across port boundaries.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Top-level error for every use-case of the manager.
#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    /// The submitted data failed a domain check before reaching the API.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The places API answered with a status other than the expected one.
    #[error("places API rejected the request")]
    Rejected(#[from] RejectedError),

    /// The places API answered, but the body could not be understood.
    #[error("malformed response from places API")]
    Malformed(#[source] BoxError),

    /// The places API could not be reached (connection failure, timeout).
    #[error("places API unavailable")]
    Unavailable(#[source] BoxError),
}

impl ManagerError {
    /// Message suitable for showing to the person using the manager.
    ///
    /// Rejections surface the API body verbatim; transport and decoding
    /// failures collapse into a generic message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Rejected(err) => err.body.clone(),
            Self::Malformed(_) => "the places API returned an unreadable response".to_string(),
            Self::Unavailable(_) => "the places API could not be reached".to_string(),
        }
    }
}

/// Domain-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required geo coordinate was absent or blank in the submission.
    #[error("missing coordinate `{0}`")]
    MissingCoordinate(&'static str),

    /// An identifier was empty.
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    /// An identifier contained characters that cannot appear in an API path.
    #[error("invalid identifier `{0}`")]
    InvalidIdentifier(String),
}

/// Non-success answer from the places API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("places API responded with status {status}")]
pub struct RejectedError {
    /// HTTP status code returned by the API.
    pub status: u16,
    /// Response body, verbatim.
    pub body: String,
}

impl RejectedError {
    /// Whether the API reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}
