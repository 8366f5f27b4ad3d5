//! HTTP error response mapping.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use placeadmin_domain::error::{ManagerError, ValidationError};

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    title: String,
    message: String,
}

/// Failure of a page handler, rendered as an HTML error page.
#[derive(Debug)]
pub enum DashboardError {
    /// The request itself is unusable (bad path identifier, unknown action).
    BadRequest(String),
    /// A use-case failed.
    Manager(ManagerError),
}

impl From<ManagerError> for DashboardError {
    fn from(err: ManagerError) -> Self {
        Self::Manager(err)
    }
}

impl From<ValidationError> for DashboardError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            Self::Manager(ManagerError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Manager(ManagerError::Rejected(err)) if err.is_not_found() => {
                (StatusCode::NOT_FOUND, "place not found".to_string())
            }
            Self::Manager(err @ ManagerError::Rejected(_)) => {
                (StatusCode::BAD_GATEWAY, err.user_message())
            }
            Self::Manager(err) => {
                tracing::error!(error = ?err, "places API failure");
                (StatusCode::BAD_GATEWAY, err.user_message())
            }
        };

        let page = ErrorTemplate {
            status: status.as_u16(),
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render error page");
                (status, page.message).into_response()
            }
        }
    }
}
