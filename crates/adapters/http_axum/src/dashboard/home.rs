//! Manager home page.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::flash::{ClearFlash, Flash, IncomingFlash};

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    flash: Option<Flash>,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /`: entry point linking to the managed resources.
pub async fn index(flash: IncomingFlash) -> (ClearFlash, HomeTemplate) {
    let (clear, flash) = flash.take();
    (clear, HomeTemplate { flash })
}
