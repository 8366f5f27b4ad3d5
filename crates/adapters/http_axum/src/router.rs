//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use placeadmin_app::ports::PlacesApi;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the manager pages at `/` with a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<A>(state: AppState<A>) -> Router
where
    A: PlacesApi + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flash::{COOKIE_NAME, Flash};
    use axum::body::Body;
    use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
    use axum::http::{Request, Response, StatusCode};
    use http_body_util::BodyExt;
    use placeadmin_app::services::place_service::PlaceService;
    use placeadmin_domain::error::{ManagerError, RejectedError};
    use placeadmin_domain::form::PlacePayload;
    use placeadmin_domain::id::{PlaceId, SubmissionType};
    use placeadmin_domain::place::Place;
    use placeadmin_domain::submission::Submission;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    /// Canned places API: place `1` exists, everything else is missing,
    /// place `down` simulates an unreachable API.
    struct StubApi;

    fn object(value: Value) -> serde_json::Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("fixture must be an object"),
        }
    }

    fn not_found() -> ManagerError {
        RejectedError {
            status: 404,
            body: "{\"detail\": \"Not found.\"}".to_string(),
        }
        .into()
    }

    fn corner_store() -> Place {
        Place::new(object(json!({
            "id": 1,
            "name": "Corner Store",
            "submitter_name": "Ada",
            "location": {"lat": 39.95, "lng": -75.16},
            "visible": true,
            "phone_number": "555",
            "submissions": [{"type": "comments"}],
        })))
    }

    impl PlacesApi for StubApi {
        async fn list_places(&self) -> Result<Vec<Place>, ManagerError> {
            Ok(vec![corner_store()])
        }

        async fn create_place(&self, payload: PlacePayload) -> Result<Place, ManagerError> {
            if payload.get("name") == Some(&json!("bad")) {
                return Err(RejectedError {
                    status: 400,
                    body: "{\"name\": [\"Invalid name.\"]}".to_string(),
                }
                .into());
            }
            let mut stored = payload;
            stored.insert("id".to_string(), json!(7));
            Ok(Place::new(stored))
        }

        async fn get_place(&self, id: &PlaceId) -> Result<Place, ManagerError> {
            match id.as_str() {
                "1" => Ok(corner_store()),
                "down" => Err(ManagerError::Unavailable("connection refused".into())),
                _ => Err(not_found()),
            }
        }

        async fn update_place(
            &self,
            id: &PlaceId,
            _payload: PlacePayload,
        ) -> Result<(), ManagerError> {
            if id.as_str() == "1" {
                Ok(())
            } else {
                Err(not_found())
            }
        }

        async fn delete_place(&self, id: &PlaceId) -> Result<(), ManagerError> {
            if id.as_str() == "1" {
                Ok(())
            } else {
                Err(not_found())
            }
        }

        async fn list_submissions(
            &self,
            _id: &PlaceId,
            _kind: &SubmissionType,
        ) -> Result<Vec<Submission>, ManagerError> {
            Ok(vec![Submission::new(object(json!({
                "id": 31,
                "submitter_name": "Grace",
                "comment": "Great coffee",
            })))])
        }
    }

    fn app() -> Router {
        build(AppState::new(PlaceService::new(StubApi)))
    }

    async fn send(request: Request<Body>) -> Response<Body> {
        app().oneshot(request).await.unwrap()
    }

    async fn get(uri: &str) -> Response<Body> {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_form(uri: &str, body: &str) -> Response<Body> {
        send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn body_text(response: Response<Body>) -> String {
        String::from_utf8(
            response
                .into_body()
                .collect()
                .await
                .unwrap()
                .to_bytes()
                .to_vec(),
        )
        .unwrap()
    }

    fn flash_of(response: &Response<Body>) -> Flash {
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        let value = cookie
            .strip_prefix(&format!("{COOKIE_NAME}="))
            .and_then(|rest| rest.split(';').next())
            .unwrap();
        serde_urlencoded::from_str(value).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_render_home_page() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Place Manager"));
    }

    #[tokio::test]
    async fn should_list_places() {
        let response = get("/places/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Corner Store"));
        assert!(body.contains("/places/1/"));
    }

    #[tokio::test]
    async fn should_render_empty_form_for_new_place() {
        let response = get("/places/new/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("New place"));
        assert!(body.contains("_new_key1"));
        assert!(body.contains("_new_val3"));
    }

    #[tokio::test]
    async fn should_render_place_with_extension_fields() {
        let response = get("/places/1/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Phone Number"));
        assert!(body.contains("name=\"phone_number\""));
        assert!(body.contains("value=\"39.95\""));
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_place() {
        let response = get("/places/99/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_bad_request_for_invalid_place_id() {
        let response = get("/places/bad%20id/").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_bad_gateway_when_api_unreachable() {
        let response = get("/places/down/").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(body_text(response).await.contains("could not be reached"));
    }

    #[tokio::test]
    async fn should_redirect_to_detail_after_create() {
        let response = post_form(
            "/places/new/",
            "name=Corner+Store&lat=1&lng=2&csrfmiddlewaretoken=x",
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/places/7/");
        assert_eq!(flash_of(&response), Flash::success("Successfully saved!"));
    }

    #[tokio::test]
    async fn should_redirect_back_with_api_body_when_create_rejected() {
        let response = post_form("/places/new/", "name=bad&lat=1&lng=2").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/places/new/");
        assert_eq!(
            flash_of(&response),
            Flash::error("Error: {\"name\": [\"Invalid name.\"]}")
        );
    }

    #[tokio::test]
    async fn should_redirect_back_when_coordinates_missing() {
        let response = post_form("/places/new/", "name=Nowhere").await;
        assert_eq!(response.headers()[LOCATION], "/places/new/");
        assert_eq!(
            flash_of(&response),
            Flash::error("Error: missing coordinate `lat`")
        );
    }

    #[tokio::test]
    async fn should_redirect_to_same_place_after_save() {
        let response = post_form("/places/1/", "action=save&name=Shop&lat=1&lng=2").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/places/1/");
        assert_eq!(flash_of(&response), Flash::success("Successfully saved!"));
    }

    #[tokio::test]
    async fn should_report_error_when_save_rejected() {
        let response = post_form("/places/2/", "action=save&lat=1&lng=2").await;
        assert_eq!(response.headers()[LOCATION], "/places/2/");
        assert_eq!(
            flash_of(&response),
            Flash::error("Error: {\"detail\": \"Not found.\"}")
        );
    }

    #[tokio::test]
    async fn should_redirect_to_list_after_delete() {
        let response = post_form("/places/1/", "action=delete").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/places/");
        assert_eq!(flash_of(&response), Flash::success("Successfully deleted!"));
    }

    #[tokio::test]
    async fn should_stay_on_place_when_delete_rejected() {
        let response = post_form("/places/2/", "action=delete").await;
        assert_eq!(response.headers()[LOCATION], "/places/2/");
    }

    #[tokio::test]
    async fn should_reject_unknown_action() {
        let response = post_form("/places/1/", "action=publish").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reject_missing_action() {
        let response = post_form("/places/1/", "name=Shop").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_answer_unsupported_method_with_405() {
        let response = send(
            Request::builder()
                .method("DELETE")
                .uri("/places/1/")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = post_form("/places/", "name=x").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn should_show_and_clear_flash_message() {
        let response = send(
            Request::builder()
                .uri("/places/1/")
                .header(COOKIE, "flash=level=success&message=Successfully+saved%21")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap().to_string();
        assert!(cookie.contains("Max-Age=0"));
        assert!(body_text(response).await.contains("Successfully saved!"));
    }

    #[tokio::test]
    async fn should_render_submission_sets() {
        let response = get("/places/1/submissions/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Comments (1)"));
        assert!(body.contains("Great coffee"));
        assert!(body.contains("Grace"));
    }
}
