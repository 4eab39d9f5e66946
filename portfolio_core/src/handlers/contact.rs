//! Contact form submission handler

use crate::{
    contact::{ContactPayload, ContactSubmission},
    error::Result,
    extractors::ApiJson,
    AppState,
};
use axum::{extract::State, response::IntoResponse, Json};
use tracing::info;

pub async fn handle_contact_submit(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ContactPayload>,
) -> Result<impl IntoResponse> {
    info!("POST /api/contact - Contact form submission");

    let submission = ContactSubmission::try_from(payload)?;

    state.notifier.deliver(&submission).await?;
    state.record_submission();

    info!(name = %submission.name, "Contact submission recorded");

    Ok(Json(serde_json::json!({
        "message": "Message sent successfully"
    })))
}

#[cfg(test)]
mod tests {
    use crate::{
        config::AppConfig,
        create_app,
        notify::{FailingNotifier, RecordingNotifier},
        AppState,
    };
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with_recorder() -> (Router, RecordingNotifier) {
        let recorder = RecordingNotifier::new();
        let state =
            AppState::new(AppConfig::default()).with_notifier(Arc::new(recorder.clone()));
        (create_app(state), recorder)
    }

    fn contact_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn valid_submission_is_recorded() {
        let (app, recorder) = app_with_recorder();

        let response = app
            .oneshot(contact_request(
                r#"{"name":"Sam","email":"sam@example.com","message":"Hello"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Message sent successfully"})
        );
        assert_eq!(recorder.count(), 1);
        assert_eq!(recorder.recorded()[0].name, "Sam");
    }

    #[tokio::test]
    async fn missing_field_is_rejected_without_recording() {
        let (app, recorder) = app_with_recorder();

        let response = app
            .oneshot(contact_request(
                r#"{"name":"","email":"sam@example.com","message":"Hello"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Missing required fields"})
        );
        assert_eq!(recorder.count(), 0);
    }

    #[tokio::test]
    async fn absent_field_is_rejected_without_recording() {
        let (app, recorder) = app_with_recorder();

        let response = app
            .oneshot(contact_request(r#"{"email":"sam@example.com"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Missing required fields"})
        );
        assert_eq!(recorder.count(), 0);
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let (app, recorder) = app_with_recorder();

        let response = app
            .oneshot(contact_request(
                r#"{"name":"Sam","email":"not-an-email","message":"Hello"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Invalid email address"})
        );
        assert_eq!(recorder.count(), 0);
    }

    #[tokio::test]
    async fn identical_submissions_are_both_recorded() {
        let (app, recorder) = app_with_recorder();
        let body = r#"{"name":"Sam","email":"sam@example.com","message":"Hello"}"#;

        for _ in 0..2 {
            let response = app.clone().oneshot(contact_request(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert_eq!(recorder.count(), 2);
    }

    #[tokio::test]
    async fn malformed_json_yields_internal_server_error() {
        let (app, recorder) = app_with_recorder();

        let response = app
            .oneshot(contact_request("{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Internal Server Error"})
        );
        assert_eq!(recorder.count(), 0);
    }

    #[tokio::test]
    async fn delivery_failure_yields_internal_server_error() {
        let state =
            AppState::new(AppConfig::default()).with_notifier(Arc::new(FailingNotifier));
        let app = create_app(state);

        let response = app
            .oneshot(contact_request(
                r#"{"name":"Sam","email":"sam@example.com","message":"Hello"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Internal Server Error"})
        );
    }

    #[tokio::test]
    async fn health_reports_submission_count() {
        let (app, _recorder) = app_with_recorder();

        let submit = contact_request(
            r#"{"name":"Sam","email":"sam@example.com","message":"Hello"}"#,
        );
        app.clone().oneshot(submit).await.unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["submissions_recorded"], 1);
    }
}
