//! JSON extractor matching the endpoint's catch-all error contract.
//!
//! The submission endpoint answers any unparseable body with a generic 500
//! rather than axum's default rejection responses, so body handling routes
//! through this extractor instead of `axum::Json` directly.

use axum::{
    async_trait,
    body::Body,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiJsonRejection(rejection.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct ApiJsonRejection(String);

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        tracing::error!("Failed to read request body as JSON: {}", self.0);

        let body = Json(json!({
            "error": "Internal Server Error",
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl std::fmt::Display for ApiJsonRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid JSON body: {}", self.0)
    }
}

impl std::error::Error for ApiJsonRejection {}
