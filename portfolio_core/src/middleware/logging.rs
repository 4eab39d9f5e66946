//! Request logging hooks for the tower-http trace layer.
//!
//! Named functions rather than closures so the configured `TraceLayer` has a
//! nameable type wherever it is assembled.

use axum::body::Body;
use http::{Request, Response};
use std::time::Duration;
use tower_http::classify::ServerErrorsFailureClass;
use tracing::{info_span, Span};

pub fn make_span(request: &Request<Body>) -> Span {
    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        version = ?request.version(),
    )
}

pub fn on_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    let status = response.status();
    let latency_ms = latency.as_millis();

    if status.is_success() {
        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency_ms,
            "request completed"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            status = status.as_u16(),
            latency_ms = latency_ms,
            "client error response"
        );
    } else {
        tracing::error!(
            status = status.as_u16(),
            latency_ms = latency_ms,
            "server error response"
        );
    }
}

pub fn on_failure(error: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
    tracing::error!(
        latency_ms = latency.as_millis(),
        error = ?error,
        "request failed"
    );
}
