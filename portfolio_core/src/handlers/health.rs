//! Service banner and health handlers

use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use tracing::info;

pub async fn handle_root(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "app": state.app_name,
        "version": state.version,
        "message": "Portfolio contact service",
        "endpoints": {
            "health": "/health",
            "contact": "/api/contact"
        }
    }))
}

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /health - Health check");

    let uptime_seconds = (chrono::Utc::now() - state.started_at).num_seconds();

    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp(),
        "version": state.version,
        "uptime_seconds": uptime_seconds,
        "submissions_recorded": state.submissions_recorded(),
    }))
}
