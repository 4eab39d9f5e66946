//! HTTP route table

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

use super::{
    contact::handle_contact_submit,
    health::{handle_health, handle_root},
};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/api/contact", post(handle_contact_submit))
}
