//! Core library for the portfolio contact service: configuration, the contact
//! submission domain, the notifier capability, axum handlers and the client
//! form controller.

pub mod client;
pub mod config;
pub mod contact;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod notify;

pub use client::{ContactForm, Field, SubmitStatus};
pub use config::AppConfig;
pub use contact::{ContactPayload, ContactSubmission, SubmissionError};
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use notify::{LogNotifier, Notifier, OutboundMessage, RecordingNotifier};

use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::Router;
use chrono::{DateTime, Utc};
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub config: AppConfig,
    pub notifier: Arc<dyn Notifier>,
    pub started_at: DateTime<Utc>,
    submissions_recorded: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let notifier = Arc::new(LogNotifier::new(config.contact.clone()));

        Self {
            app_name: "Portfolio Contact Service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            config,
            notifier,
            started_at: Utc::now(),
            submissions_recorded: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Bumps the process-local submission counter; nothing is persisted.
    pub fn record_submission(&self) {
        self.submissions_recorded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn submissions_recorded(&self) -> u64 {
        self.submissions_recorded.load(Ordering::Relaxed)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

pub fn create_app(state: AppState) -> Router {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http()
        .make_span_with(middleware::logging::make_span)
        .on_response(middleware::logging::on_response)
        .on_failure(middleware::logging::on_failure);

    Router::new()
        .merge(create_routes())
        .layer(middleware::cors::cors_layer_from_config(&state.config.cors))
        .layer(trace_layer)
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
