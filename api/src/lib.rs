//! HTTP layer: routes, shared state, and server startup.

use std::sync::Arc;

mod core;
mod error_handler;
mod routes;

pub use crate::core::app_state::AppState;
pub use crate::error_handler::{AppError, AppResult};

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

use crate::routes::announce_route::announce;
use crate::routes::chat::chat_route::chat;
use crate::routes::classify_route::classify;
use crate::routes::health_route::health;
use crate::routes::home_route::home;

/// Builds the application router over the shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(home))
        .route("/chat", post(chat))
        .route("/classify", post(classify))
        .route("/announce", post(announce))
        .with_state(state)
}

/// Loads configuration, wires the clients, and serves until Ctrl+C.
///
/// # Errors
/// Returns [`AppError`] when required configuration is missing or the
/// listener cannot be bound.
pub async fn start() -> AppResult<()> {
    let state = Arc::new(AppState::from_env()?);
    let app = router(state);

    let host_url =
        std::env::var("API_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("listening on {host_url}");

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;

    // Start server with graceful shutdown on Ctrl+C.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
