//! HTTP server initialization and runtime setup.
//!
//! Wires the in-memory registry into the service layer and runs the
//! Axum server lifecycle.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryEntryRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory entry registry (empty; discarded on shutdown)
/// - Shortener service
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the server bind fails or a runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(InMemoryEntryRepository::new());
    let shortener = Arc::new(ShortenerService::new(repository, config.base_url.clone()));
    tracing::info!(base_url = %config.base_url, "Registry initialized (in-memory)");

    let state = AppState::new(shortener);
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Listening on http://{}", config.listen_addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
