//! HTTP server initialization and runtime setup.
//!
//! Builds the store, services and background visit worker, then runs the
//! Axum server until Ctrl+C.

use crate::application::services::{RedirectService, ShortenerService};
use crate::config::Config;
use crate::domain::visit_worker::run_visit_worker;
use crate::infrastructure::persistence::InMemoryEntryRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::id_generator::{DEFAULT_ALPHABET, IdGenerator};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Creates the shared store, services and visit worker.
///
/// Must be called inside a Tokio runtime: the visit worker is spawned here.
///
/// # Errors
///
/// Returns an error if the identifier generator rejects the configured length.
pub fn build_state(config: &Config) -> Result<AppState> {
    let repository = Arc::new(InMemoryEntryRepository::new());

    let generator = IdGenerator::new(DEFAULT_ALPHABET, config.id_length)
        .context("Invalid identifier generator settings")?;

    let (visit_tx, visit_rx) = mpsc::unbounded_channel();
    tokio::spawn(run_visit_worker(visit_rx, repository.clone()));
    tracing::info!("Visit worker started");

    let shortener_service = Arc::new(ShortenerService::new(
        repository.clone(),
        Arc::new(generator),
    ));
    let redirect_service = Arc::new(RedirectService::new(repository, visit_tx));

    Ok(AppState::new(
        shortener_service,
        redirect_service,
        &config.base_url,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    let redirect_service = state.redirect_service.clone();

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(e) = redirect_service.flush().await {
        tracing::warn!("Pending visits were not counted: {}", e);
    }
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
