//! HTTP server initialization and runtime setup.
//!
//! Wires the store, registry and event logger together and runs the Axum
//! server until a shutdown signal arrives.

use crate::application::services::ShortcodeRegistry;
use crate::config::Config;
use crate::domain::clock::SystemClock;
use crate::infrastructure::event_log::{EventLogger, HttpLogSink, LogSink, NullLogSink};
use crate::infrastructure::persistence::InMemoryShortUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state from configuration.
///
/// Spawns the event log worker, so it must run inside a Tokio runtime.
pub fn build_state(config: &Config) -> AppState {
    let sink: Arc<dyn LogSink> = match (&config.log_api_url, &config.access_token) {
        (Some(url), Some(token)) => {
            tracing::info!("Remote event log enabled");
            Arc::new(HttpLogSink::new(url.clone(), token.clone()))
        }
        _ => {
            tracing::info!("Remote event log disabled (NullLogSink)");
            Arc::new(NullLogSink::new())
        }
    };

    let (event_logger, _worker) = EventLogger::spawn(sink, config.log_queue_capacity);
    tracing::info!("Event log worker started");

    let repository = Arc::new(InMemoryShortUrlRepository::new());
    let registry = ShortcodeRegistry::new(repository, Arc::new(SystemClock), &config.public_host)
        .with_default_validity(config.default_validity_minutes);

    AppState::new(Arc::new(registry), event_logger)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory short URL store
/// - Shortcode registry
/// - Event log worker (HTTP collector or NullLogSink)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

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
