//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`             - Create a short URL
//! - `GET  /shorturls/{shortcode}` - Statistics
//! - `GET  /health`                - Health check
//! - `GET  /{shortcode}`           - Redirect
//!
//! Unmatched paths and methods get the same `{"error": ...}` body as every
//! other failure.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{
    health_handler, method_not_allowed_handler, not_found_handler, redirect_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Static segments (`/health`, `/shorturls`) take precedence over the
/// `/{shortcode}` capture; those names are refused as custom shortcodes.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/{shortcode}", get(redirect_handler))
        .merge(api::routes::shorturl_routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
