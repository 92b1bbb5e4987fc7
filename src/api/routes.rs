//! API route configuration.

use crate::api::handlers::{shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL management routes.
///
/// # Endpoints
///
/// - `POST /shorturls`             - Create a short URL
/// - `GET  /shorturls/{shortcode}` - Statistics for a short URL
pub fn shorturl_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/{shortcode}", get(stats_handler))
}
