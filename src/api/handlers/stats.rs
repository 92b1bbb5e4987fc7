//! Handler for short URL statistics.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::infrastructure::event_log::{Level, Package};
use crate::state::AppState;

/// Retrieves statistics for a shortcode.
///
/// # Endpoint
///
/// `GET /shorturls/{shortcode}`
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "shortLink": "https://sho.rt/abc12",
///   "createdAt": "2025-01-01T12:00:00.000Z",
///   "expiry": "2025-01-01T12:30:00.000Z",
///   "clickCount": 1,
///   "clicks": [
///     { "timestamp": "2025-01-01T12:05:00.000Z", "referrer": "unknown", "location": "unknown" }
///   ]
/// }
/// ```
///
/// Expired shortcodes keep reporting statistics. Reading statistics does
/// not count as a click.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<StatsResponse>, AppError> {
    let Path(shortcode) = path?;

    match state.registry.stats(&shortcode).await {
        Ok(record) => {
            state.event_logger.backend(
                Level::Info,
                Package::Handler,
                format!("Retrieved stats for {}", shortcode),
            );
            Ok(Json(record.into()))
        }
        Err(err) => {
            state.event_logger.backend(
                Level::Error,
                Package::Handler,
                format!("{}: {}", err, shortcode),
            );
            Err(err)
        }
    }
}
