//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::infrastructure::event_log::{Level, Package};
use crate::state::AppState;

/// Redirects a shortcode to its original URL.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Request Flow
///
/// 1. Resolve the shortcode through the registry
/// 2. The registry rejects expired codes and records a click otherwise
///    (referrer from the `Referer` header, `"unknown"` if absent)
/// 3. Return `301 Moved Permanently` with `Location` set to the original URL
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
/// Returns 410 Gone if the shortcode has expired.
/// Returns 400 Bad Request if the path segment is not valid UTF-8.
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let Path(shortcode) = path?;
    let referrer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok());

    let original_url = match state.registry.resolve(&shortcode, referrer).await {
        Ok(original_url) => original_url,
        Err(err) => {
            state.event_logger.backend(
                Level::Error,
                Package::Handler,
                format!("{}: {}", err, shortcode),
            );
            return Err(err);
        }
    };

    debug!(shortcode = %shortcode, "Redirecting");
    state.event_logger.backend(
        Level::Info,
        Package::Handler,
        format!("Redirecting to {}", original_url),
    );

    let location = location_header(&original_url)?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}

/// Builds a `Location` value, percent-encoding anything a header cannot
/// carry verbatim.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    let serialized = Url::parse(original_url)
        .map(String::from)
        .unwrap_or_else(|_| original_url.to_string());

    HeaderValue::try_from(serialized)
        .map_err(|e| AppError::Internal(format!("Unrepresentable redirect target: {}", e)))
}
