//! Handler for short URL creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::infrastructure::event_log::{Level, Package};
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "validity": 30,       // optional, minutes
///   "shortcode": "abc12"  // optional, 3-10 alphanumerics
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortLink": "https://sho.rt/abc12",
///   "expiry": "2025-01-01T12:30:00.000Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request for an invalid URL, shortcode, validity or body
/// - 409 Conflict if the requested shortcode is already in use
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let result = create(&state, payload).await;

    match &result {
        Ok((_, Json(response))) => state.event_logger.backend(
            Level::Info,
            Package::Handler,
            format!("Created short URL: {}", response.short_link),
        ),
        Err(err) => state.event_logger.backend(
            Level::Error,
            Package::Handler,
            format!("Error creating short URL: {}", err),
        ),
    }

    result
}

async fn create(
    state: &AppState,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let record = state.registry.create(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_link: record.short_link,
            expiry: record.expiry,
        }),
    ))
}
