//! DTOs for the short URL creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::CreateShortUrl;

/// Request to create a short URL.
///
/// `url` is optional at the serde level so that a missing URL is reported
/// as an invalid URL rather than a malformed body.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    pub url: Option<String>,

    /// Validity in minutes (default applied by the registry).
    #[validate(range(min = 1, message = "must be a positive number of minutes"))]
    pub validity: Option<u32>,

    /// Requested shortcode; generated when absent.
    pub shortcode: Option<String>,
}

impl From<ShortenRequest> for CreateShortUrl {
    fn from(request: ShortenRequest) -> Self {
        Self {
            url: request.url,
            validity_minutes: request.validity,
            shortcode: request.shortcode,
        }
    }
}

/// Response for a created short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_link: String,

    #[serde(serialize_with = "super::serialize_timestamp")]
    pub expiry: DateTime<Utc>,
}
