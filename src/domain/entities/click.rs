//! Click entity representing a single served redirect.

use chrono::{DateTime, Utc};

/// Placeholder recorded when a request carries no usable metadata.
pub const UNKNOWN: &str = "unknown";

/// A click recorded when a live shortcode is resolved.
///
/// Clicks are append-only; their position in [`super::ShortUrl::clicks`]
/// matches the order in which redirects were served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub location: String,
}

impl Click {
    /// Creates a click at `timestamp`.
    ///
    /// The referrer is stored as received; a missing or blank one becomes
    /// `"unknown"`. Geolocation is not resolved, so `location` is always
    /// `"unknown"`.
    pub fn new(timestamp: DateTime<Utc>, referrer: Option<&str>) -> Self {
        let referrer = referrer
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(UNKNOWN);

        Self {
            timestamp,
            referrer: referrer.to_string(),
            location: UNKNOWN.to_string(),
        }
    }
}
