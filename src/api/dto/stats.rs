//! DTOs for short URL statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::domain::entities::ShortUrl;

/// Statistics for a single short URL.
///
/// Includes the record metadata, total click count and every click in the
/// order it was served.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub original_url: String,
    pub short_link: String,

    #[serde(serialize_with = "super::serialize_timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(serialize_with = "super::serialize_timestamp")]
    pub expiry: DateTime<Utc>,

    pub click_count: usize,
    pub clicks: Vec<ClickInfo>,
}

impl From<ShortUrl> for StatsResponse {
    fn from(record: ShortUrl) -> Self {
        Self {
            click_count: record.clicks.len(),
            original_url: record.original_url,
            short_link: record.short_link,
            created_at: record.created_at,
            expiry: record.expiry,
            clicks: record.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
