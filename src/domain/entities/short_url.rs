//! Short URL entity: the mapping from a shortcode to its destination.

use chrono::{DateTime, Utc};

use super::Click;

/// A stored short URL with its click history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub original_url: String,
    pub shortcode: String,
    pub short_link: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub clicks: Vec<Click>,
}

impl ShortUrl {
    /// Returns true once `now` has reached the expiry instant.
    ///
    /// A record whose expiry equals `now` is already expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry <= now
    }

    pub fn click_count(&self) -> usize {
        self.clicks.len()
    }
}

/// Input data for storing a new short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub original_url: String,
    pub shortcode: String,
    pub short_link: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
}

impl From<NewShortUrl> for ShortUrl {
    fn from(new: NewShortUrl) -> Self {
        Self {
            original_url: new.original_url,
            shortcode: new.shortcode,
            short_link: new.short_link,
            created_at: new.created_at,
            expiry: new.expiry,
            clicks: Vec::new(),
        }
    }
}
