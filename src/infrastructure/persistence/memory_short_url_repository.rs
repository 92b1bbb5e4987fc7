//! In-process implementation of the short URL repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::{Click, NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// Short URL store kept in process memory.
///
/// Records live until the process exits. Each operation holds the lock for
/// a single step, so check-and-insert and click appends are atomic.
#[derive(Default)]
pub struct InMemoryShortUrlRepository {
    records: RwLock<HashMap<String, ShortUrl>>,
}

impl InMemoryShortUrlRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrlRepository {
    async fn insert(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut records = self.records.write().await;

        match records.entry(new_short_url.shortcode.clone()) {
            Entry::Occupied(_) => Err(AppError::ShortcodeConflict),
            Entry::Vacant(slot) => Ok(slot.insert(new_short_url.into()).clone()),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.records.read().await.get(code).cloned())
    }

    async fn record_click(&self, code: &str, mut click: Click) -> Result<String, AppError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(code).ok_or(AppError::NotFound)?;

        if record.is_expired_at(click.timestamp) {
            return Err(AppError::Expired);
        }

        // Concurrent redirects stamp time before taking the lock; keep the
        // list non-decreasing in append order.
        if let Some(last) = record.clicks.last() {
            click.timestamp = click.timestamp.max(last.timestamp);
        }
        record.clicks.push(click);

        Ok(record.original_url.clone())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.records.read().await.len())
    }
}
