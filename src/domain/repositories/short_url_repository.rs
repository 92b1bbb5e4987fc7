//! Repository trait for short URL storage.

use crate::domain::entities::{Click, NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Store of short URL records keyed by shortcode.
///
/// Every method is atomic with respect to the others: no caller observes a
/// half-applied insert or click append.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryShortUrlRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ShortcodeConflict`] if the shortcode is already
    /// taken. The existing record is left untouched.
    async fn insert(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record by shortcode.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Records a click on a live record and returns its original URL.
    ///
    /// The expiry check and the append happen as one step, judged at
    /// `click.timestamp`. The click history is not copied out.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no record has this shortcode
    /// - [`AppError::Expired`] if the record expired at or before the click;
    ///   nothing is appended
    async fn record_click(&self, code: &str, click: Click) -> Result<String, AppError>;

    /// Number of stored records, expired ones included.
    async fn count(&self) -> Result<usize, AppError>;
}
