//! Shortcode lifecycle: creation, resolution and statistics.

use std::sync::Arc;

use chrono::Duration;

use crate::domain::clock::Clock;
use crate::domain::entities::{Click, NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_url;

/// Validity applied when the caller does not specify one.
pub const DEFAULT_VALIDITY_MINUTES: u32 = 30;

/// Attempts made to find a free random shortcode before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Parameters of a create request.
#[derive(Debug, Clone, Default)]
pub struct CreateShortUrl {
    pub url: Option<String>,
    pub validity_minutes: Option<u32>,
    pub shortcode: Option<String>,
}

/// Service owning the shortcode lifecycle on top of a [`ShortUrlRepository`].
///
/// The registry never deletes records: expired shortcodes refuse redirects
/// but keep serving statistics.
pub struct ShortcodeRegistry {
    repository: Arc<dyn ShortUrlRepository>,
    clock: Arc<dyn Clock>,
    public_host: String,
    default_validity_minutes: u32,
}

impl ShortcodeRegistry {
    /// Creates a registry.
    ///
    /// `public_host` is the prefix of every short link (e.g.
    /// `https://s.example.com`); a trailing `/` is ignored.
    pub fn new(
        repository: Arc<dyn ShortUrlRepository>,
        clock: Arc<dyn Clock>,
        public_host: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            clock,
            public_host: public_host.into().trim_end_matches('/').to_string(),
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
        }
    }

    /// Overrides the validity used when a request omits one.
    ///
    /// Values below one minute are raised to one so that expiry always lies
    /// after creation.
    pub fn with_default_validity(mut self, minutes: u32) -> Self {
        self.default_validity_minutes = minutes.max(1);
        self
    }

    /// Builds the public short link for `shortcode`.
    pub fn short_link(&self, shortcode: &str) -> String {
        format!("{}/{}", self.public_host, shortcode)
    }

    /// Creates and stores a new short URL.
    ///
    /// # Code Selection
    ///
    /// - A requested shortcode is validated and used verbatim
    /// - Otherwise a random 5-character code is drawn, retrying on collision
    ///   up to [`MAX_GENERATION_ATTEMPTS`] times
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if the URL is missing or not absolute
    /// - [`AppError::Validation`] if the validity is zero
    /// - [`AppError::InvalidShortcode`] if the requested code is malformed
    /// - [`AppError::ShortcodeConflict`] if the requested code is taken
    /// - [`AppError::GenerationExhausted`] if no free random code was found
    pub async fn create(&self, request: CreateShortUrl) -> Result<ShortUrl, AppError> {
        let original_url = request.url.ok_or(AppError::InvalidUrl)?;
        validate_url(&original_url)?;

        let validity_minutes = match request.validity_minutes {
            Some(0) => {
                return Err(AppError::Validation(
                    "Invalid validity: Must be a positive number of minutes".to_string(),
                ));
            }
            Some(minutes) => minutes,
            None => self.default_validity_minutes,
        };

        if let Some(code) = &request.shortcode {
            validate_custom_code(code)?;
        }

        let created_at = self.clock.now();
        let expiry = created_at + Duration::minutes(i64::from(validity_minutes));

        let new_short_url = |shortcode: String| NewShortUrl {
            original_url: original_url.clone(),
            short_link: self.short_link(&shortcode),
            shortcode,
            created_at,
            expiry,
        };

        let record = match request.shortcode {
            Some(code) => self.repository.insert(new_short_url(code)).await?,
            None => self.insert_generated(new_short_url).await?,
        };

        tracing::info!(
            shortcode = %record.shortcode,
            expiry = %record.expiry,
            "Created short URL"
        );

        Ok(record)
    }

    /// Resolves a shortcode for redirect, records the click and returns the
    /// original URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the shortcode does not exist
    /// - [`AppError::Expired`] if `expiry <= now`; no click is recorded
    pub async fn resolve(&self, code: &str, referrer: Option<&str>) -> Result<String, AppError> {
        let click = Click::new(self.clock.now(), referrer);

        self.repository
            .record_click(code, click)
            .await
            .inspect_err(|e| {
                if matches!(e, AppError::Expired) {
                    tracing::debug!(shortcode = code, "Shortcode expired");
                }
            })
    }

    /// Returns the record with its click history, expired or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shortcode does not exist.
    pub async fn stats(&self, code: &str) -> Result<ShortUrl, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Number of stored records.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }

    async fn insert_generated(
        &self,
        new_short_url: impl Fn(String) -> NewShortUrl,
    ) -> Result<ShortUrl, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            match self.repository.insert(new_short_url(generate_code())).await {
                Ok(record) => return Ok(record),
                Err(AppError::ShortcodeConflict) => {
                    tracing::debug!(attempt, "Generated shortcode collided, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::warn!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "Exhausted shortcode generation attempts"
        );

        Err(AppError::GenerationExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::ManualClock;
    use crate::domain::repositories::MockShortUrlRepository;
    use crate::utils::code_generator::is_valid_shortcode;
    use chrono::{DateTime, Utc};

    const HOST: &str = "http://sho.rt";

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_700_000_000_000).unwrap()
    }

    fn registry(repo: MockShortUrlRepository) -> ShortcodeRegistry {
        ShortcodeRegistry::new(
            Arc::new(repo),
            Arc::new(ManualClock::new(fixed_now())),
            format!("{HOST}/"),
        )
    }

    fn stored(code: &str, expiry: DateTime<Utc>) -> ShortUrl {
        NewShortUrl {
            original_url: "https://example.com".to_string(),
            shortcode: code.to_string(),
            short_link: format!("{HOST}/{code}"),
            created_at: expiry - Duration::minutes(30),
            expiry,
        }
        .into()
    }

    fn request(url: &str) -> CreateShortUrl {
        CreateShortUrl {
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_with_generated_code() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_insert()
            .withf(|new| is_valid_shortcode(&new.shortcode) && new.shortcode.len() == 5)
            .times(1)
            .returning(|new| Ok(new.into()));

        let record = registry(repo)
            .create(request("https://example.com"))
            .await
            .unwrap();

        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.short_link, format!("{HOST}/{}", record.shortcode));
        assert_eq!(record.created_at, fixed_now());
        assert_eq!(record.expiry, fixed_now() + Duration::minutes(30));
        assert!(record.clicks.is_empty());
    }

    #[tokio::test]
    async fn test_create_with_requested_code_and_validity() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_insert()
            .withf(|new| new.shortcode == "abc12")
            .times(1)
            .returning(|new| Ok(new.into()));

        let record = registry(repo)
            .create(CreateShortUrl {
                url: Some("https://a.com".to_string()),
                validity_minutes: Some(5),
                shortcode: Some("abc12".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(record.shortcode, "abc12");
        assert!(record.short_link.ends_with("/abc12"));
        assert_eq!(record.expiry, fixed_now() + Duration::minutes(5));
    }

    #[tokio::test]
    async fn test_create_uses_configured_default_validity() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_insert().returning(|new| Ok(new.into()));

        let record = registry(repo)
            .with_default_validity(90)
            .create(request("https://example.com"))
            .await
            .unwrap();

        assert_eq!(record.expiry, fixed_now() + Duration::minutes(90));
    }

    #[tokio::test]
    async fn test_create_invalid_url_does_not_touch_store() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_insert().times(0);

        let registry = registry(repo);

        let err = registry.create(request("not-a-url")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl));

        let err = registry
            .create(CreateShortUrl::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl));
    }

    #[tokio::test]
    async fn test_create_invalid_shortcode_does_not_touch_store() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_insert().times(0);

        let registry = registry(repo);

        for code in ["a!", "toolongshortcode123", "ab", "health"] {
            let err = registry
                .create(CreateShortUrl {
                    url: Some("https://example.com".to_string()),
                    shortcode: Some(code.to_string()),
                    ..Default::default()
                })
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::InvalidShortcode), "code {code}");
        }
    }

    #[tokio::test]
    async fn test_create_zero_validity_rejected() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_insert().times(0);

        let err = registry(repo)
            .create(CreateShortUrl {
                url: Some("https://example.com".to_string()),
                validity_minutes: Some(0),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_requested_code_conflict() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(AppError::ShortcodeConflict));

        let err = registry(repo)
            .create(CreateShortUrl {
                url: Some("https://b.com".to_string()),
                shortcode: Some("abc12".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ShortcodeConflict));
    }

    #[tokio::test]
    async fn test_create_retries_generated_collisions() {
        let mut repo = MockShortUrlRepository::new();
        let mut seq = mockall::Sequence::new();
        repo.expect_insert()
            .times(3)
            .in_sequence(&mut seq)
            .returning(|_| Err(AppError::ShortcodeConflict));
        repo.expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|new| Ok(new.into()));

        let record = registry(repo)
            .create(request("https://example.com"))
            .await
            .unwrap();

        assert_eq!(record.shortcode.len(), 5);
    }

    #[tokio::test]
    async fn test_create_generation_exhausted() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_insert()
            .times(MAX_GENERATION_ATTEMPTS)
            .returning(|_| Err(AppError::ShortcodeConflict));

        let err = registry(repo)
            .create(request("https://example.com"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::GenerationExhausted {
                attempts: MAX_GENERATION_ATTEMPTS
            }
        ));
    }

    #[tokio::test]
    async fn test_create_propagates_store_failure() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(AppError::Internal("store unavailable".into())));

        let err = registry(repo)
            .create(request("https://example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_resolve_records_click() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_find_by_code().times(0);
        repo.expect_record_click()
            .withf(|code, click| {
                code == "live1"
                    && click.timestamp == fixed_now()
                    && click.referrer == "https://ref.example"
                    && click.location == "unknown"
            })
            .times(1)
            .returning(|_, _| Ok("https://example.com".to_string()));

        let url = registry(repo)
            .resolve("live1", Some("https://ref.example"))
            .await
            .unwrap();

        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_record_click()
            .times(1)
            .returning(|_, _| Err(AppError::NotFound));

        let err = registry(repo).resolve("nope", None).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn test_resolve_expired() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_find_by_code().times(0);
        repo.expect_record_click()
            .times(1)
            .returning(|_, _| Err(AppError::Expired));

        let err = registry(repo).resolve("edge1", None).await.unwrap_err();
        assert!(matches!(err, AppError::Expired));
    }

    #[tokio::test]
    async fn test_stats_ignores_expiry_and_does_not_click() {
        let mut repo = MockShortUrlRepository::new();
        let record = stored("old12", fixed_now() - Duration::hours(1));
        repo.expect_find_by_code()
            .returning(move |_| Ok(Some(record.clone())));
        repo.expect_record_click().times(0);

        let record = registry(repo).stats("old12").await.unwrap();
        assert_eq!(record.shortcode, "old12");
        assert!(record.is_expired_at(fixed_now()));
    }

    #[tokio::test]
    async fn test_stats_not_found() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_find_by_code().returning(|_| Ok(None));

        let err = registry(repo).stats("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn test_short_link_trims_trailing_slash() {
        let registry = registry(MockShortUrlRepository::new());
        assert_eq!(registry.short_link("abc12"), "http://sho.rt/abc12");
    }
}
