//! Destination URL validation.

use crate::error::AppError;
use url::Url;

/// Checks that `input` is a syntactically valid absolute URL.
///
/// The URL is not rewritten: callers store the string exactly as submitted.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] for relative references and anything
/// the WHATWG URL parser rejects.
pub fn validate_url(input: &str) -> Result<(), AppError> {
    if input.trim().is_empty() {
        return Err(AppError::InvalidUrl);
    }

    Url::parse(input).map(|_| ()).map_err(|e| {
        tracing::debug!(url = input, error = %e, "Rejected destination URL");
        AppError::InvalidUrl
    })
}
