//! Shortcode generation and validation utilities.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};
use regex::Regex;
use std::sync::LazyLock;

/// Length of generated shortcodes.
pub const GENERATED_CODE_LENGTH: usize = 5;

/// Compiled pattern every shortcode must match.
static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{3,10}$").expect("shortcode pattern is valid"));

/// Codes that would be shadowed by fixed routes.
const RESERVED_CODES: &[&str] = &["health", "shorturls"];

/// Generates a random alphanumeric shortcode of [`GENERATED_CODE_LENGTH`]
/// characters.
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `code` has the shape of a shortcode: 3-10 ASCII letters
/// or digits.
pub fn is_valid_shortcode(code: &str) -> bool {
    SHORTCODE_REGEX.is_match(code)
}

/// Validates a caller-requested shortcode.
///
/// # Errors
///
/// Returns [`AppError::InvalidShortcode`] if the code is not 3-10 ASCII
/// alphanumerics or collides with a fixed route segment.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !is_valid_shortcode(code) || RESERVED_CODES.contains(&code) {
        return Err(AppError::InvalidShortcode);
    }

    Ok(())
}
