//! Helper functions used across the application.
//!
//! - [`code_generator`] - Shortcode generation and validation
//! - [`url_validator`] - Destination URL validation

pub mod code_generator;
pub mod url_validator;
