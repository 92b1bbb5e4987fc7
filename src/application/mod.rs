//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::registry_service::ShortcodeRegistry`] - Shortcode creation, resolution and statistics

pub mod services;
