//! # URL Shortener
//!
//! A small URL shortening service built with Axum. Short URLs expire after
//! a configurable validity, redirects are counted, and statistics stay
//! available after expiry. Records live in process memory.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits, clock
//! - **Application Layer** ([`application`]) - The shortcode registry
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and remote event log
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export PUBLIC_HOST="http://localhost:3000"
//! export LOG_API_URL="http://collector.local/logs"   # Optional
//! export ACCESS_TOKEN="..."                          # Required with LOG_API_URL
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CreateShortUrl, ShortcodeRegistry};
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{Click, NewShortUrl, ShortUrl};
    pub use crate::error::AppError;
    pub use crate::infrastructure::event_log::EventLogger;
    pub use crate::infrastructure::persistence::InMemoryShortUrlRepository;
    pub use crate::state::AppState;
}
