//! Infrastructure layer for storage and external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - Repository implementations
//! - [`event_log`] - Remote event log collector client

pub mod event_log;
pub mod persistence;
