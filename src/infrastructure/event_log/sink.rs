//! Delivery target trait for event log records.

use async_trait::async_trait;

use super::event::LogEvent;

/// Errors that can occur while delivering an event.
#[derive(Debug, thiserror::Error)]
pub enum LogSinkError {
    #[error("Log collector request failed: {0}")]
    Transport(String),

    #[error("Log collector rejected event with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Result type for sink operations.
pub type LogSinkResult<T> = Result<T, LogSinkError>;

/// Destination that accepts event log records.
///
/// Sinks are driven by the background worker only; request handlers never
/// await them.
///
/// # Implementations
///
/// - [`crate::infrastructure::event_log::HttpLogSink`] - remote collector over HTTP
/// - [`crate::infrastructure::event_log::NullLogSink`] - discards everything
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Delivers one event.
    ///
    /// # Errors
    ///
    /// Returns [`LogSinkError`] on transport failure or a non-success reply.
    /// The worker records the error and moves on.
    async fn send(&self, event: &LogEvent) -> LogSinkResult<()>;

    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;
}
