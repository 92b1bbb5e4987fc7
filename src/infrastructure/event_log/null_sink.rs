//! Sink used when no collector is configured.

use async_trait::async_trait;
use tracing::debug;

use super::event::LogEvent;
use super::sink::{LogSink, LogSinkResult};

/// A sink that drops every event.
pub struct NullLogSink;

impl NullLogSink {
    pub fn new() -> Self {
        debug!("Using NullLogSink (remote event log disabled)");
        Self
    }
}

impl Default for NullLogSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogSink for NullLogSink {
    async fn send(&self, _event: &LogEvent) -> LogSinkResult<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}
