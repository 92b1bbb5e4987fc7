//! Non-blocking event logger and its background delivery worker.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::event::{EventLogError, Level, LogEvent, Package, Stack};
use super::sink::LogSink;

/// Handle for emitting events to the remote log collector.
///
/// Events are queued on a bounded channel and delivered by
/// [`run_log_worker`]. Queuing never blocks: when the queue is full or the
/// worker is gone the event is dropped with a local warning. Delivery
/// failures never reach the caller.
#[derive(Clone)]
pub struct EventLogger {
    sender: mpsc::Sender<LogEvent>,
}

impl EventLogger {
    /// Creates a logger and the receiving end of its queue.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<LogEvent>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }

    /// Creates a logger whose events are delivered to `sink` by a spawned
    /// worker task.
    pub fn spawn(sink: Arc<dyn LogSink>, capacity: usize) -> (Self, JoinHandle<()>) {
        let (logger, receiver) = Self::channel(capacity);
        let handle = tokio::spawn(run_log_worker(receiver, sink));
        (logger, handle)
    }

    /// Validates the tags and queues the event.
    ///
    /// # Errors
    ///
    /// Returns [`EventLogError::InvalidArgument`] if `stack`, `level` or
    /// `package` is not a recognised tag. Nothing is queued in that case.
    pub fn log(
        &self,
        stack: &str,
        level: &str,
        package: &str,
        message: impl Into<String>,
    ) -> Result<(), EventLogError> {
        let event = LogEvent::parse(stack, level, package, message)?;
        self.log_event(event);
        Ok(())
    }

    /// Queues an already-typed event.
    pub fn log_event(&self, event: LogEvent) {
        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!(
                    event_level = %event.level,
                    package = %event.package,
                    "Event log queue full, dropping event"
                );
            }
            Err(TrySendError::Closed(event)) => {
                warn!(
                    event_level = %event.level,
                    package = %event.package,
                    "Event log worker stopped, dropping event"
                );
            }
        }
    }

    /// Shorthand for a backend event.
    pub fn backend(&self, level: Level, package: Package, message: impl Into<String>) {
        self.log_event(LogEvent::new(Stack::Backend, level, package, message));
    }

    /// Returns true once the worker has shut down.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Slots currently free in the queue.
    pub fn free_slots(&self) -> usize {
        self.sender.capacity()
    }

    /// Size the queue was created with.
    pub fn max_capacity(&self) -> usize {
        self.sender.max_capacity()
    }
}

/// Delivers queued events to `sink` until every [`EventLogger`] is dropped.
///
/// Events are sent one at a time in queue order, without retry. Failures
/// are logged locally and the next event is processed.
pub async fn run_log_worker(mut receiver: mpsc::Receiver<LogEvent>, sink: Arc<dyn LogSink>) {
    debug!(sink = sink.name(), "Event log worker started");

    while let Some(event) = receiver.recv().await {
        if let Err(e) = sink.send(&event).await {
            warn!(sink = sink.name(), error = %e, "Failed to deliver event log");
        }
    }

    debug!("Event log worker stopped");
}
