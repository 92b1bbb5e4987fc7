//! Best-effort forwarding of structured events to a remote log collector.
//!
//! [`EventLogger`] validates tags synchronously and queues events;
//! [`run_log_worker`] delivers them to a [`LogSink`]:
//! - [`HttpLogSink`] - JSON POST with bearer token
//! - [`NullLogSink`] - used when no collector is configured
//!
//! Nothing in this module can fail a request.

mod event;
mod http_sink;
mod logger;
mod null_sink;
mod sink;

pub use event::{EventLogError, Level, LogEvent, Package, Stack};
pub use http_sink::HttpLogSink;
pub use logger::{EventLogger, run_log_worker};
pub use null_sink::NullLogSink;
pub use sink::{LogSink, LogSinkError, LogSinkResult};
