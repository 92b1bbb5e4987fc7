//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortcodeRegistry;
use crate::infrastructure::event_log::EventLogger;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ShortcodeRegistry>,
    pub event_logger: EventLogger,
}

impl AppState {
    pub fn new(registry: Arc<ShortcodeRegistry>, event_logger: EventLogger) -> Self {
        Self {
            registry,
            event_logger,
        }
    }
}
