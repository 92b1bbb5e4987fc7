#![allow(dead_code)]

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::mpsc;
use url_shortener::application::services::ShortcodeRegistry;
use url_shortener::domain::clock::ManualClock;
use url_shortener::infrastructure::event_log::{EventLogger, LogEvent};
use url_shortener::infrastructure::persistence::InMemoryShortUrlRepository;
use url_shortener::state::AppState;

pub const TEST_HOST: &str = "http://sho.rt";

/// Fixed start instant so timestamps in responses are predictable.
pub fn test_start() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-01T10:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub struct TestContext {
    pub state: AppState,
    pub clock: Arc<ManualClock>,
    pub events: mpsc::Receiver<LogEvent>,
}

impl TestContext {
    /// Drains every event log record queued so far.
    pub fn drain_events(&mut self) -> Vec<LogEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }
}

/// Builds a fresh, isolated application state per test.
pub fn create_test_state() -> TestContext {
    let clock = Arc::new(ManualClock::new(test_start()));
    let repository = Arc::new(InMemoryShortUrlRepository::new());
    let registry = Arc::new(ShortcodeRegistry::new(
        repository,
        clock.clone(),
        TEST_HOST,
    ));
    let (event_logger, events) = EventLogger::channel(256);

    TestContext {
        state: AppState::new(registry, event_logger),
        clock,
        events,
    }
}
