//! Mock console adapters for integration tests.
//!
//! Records every line and event so tests can assert on the full history
//! without a terminal.

use polyfleet::app::events::SessionEvent;
use polyfleet::app::ports::{Console, ConfigError, ConfigPort, EventSink};
use polyfleet::app::service::Session;
use polyfleet::catalog::Catalog;
use polyfleet::config::CatalogConfig;

// ── MockConsole ───────────────────────────────────────────────

#[derive(Default)]
pub struct MockConsole {
    pub lines: Vec<String>,
}

#[allow(dead_code)]
impl MockConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.contains(needle)).count()
    }
}

impl Console for MockConsole {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

// ── MockSink ──────────────────────────────────────────────────

#[derive(Default)]
pub struct MockSink {
    pub events: Vec<SessionEvent>,
}

#[allow(dead_code)]
impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejections(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SessionEvent::InputRejected { .. }))
            .count()
    }
}

impl EventSink for MockSink {
    fn emit(&mut self, event: &SessionEvent) {
        self.events.push(event.clone());
    }
}

// ── MockConfig ────────────────────────────────────────────────

/// Serves a fixed catalog, validating it like the real adapters do.
pub struct MockConfig(pub CatalogConfig);

impl ConfigPort for MockConfig {
    fn load(&self) -> Result<CatalogConfig, ConfigError> {
        self.0.validate().map_err(ConfigError::ValidationFailed)?;
        Ok(self.0.clone())
    }
}

// ── Helpers ───────────────────────────────────────────────────

#[allow(dead_code)]
pub fn default_session() -> Session {
    let fleet = Catalog::builtin()
        .build(&MockConfig(CatalogConfig::default()).load().unwrap())
        .unwrap();
    Session::new(fleet.vehicles)
}
