//! Port traits: the boundary between the selector core and the terminal.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Session (domain)
//! ```
//!
//! Driven adapters (stdin, stdout, scripts, event logs, config files)
//! implement these traits.  The [`Session`](super::service::Session)
//! consumes them via generics, so the core never touches stdio directly
//! and every test can run against in-memory mocks.

use crate::config::CatalogConfig;

// ───────────────────────────────────────────────────────────────
// Input port (driving adapter: user → domain)
// ───────────────────────────────────────────────────────────────

/// Line-oriented input.  `None` means the stream is closed.
pub trait InputPort {
    fn next_line(&mut self) -> Option<String>;
}

// ───────────────────────────────────────────────────────────────
// Console port (driven adapter: domain → user)
// ───────────────────────────────────────────────────────────────

pub trait Console {
    fn write_line(&mut self, line: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`SessionEvent`](super::events::SessionEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::SessionEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ← catalog source)
// ───────────────────────────────────────────────────────────────

/// Loads the catalog.
///
/// Implementations MUST run [`CatalogConfig::validate`] and report a
/// failure as [`ConfigError::ValidationFailed`], not patch the values.
pub trait ConfigPort {
    fn load(&self) -> Result<CatalogConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug)]
pub enum ConfigError {
    /// The catalog source does not exist.
    NotFound(String),
    /// The source exists but is not a valid catalog document.
    Corrupted(String),
    /// A field failed validation.
    ValidationFailed(&'static str),
    /// Generic I/O error while reading the source.
    IoError(String),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "catalog not found: {}", path),
            Self::Corrupted(msg) => write!(f, "catalog corrupted: {}", msg),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
