//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured session events through
//! the `log` facade.  `main` routes those records to stderr, so they never
//! interleave with menu output on stdout.

use log::{info, warn};

use crate::app::events::SessionEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`SessionEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::Started(state) => {
                info!("START | initial_state={:?}", state);
            }
            SessionEvent::StateChanged { from, to } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            SessionEvent::InputRejected { state, error } => {
                warn!("INPUT | rejected in {:?}: {}", state, error);
            }
            SessionEvent::ActionPerformed { vehicle, action } => {
                info!("ACTION | {} on '{}'", action, vehicle);
            }
            SessionEvent::InputClosed => {
                warn!("INPUT | closed before exit");
            }
            SessionEvent::Finished { inputs } => {
                info!("EXIT | after {} lines", inputs);
            }
        }
    }
}
