//! Outbound session events.
//!
//! The [`Session`](super::service::Session) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Console text goes through
//! [`Console`](super::ports::Console); events are the structured record of
//! what the session did.

use super::commands::VehicleAction;
use crate::error::InputError;
use crate::fsm::StateId;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The session has started (carries initial state).
    Started(StateId),

    /// The FSM moved to a different state.
    StateChanged { from: StateId, to: StateId },

    /// A line was rejected while in `state`.
    InputRejected { state: StateId, error: InputError },

    /// A vehicle action ran.
    ActionPerformed { vehicle: String, action: VehicleAction },

    /// Input ended before the user chose Exit.
    InputClosed,

    /// The session reached `Exited`.
    Finished { inputs: u64 },
}
