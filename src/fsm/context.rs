//! Shared mutable context threaded through every FSM handler.
//!
//! Handlers never print.  They append to [`SessionContext::output`] and
//! record what happened in `rejection` / `performed`; the session service
//! drains both after each line.

use crate::app::commands::VehicleAction;
use crate::error::InputError;
use crate::registry::Registry;
use crate::vehicle::Vehicle;

/// An action that actually ran against a vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Performed {
    /// Name of the vehicle it ran on.
    pub vehicle: String,
    pub action: VehicleAction,
}

pub struct SessionContext {
    pub fleet: Registry<Vehicle>,

    /// Zero-based index of the selected vehicle.  Only `Some` while in
    /// `EntitySelected`.
    pub selected: Option<usize>,

    /// Lines produced since the last drain.
    pub output: Vec<String>,

    /// Set when the last line was rejected.
    pub rejection: Option<InputError>,
    /// Set when the last line ran a vehicle action.
    pub performed: Option<Performed>,
}

impl SessionContext {
    pub fn new(fleet: Registry<Vehicle>) -> Self {
        Self {
            fleet,
            selected: None,
            output: Vec::new(),
            rejection: None,
            performed: None,
        }
    }

    pub fn say(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    pub fn say_all(&mut self, lines: impl IntoIterator<Item = String>) {
        self.output.extend(lines);
    }

    /// Report a bad line and remember why.
    pub fn reject(&mut self, err: InputError) {
        self.say(format!("Invalid choice: {err}. Please try again."));
        self.rejection = Some(err);
    }

    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        self.selected.and_then(|i| self.fleet.get(i))
    }

    pub fn take_output(&mut self) -> Vec<String> {
        core::mem::take(&mut self.output)
    }
}
