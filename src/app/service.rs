//! Session service, the hexagonal core of the selector.
//!
//! [`Session`] owns the FSM and its context.  Every line of input flows
//! through [`Session::handle_line`]; output and events leave through the
//! port traits passed at each call, so the whole service runs against
//! mock adapters in tests.
//!
//! ```text
//!  InputPort ──▶ ┌──────────────────────┐ ──▶ Console
//!                │       Session        │
//!                │   FSM · Registry     │ ──▶ EventSink
//!                └──────────────────────┘
//! ```

use log::{info, warn};

use crate::fsm::context::SessionContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};
use crate::registry::Registry;
use crate::vehicle::Vehicle;

use super::events::SessionEvent;
use super::ports::{Console, EventSink, InputPort};

/// How a [`Session::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub inputs: u64,
    pub rejected: u64,
    pub actions: u64,
    /// `true` if the user chose Exit, `false` if input ran out first.
    pub exited: bool,
}

pub struct Session {
    fsm: Fsm,
    ctx: SessionContext,
    started: bool,
    echo: bool,
    summary: SessionSummary,
}

impl Session {
    /// Does **not** print the menu; call [`start`](Self::start) or
    /// [`run`](Self::run) next.
    pub fn new(fleet: Registry<Vehicle>) -> Self {
        Self {
            fsm: Fsm::new(build_state_table(), StateId::AwaitingChoice),
            ctx: SessionContext::new(fleet),
            started: false,
            echo: false,
            summary: SessionSummary::default(),
        }
    }

    /// Write each accepted line to the console as `"> line"` before
    /// handling it, so a scripted run reads like a typed one.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Print the main menu.  Idempotent.
    pub fn start(&mut self, console: &mut impl Console, sink: &mut impl EventSink) {
        if self.started {
            return;
        }
        self.started = true;
        self.fsm.start(&mut self.ctx);
        self.flush(console);
        sink.emit(&SessionEvent::Started(self.fsm.current_state()));
        info!("Session started in {:?}", self.fsm.current_state());
    }

    /// Feed one line.  Lines after `Exited` are ignored.
    pub fn handle_line(
        &mut self,
        line: &str,
        console: &mut impl Console,
        sink: &mut impl EventSink,
    ) -> StateId {
        self.start(console, sink);

        let prev = self.fsm.current_state();
        if prev.is_terminal() {
            return prev;
        }

        if self.echo {
            console.write_line(&format!("> {line}"));
        }
        self.summary.inputs += 1;
        self.ctx.rejection = None;
        self.ctx.performed = None;
        self.fsm.feed(&mut self.ctx, line);
        self.flush(console);

        if let Some(error) = self.ctx.rejection.take() {
            self.summary.rejected += 1;
            sink.emit(&SessionEvent::InputRejected { state: prev, error });
        }
        if let Some(p) = self.ctx.performed.take() {
            self.summary.actions += 1;
            sink.emit(&SessionEvent::ActionPerformed {
                vehicle: p.vehicle,
                action: p.action,
            });
        }

        let next = self.fsm.current_state();
        if next != prev {
            sink.emit(&SessionEvent::StateChanged { from: prev, to: next });
        }
        if next.is_terminal() {
            self.summary.exited = true;
            sink.emit(&SessionEvent::Finished {
                inputs: self.summary.inputs,
            });
        }
        next
    }

    /// Drive the session until Exit or end of input.
    pub fn run(
        &mut self,
        input: &mut impl InputPort,
        console: &mut impl Console,
        sink: &mut impl EventSink,
    ) -> SessionSummary {
        self.start(console, sink);
        while !self.is_finished() {
            match input.next_line() {
                Some(line) => {
                    self.handle_line(&line, console, sink);
                }
                None => {
                    warn!(
                        "input closed in {:?} after {} lines",
                        self.fsm.current_state(),
                        self.summary.inputs
                    );
                    sink.emit(&SessionEvent::InputClosed);
                    break;
                }
            }
        }
        self.summary
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    pub fn is_finished(&self) -> bool {
        self.fsm.current_state().is_terminal()
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    pub fn fleet(&self) -> &Registry<Vehicle> {
        &self.ctx.fleet
    }

    /// Zero-based index of the selected vehicle, if any.
    pub fn selected(&self) -> Option<usize> {
        self.ctx.selected
    }

    // ── Internal ──────────────────────────────────────────────

    fn flush(&mut self, console: &mut impl Console) {
        for line in self.ctx.take_output() {
            console.write_line(&line);
        }
    }
}
