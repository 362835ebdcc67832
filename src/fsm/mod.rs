//! Function-pointer finite state machine driving the interactive selector.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  StateTable                                                   │
//! │  ┌─────────────────┬───────────┬──────────┬────────────────┐  │
//! │  │ StateId         │ on_enter  │ on_exit  │ on_input       │  │
//! │  ├─────────────────┼───────────┼──────────┼────────────────┤  │
//! │  │ AwaitingChoice  │ fn(ctx)   │   -      │ fn(ctx, line)  │  │
//! │  │ SelectingEntity │ fn(ctx)   │   -      │ fn(ctx, line)  │  │
//! │  │ EntitySelected  │ fn(ctx)   │ fn(ctx)  │ fn(ctx, line)  │  │
//! │  │ Exited          │ fn(ctx)   │   -      │ fn(ctx, line)  │  │
//! │  └─────────────────┴───────────┴──────────┴────────────────┘  │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each input line is handed to `on_input` for the **current** state.
//! If it returns `Some(next_id)`, the engine runs `on_exit` for the
//! current state, then `on_enter` for the next, and updates the current
//! pointer.  Returning the current state re-enters it, which reprints
//! its prompt.  All handlers receive `&mut SessionContext`.

pub mod context;
pub mod states;

use context::SessionContext;
use log::info;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Every state of the selector.
/// Must stay in sync with the table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    AwaitingChoice = 0,
    SelectingEntity = 1,
    EntitySelected = 2,
    Exited = 3,
}

impl StateId {
    /// Total number of states, used to size the table array.
    pub const COUNT: usize = 4;

    /// Convert an index back to `StateId`.  Panics on out-of-range in
    /// debug builds; returns `Exited` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::AwaitingChoice,
            1 => Self::SelectingEntity,
            2 => Self::EntitySelected,
            3 => Self::Exited,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Exited
            }
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Exited
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
pub type StateActionFn = fn(&mut SessionContext);

/// Signature for the per-line input handler.
/// Returns `Some(next)` to transition (or re-enter), `None` to stay silently.
pub type StateInputFn = fn(&mut SessionContext, &str) -> Option<StateId>;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

pub struct StateDescriptor {
    pub id: StateId,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_input: StateInputFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

pub struct Fsm {
    /// Fixed-size table indexed by `StateId as usize`.
    table: [StateDescriptor; StateId::COUNT],
    current: usize,
}

impl Fsm {
    pub fn new(table: [StateDescriptor; StateId::COUNT], initial: StateId) -> Self {
        Self {
            table,
            current: initial as usize,
        }
    }

    /// Run the initial `on_enter` for the starting state.
    /// Call once after construction, before the first `feed()`.
    pub fn start(&mut self, ctx: &mut SessionContext) {
        info!("FSM starting in state: {}", self.table[self.current].name);
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Hand one input line to the current state.
    ///
    /// 1. Call `on_input` for the current state.
    /// 2. If it returns `Some(next)`, execute the transition:
    ///    `on_exit(current)` → update pointer → `on_enter(next)`.
    pub fn feed(&mut self, ctx: &mut SessionContext, line: &str) {
        let next = (self.table[self.current].on_input)(ctx, line);

        if let Some(next_id) = next {
            self.transition(next_id, ctx);
        }
    }

    pub fn current_state(&self) -> StateId {
        StateId::from_index(self.current)
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next_id: StateId, ctx: &mut SessionContext) {
        let next_idx = next_id as usize;

        info!(
            "FSM transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        self.current = next_idx;

        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }
}
