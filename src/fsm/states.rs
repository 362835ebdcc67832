//! Concrete state handler functions and table builder.
//!
//! ```text
//!  AWAITING ──[2]──▶ SELECTING ──[valid n]──▶ SELECTED
//!   ▲  │ ▲               │                      │
//!   │  │ └──[invalid]────┘                      │
//!   │  │                                        │
//!   │  └──[1, 3, invalid]──▶ AWAITING (re-enter)│
//!   │                                           │
//!   └────────────[any action / invalid]─────────┘
//!
//!  AWAITING ──[4]──▶ EXITED
//! ```

use super::context::{Performed, SessionContext};
use super::{StateDescriptor, StateId};
use crate::app::commands::{MenuChoice, VehicleAction, numbered};
use crate::entity::Entity;
use crate::vehicle::{parade, race};
use log::{debug, warn};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the state table.  Called once per session.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0: AwaitingChoice
        StateDescriptor {
            id: StateId::AwaitingChoice,
            name: "AwaitingChoice",
            on_enter: Some(awaiting_enter),
            on_exit: None,
            on_input: awaiting_input,
        },
        // Index 1: SelectingEntity
        StateDescriptor {
            id: StateId::SelectingEntity,
            name: "SelectingEntity",
            on_enter: Some(selecting_enter),
            on_exit: None,
            on_input: selecting_input,
        },
        // Index 2: EntitySelected
        StateDescriptor {
            id: StateId::EntitySelected,
            name: "EntitySelected",
            on_enter: Some(selected_enter),
            on_exit: Some(selected_exit),
            on_input: selected_input,
        },
        // Index 3: Exited
        StateDescriptor {
            id: StateId::Exited,
            name: "Exited",
            on_enter: Some(exited_enter),
            on_exit: None,
            on_input: exited_input,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  AWAITING CHOICE: main menu
// ═══════════════════════════════════════════════════════════════════════════

fn awaiting_enter(ctx: &mut SessionContext) {
    ctx.say("");
    ctx.say("=== VEHICLE POLYMORPHISM DEMO ===");
    ctx.say_all(numbered(&MenuChoice::ALL, MenuChoice::label));
    ctx.say(format!("Enter your choice (1-{}):", MenuChoice::ALL.len()));
}

fn awaiting_input(ctx: &mut SessionContext, line: &str) -> Option<StateId> {
    let choice = match MenuChoice::parse(line) {
        Ok(c) => c,
        Err(e) => {
            debug!("main menu rejected {line:?}: {e}");
            ctx.reject(e);
            return Some(StateId::AwaitingChoice);
        }
    };

    match choice {
        MenuChoice::Parade => {
            ctx.say("--- Vehicle parade ---");
            let lines: Vec<String> = parade(&ctx.fleet)
                .iter()
                .flat_map(|step| step.lines())
                .collect();
            ctx.say_all(lines);
            Some(StateId::AwaitingChoice)
        }
        MenuChoice::SelectVehicle => Some(StateId::SelectingEntity),
        MenuChoice::Race => {
            ctx.say("--- Vehicle race ---");
            let lines = race(&ctx.fleet);
            ctx.say_all(lines);
            Some(StateId::AwaitingChoice)
        }
        MenuChoice::Exit => Some(StateId::Exited),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  SELECTING ENTITY: numbered vehicle list
// ═══════════════════════════════════════════════════════════════════════════

fn selecting_enter(ctx: &mut SessionContext) {
    ctx.say("Available vehicles:");
    let listing = ctx.fleet.listing();
    ctx.say_all(listing);
    ctx.say(format!("Select a vehicle (1-{}):", ctx.fleet.len()));
}

fn selecting_input(ctx: &mut SessionContext, line: &str) -> Option<StateId> {
    match ctx.fleet.select(line) {
        Ok(index) => {
            ctx.selected = Some(index);
            Some(StateId::EntitySelected)
        }
        Err(e) => {
            debug!("vehicle selection rejected {line:?}: {e}");
            ctx.reject(e);
            Some(StateId::AwaitingChoice)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  ENTITY SELECTED: per-vehicle action menu
// ═══════════════════════════════════════════════════════════════════════════

fn selected_enter(ctx: &mut SessionContext) {
    let Some(description) = ctx.selected_vehicle().map(Entity::describe) else {
        warn!("EntitySelected entered with no vehicle");
        ctx.say("No vehicle selected.");
        return;
    };
    ctx.say(format!("Selected: {description}"));
    ctx.say_all(numbered(&VehicleAction::ALL, VehicleAction::label));
    ctx.say(format!("Choose an action (1-{}):", VehicleAction::ALL.len()));
}

fn selected_exit(ctx: &mut SessionContext) {
    ctx.selected = None;
}

fn selected_input(ctx: &mut SessionContext, line: &str) -> Option<StateId> {
    let action = match VehicleAction::parse(line) {
        Ok(a) => a,
        Err(e) => {
            debug!("action rejected {line:?}: {e}");
            ctx.reject(e);
            return Some(StateId::AwaitingChoice);
        }
    };

    let Some(vehicle) = ctx.selected_vehicle() else {
        ctx.say("No vehicle selected.");
        return Some(StateId::AwaitingChoice);
    };

    let (text, ran) = match action {
        VehicleAction::Travel => (vehicle.primary_action(), true),
        VehicleAction::Signal => (vehicle.secondary_action(), true),
        VehicleAction::Maneuver => match vehicle.maneuver() {
            Some(m) => (m.perform(), true),
            None => (
                format!("{} has no special maneuver.", vehicle.name()),
                false,
            ),
        },
        VehicleAction::Highlight => (vehicle.highlight(), true),
    };
    let performed = ran.then(|| Performed {
        vehicle: vehicle.name().to_string(),
        action,
    });

    ctx.say(text);
    ctx.performed = performed;
    Some(StateId::AwaitingChoice)
}

// ═══════════════════════════════════════════════════════════════════════════
//  EXITED (terminal)
// ═══════════════════════════════════════════════════════════════════════════

fn exited_enter(ctx: &mut SessionContext) {
    ctx.say("Thanks for exploring polymorphism! Goodbye.");
}

fn exited_input(_ctx: &mut SessionContext, _line: &str) -> Option<StateId> {
    None
}
