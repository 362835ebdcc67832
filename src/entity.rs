//! The shared entity contract.
//!
//! Every device and vehicle implements [`Entity`].  The trait has exactly one
//! required behavioural method, [`Entity::primary_action`]; a type that does
//! not provide it does not compile.  [`Entity::describe`] and
//! [`Entity::secondary_action`] carry defaults that variants may override.

use crate::error::ConstructionError;

/// Alert used by every entity that does not override
/// [`Entity::secondary_action`].
pub const DEFAULT_ALERT: &str = "Beep beep!";

/// Contract shared by both hierarchies.
pub trait Entity {
    /// Immutable identity and capacity.
    fn identity(&self) -> &Identity;

    /// Label printed in front of the capacity by [`describe`](Self::describe).
    fn capacity_label(&self) -> &'static str {
        "Max speed"
    }

    /// Unit printed after the capacity by [`describe`](Self::describe).
    fn capacity_unit(&self) -> &'static str {
        "km/h"
    }

    /// The operation every variant must implement itself.
    fn primary_action(&self) -> String;

    /// Generic alert; variants may replace it.
    fn secondary_action(&self) -> String {
        DEFAULT_ALERT.to_string()
    }

    /// One-line summary of identity and capacity.
    fn describe(&self) -> String {
        format!(
            "{} ({}: {} {})",
            self.name(),
            self.capacity_label(),
            self.capacity(),
            self.capacity_unit()
        )
    }

    fn name(&self) -> &str {
        self.identity().name()
    }

    fn capacity(&self) -> f64 {
        self.identity().capacity()
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Name plus numeric capacity.
///
/// The name never changes after construction.  The capacity can only be
/// replaced through [`Identity::set_capacity`], which applies the same
/// validation as construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    name: String,
    capacity: f64,
}

impl Identity {
    pub fn new(name: impl Into<String>, capacity: f64) -> Result<Self, ConstructionError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConstructionError::EmptyName);
        }
        check_capacity(capacity)?;
        Ok(Self { name, capacity })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: f64) -> Result<(), ConstructionError> {
        check_capacity(capacity)?;
        self.capacity = capacity;
        Ok(())
    }
}

fn check_capacity(capacity: f64) -> Result<(), ConstructionError> {
    if capacity.is_finite() && capacity >= 0.0 {
        Ok(())
    } else {
        Err(ConstructionError::InvalidCapacity(capacity))
    }
}
