//! Vehicle hierarchy.
//!
//! [`Vehicle`] is a tagged union over the five kinds in [`kinds`].  The
//! shared contract is reached through [`Entity`]; the kind-specific extra
//! operation is reached through [`Vehicle::maneuver`], which returns `None`
//! for kinds that have none.  Callers branch on that `Option` instead of on
//! the variant.

pub mod kinds;
pub mod parade;

pub use kinds::{Bicycle, Boat, Car, Plane, Rocket};
pub use parade::{ParadeStep, parade, race};

use crate::entity::{Entity, Identity};
use crate::error::ConstructionError;

/// Kind-specific extra operation (take-off, anchor, bell, countdown).
///
/// Not part of [`Entity`]: only some kinds implement it.
pub trait Maneuver {
    /// Short human label, e.g. "take off".
    fn label(&self) -> &'static str;

    fn perform(&self) -> String;
}

#[derive(Debug)]
pub enum Vehicle {
    Car(Car),
    Plane(Plane),
    Boat(Boat),
    Bicycle(Bicycle),
    Rocket(Rocket),
}

impl Vehicle {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Car(_) => "car",
            Self::Plane(_) => "plane",
            Self::Boat(_) => "boat",
            Self::Bicycle(_) => "bicycle",
            Self::Rocket(_) => "rocket",
        }
    }

    fn as_entity(&self) -> &dyn Entity {
        match self {
            Self::Car(v) => v,
            Self::Plane(v) => v,
            Self::Boat(v) => v,
            Self::Bicycle(v) => v,
            Self::Rocket(v) => v,
        }
    }

    /// The kind's extra operation, if it has one.
    pub fn maneuver(&self) -> Option<&dyn Maneuver> {
        match self {
            Self::Car(_) => None,
            Self::Plane(v) => Some(v),
            Self::Boat(v) => Some(v),
            Self::Bicycle(v) => Some(v),
            Self::Rocket(v) => Some(v),
        }
    }

    /// A remark about the kind-specific attribute.
    pub fn highlight(&self) -> String {
        match self {
            Self::Car(c) if c.is_electric() => "This car uses eco-friendly fuel!".to_string(),
            Self::Car(c) => format!("This car uses conventional fuel ({}).", c.fuel_type),
            Self::Plane(p) => format!("Impressive {}m wingspan!", p.wingspan_m),
            Self::Boat(b) => format!("This boat rides on a {} hull.", b.hull),
            Self::Bicycle(b) => format!("This bike has {} gears for all terrains!", b.gears),
            Self::Rocket(r) => format!("This rocket carries {} of fuel.", r.fuel_capacity),
        }
    }

    pub fn set_max_speed(&mut self, max_speed: f64) -> Result<(), ConstructionError> {
        let identity = match self {
            Self::Car(v) => &mut v.identity,
            Self::Plane(v) => &mut v.identity,
            Self::Boat(v) => &mut v.identity,
            Self::Bicycle(v) => &mut v.identity,
            Self::Rocket(v) => &mut v.identity,
        };
        identity.set_capacity(max_speed)
    }
}

impl Entity for Vehicle {
    fn identity(&self) -> &Identity {
        self.as_entity().identity()
    }

    fn primary_action(&self) -> String {
        self.as_entity().primary_action()
    }

    fn secondary_action(&self) -> String {
        self.as_entity().secondary_action()
    }

    fn describe(&self) -> String {
        self.as_entity().describe()
    }
}

impl From<Car> for Vehicle {
    fn from(v: Car) -> Self {
        Self::Car(v)
    }
}

impl From<Plane> for Vehicle {
    fn from(v: Plane) -> Self {
        Self::Plane(v)
    }
}

impl From<Boat> for Vehicle {
    fn from(v: Boat) -> Self {
        Self::Boat(v)
    }
}

impl From<Bicycle> for Vehicle {
    fn from(v: Bicycle) -> Self {
        Self::Bicycle(v)
    }
}

impl From<Rocket> for Vehicle {
    fn from(v: Rocket) -> Self {
        Self::Rocket(v)
    }
}
