//! Concrete vehicle kinds.
//!
//! Each kind owns an [`Identity`] (name and max speed) plus exactly one
//! open, kind-specific attribute.

use super::Maneuver;
use crate::entity::{Entity, Identity};
use crate::error::ConstructionError;

// ═══════════════════════════════════════════════════════════════════════════
//  Car
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub struct Car {
    pub(super) identity: Identity,
    pub fuel_type: String,
}

impl Car {
    pub fn new(
        name: impl Into<String>,
        max_speed: f64,
        fuel_type: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        Ok(Self {
            identity: Identity::new(name, max_speed)?,
            fuel_type: fuel_type.into(),
        })
    }

    pub fn is_electric(&self) -> bool {
        self.fuel_type.eq_ignore_ascii_case("electric")
    }
}

impl Entity for Car {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn primary_action(&self) -> String {
        format!(
            "{} is driving on the road at up to {} km/h!",
            self.name(),
            self.capacity()
        )
    }

    fn secondary_action(&self) -> String {
        "Honk honk! Car horn sounding!".to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Plane
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub struct Plane {
    pub(super) identity: Identity,
    pub wingspan_m: f64,
}

impl Plane {
    pub fn new(
        name: impl Into<String>,
        max_speed: f64,
        wingspan_m: f64,
    ) -> Result<Self, ConstructionError> {
        Ok(Self {
            identity: Identity::new(name, max_speed)?,
            wingspan_m,
        })
    }

    pub fn take_off(&self) -> String {
        format!(
            "{} is taking off with {}m wingspan!",
            self.name(),
            self.wingspan_m
        )
    }
}

impl Entity for Plane {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn primary_action(&self) -> String {
        format!(
            "{} is flying in the sky at up to {} km/h!",
            self.name(),
            self.capacity()
        )
    }
}

impl Maneuver for Plane {
    fn label(&self) -> &'static str {
        "take off"
    }

    fn perform(&self) -> String {
        self.take_off()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Boat
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub struct Boat {
    pub(super) identity: Identity,
    pub hull: String,
}

impl Boat {
    pub fn new(
        name: impl Into<String>,
        max_speed: f64,
        hull: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        Ok(Self {
            identity: Identity::new(name, max_speed)?,
            hull: hull.into(),
        })
    }

    pub fn drop_anchor(&self) -> String {
        format!("{} is dropping anchor!", self.name())
    }
}

impl Entity for Boat {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn primary_action(&self) -> String {
        format!(
            "{} is sailing on water at up to {} km/h!",
            self.name(),
            self.capacity()
        )
    }

    /// Boats sound a foghorn instead of the generic alert.
    fn secondary_action(&self) -> String {
        "Foghorn blast! Boat horn sounding!".to_string()
    }
}

impl Maneuver for Boat {
    fn label(&self) -> &'static str {
        "drop anchor"
    }

    fn perform(&self) -> String {
        self.drop_anchor()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Bicycle
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub struct Bicycle {
    pub(super) identity: Identity,
    pub gears: u8,
}

impl Bicycle {
    pub fn new(name: impl Into<String>, max_speed: f64, gears: u8) -> Result<Self, ConstructionError> {
        Ok(Self {
            identity: Identity::new(name, max_speed)?,
            gears,
        })
    }

    pub fn ring_bell(&self) -> String {
        "Ring ring! Bicycle bell ringing!".to_string()
    }
}

impl Entity for Bicycle {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn primary_action(&self) -> String {
        format!(
            "{} is pedaling on the path at up to {} km/h!",
            self.name(),
            self.capacity()
        )
    }
}

impl Maneuver for Bicycle {
    fn label(&self) -> &'static str {
        "ring bell"
    }

    fn perform(&self) -> String {
        self.ring_bell()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Rocket
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub struct Rocket {
    pub(super) identity: Identity,
    pub fuel_capacity: String,
}

impl Rocket {
    pub fn new(
        name: impl Into<String>,
        max_speed: f64,
        fuel_capacity: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        Ok(Self {
            identity: Identity::new(name, max_speed)?,
            fuel_capacity: fuel_capacity.into(),
        })
    }

    pub fn countdown(&self) -> String {
        let ticks: Vec<String> = (1..=10).rev().map(|n| format!("{n}...")).collect();
        format!("{} LIFTOFF!", ticks.join(" "))
    }
}

impl Entity for Rocket {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn primary_action(&self) -> String {
        format!(
            "{} is launching into space at up to {} km/h!",
            self.name(),
            self.capacity()
        )
    }
}

impl Maneuver for Rocket {
    fn label(&self) -> &'static str {
        "launch countdown"
    }

    fn perform(&self) -> String {
        self.countdown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::DEFAULT_ALERT;

    #[test]
    fn travel_texts_are_kind_specific() {
        let car = Car::new("Tesla Model S", 250.0, "Electric").unwrap();
        let plane = Plane::new("Boeing 747", 920.0, 68.5).unwrap();
        assert_eq!(
            car.primary_action(),
            "Tesla Model S is driving on the road at up to 250 km/h!"
        );
        assert_eq!(
            plane.primary_action(),
            "Boeing 747 is flying in the sky at up to 920 km/h!"
        );
    }

    #[test]
    fn car_and_boat_override_alert() {
        let car = Car::new("c", 1.0, "Diesel").unwrap();
        let boat = Boat::new("b", 1.0, "Catamaran").unwrap();
        let bike = Bicycle::new("k", 1.0, 3).unwrap();
        assert_ne!(car.secondary_action(), DEFAULT_ALERT);
        assert_ne!(boat.secondary_action(), DEFAULT_ALERT);
        assert_eq!(bike.secondary_action(), DEFAULT_ALERT);
    }

    #[test]
    fn electric_detection_ignores_case() {
        assert!(Car::new("c", 1.0, "ELECTRIC").unwrap().is_electric());
        assert!(!Car::new("c", 1.0, "Petrol").unwrap().is_electric());
    }

    #[test]
    fn countdown_runs_ten_to_one() {
        let r = Rocket::new("Falcon Heavy", 28_000.0, "1,500 tons").unwrap();
        assert_eq!(
            r.countdown(),
            "10... 9... 8... 7... 6... 5... 4... 3... 2... 1... LIFTOFF!"
        );
    }

    #[test]
    fn plane_takeoff_mentions_wingspan() {
        let p = Plane::new("Boeing 747", 920.0, 68.5).unwrap();
        assert_eq!(p.take_off(), "Boeing 747 is taking off with 68.5m wingspan!");
    }
}
