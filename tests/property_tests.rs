//! Property and fuzz-style tests for robustness of the core types.

use polyfleet::adapters::console::ScriptedInput;
use polyfleet::app::ports::{Console, EventSink};
use polyfleet::app::events::SessionEvent;
use polyfleet::app::service::Session;
use polyfleet::catalog::Catalog;
use polyfleet::config::CatalogConfig;
use polyfleet::device::{DISCOUNT_RANGE, Smartphone};
use polyfleet::entity::Entity;
use polyfleet::transcribe::transform;
use polyfleet::vehicle::{Bicycle, Boat, Car, Plane, Rocket, Vehicle, parade};
use proptest::prelude::*;

struct Null;
impl Console for Null {
    fn write_line(&mut self, _line: &str) {}
}
impl EventSink for Null {
    fn emit(&mut self, _event: &SessionEvent) {}
}

fn phone() -> Smartphone {
    Smartphone::new("Apple", "iPhone 15", 128, 4000, 999.0).unwrap()
}

// ── Credentials ───────────────────────────────────────────────

proptest! {
    /// Unlock succeeds iff the credential matches; a failure never unlocks.
    #[test]
    fn unlock_only_with_matching_credential(guess in "[0-9]{1,8}") {
        let mut p = phone();
        let result = p.unlock(&guess);
        prop_assert_eq!(result.is_ok(), guess == "1234");
        prop_assert_eq!(p.is_locked(), guess != "1234");
    }

    /// A credential change takes effect iff `old` matches.
    #[test]
    fn change_credential_requires_old(old in "[0-9]{4}", new in "[0-9a-z]{1,16}") {
        let mut p = phone();
        let changed = p.change_credential(&old, &new).is_ok();
        prop_assert_eq!(changed, old == "1234");
        if changed {
            prop_assert!(p.unlock(&new).is_ok());
        } else {
            prop_assert!(p.unlock("1234").is_ok());
        }
    }

    /// In-range discounts scale the price; out-of-range ones change nothing.
    #[test]
    fn discount_bounds(percent in -100.0f64..200.0) {
        let mut p = phone();
        let result = p.apply_discount(percent);
        if DISCOUNT_RANGE.contains(&percent) {
            let expected = format!("${:.2}", 999.0 * (1.0 - percent / 100.0));
            prop_assert_eq!(result.unwrap(), expected);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(p.get_price(), "$999.00");
        }
    }
}

// ── Parade ────────────────────────────────────────────────────

fn arb_vehicle() -> impl Strategy<Value = Vehicle> {
    (0u8..5, 1.0f64..1000.0, "[A-Za-z]{1,8}").prop_map(|(kind, speed, name)| match kind {
        0 => Vehicle::from(Car::new(name, speed, "Petrol").unwrap()),
        1 => Vehicle::from(Plane::new(name, speed, 35.0).unwrap()),
        2 => Vehicle::from(Boat::new(name, speed, "Catamaran").unwrap()),
        3 => Vehicle::from(Bicycle::new(name, speed, 21).unwrap()),
        _ => Vehicle::from(Rocket::new(name, speed, "500 tons").unwrap()),
    })
}

proptest! {
    /// Parade visits in insertion order with at most one maneuver each,
    /// and only kinds that have one perform it.
    #[test]
    fn parade_preserves_insertion_order(
        vehicles in proptest::collection::vec(arb_vehicle(), 0..20)
    ) {
        let steps = parade(&vehicles);
        prop_assert_eq!(steps.len(), vehicles.len());
        for (i, (step, v)) in steps.iter().zip(&vehicles).enumerate() {
            prop_assert_eq!(step.position, i + 1);
            prop_assert_eq!(&step.description, &v.describe());
            prop_assert_eq!(step.maneuver.is_some(), v.maneuver().is_some());
            prop_assert_eq!(step.maneuver.clone(), v.maneuver().map(|m| m.perform()));
            prop_assert_eq!(step.lines().len(), if v.maneuver().is_some() { 4 } else { 3 });
        }
    }
}

// ── Session robustness ────────────────────────────────────────

proptest! {
    /// No input sequence panics, and the summary adds up.
    #[test]
    fn session_survives_arbitrary_lines(lines in proptest::collection::vec(".{0,12}", 0..40)) {
        let fleet = Catalog::builtin().build(&CatalogConfig::default()).unwrap();
        let mut session = Session::new(fleet.vehicles);
        let summary = session.run(&mut ScriptedInput::new(lines.clone()), &mut Null, &mut Null);

        prop_assert!(summary.inputs as usize <= lines.len());
        prop_assert!(summary.rejected + summary.actions <= summary.inputs);
        prop_assert_eq!(summary.exited, session.is_finished());
        if !summary.exited {
            prop_assert_eq!(summary.inputs as usize, lines.len());
        }
    }
}

// ── Transcription ─────────────────────────────────────────────

proptest! {
    /// Output line numbers are strictly increasing and within the input.
    #[test]
    fn transform_numbers_are_increasing(text in "[a-z \n]{0,200}") {
        let out = transform(&text);
        let total = text.split('\n').count();
        let mut last = 0usize;
        for line in out.lines() {
            let (n, rest) = line.split_once(": ").unwrap();
            let n: usize = n.parse().unwrap();
            prop_assert!(n > last && n <= total);
            prop_assert_eq!(rest.to_uppercase(), rest);
            last = n;
        }
    }
}
