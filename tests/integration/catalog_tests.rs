//! Integration tests: catalog documents → ConfigPort → Catalog → Session.

use polyfleet::adapters::console::ScriptedInput;
use polyfleet::app::ports::{ConfigError, ConfigPort};
use polyfleet::app::service::Session;
use polyfleet::catalog::Catalog;
use polyfleet::config::{CatalogConfig, VehicleSpec};
use polyfleet::entity::Entity;
use polyfleet::error::{ConstructionError, Error};
use serde_json::json;

use super::mock_io::{MockConfig, MockConsole, MockSink};

#[test]
fn custom_fleet_drives_the_menu() {
    let config: CatalogConfig = serde_json::from_value(json!({
        "vehicles": [
            { "kind": "boat", "name": "Dinghy", "max_speed": 12, "hull": "Inflatable" },
            { "kind": "plane", "name": "Cessna 172", "max_speed": 226, "wingspan_m": 11 }
        ]
    }))
    .unwrap();
    let fleet = Catalog::builtin()
        .build(&MockConfig(config).load().unwrap())
        .unwrap();
    assert!(fleet.handsets.is_empty());

    let mut session = Session::new(fleet.vehicles);
    let mut console = MockConsole::new();
    let mut sink = MockSink::new();
    session.run(
        &mut ScriptedInput::new(["2", "3", "2", "2", "3", "4"]),
        &mut console,
        &mut sink,
    );

    // Only two vehicles, so "3" is out of range.
    assert!(console.contains("Invalid choice: 3 is not between 1 and 2"));
    assert!(console.contains("Cessna 172 is taking off"));
    assert!(session.is_finished());
}

#[test]
fn unknown_kind_aborts_build() {
    let mut config = CatalogConfig::default();
    config
        .vehicles
        .insert(0, VehicleSpec::new("submarine", "Nautilus", 50.0, json!({})));
    assert_eq!(
        Catalog::builtin().build(&config).err(),
        Some(Error::Construction(ConstructionError::MissingImplementation {
            kind: "submarine".into()
        }))
    );
}

#[test]
fn invalid_catalog_rejected_at_the_port() {
    let mut config = CatalogConfig::default();
    config.default_credential = String::new();
    assert!(matches!(
        MockConfig(config).load(),
        Err(ConfigError::ValidationFailed(_))
    ));
}

#[test]
fn registered_kind_extends_catalog() {
    fn build_glider(
        spec: &VehicleSpec,
    ) -> Result<polyfleet::vehicle::Vehicle, ConstructionError> {
        Ok(polyfleet::vehicle::Plane::new(&spec.name, spec.max_speed, 15.0)?.into())
    }

    let mut catalog = Catalog::builtin();
    catalog.register_vehicle("glider", build_glider);
    let v = catalog
        .build_vehicle(&VehicleSpec::new("glider", "ASK 21", 280.0, json!({})))
        .unwrap();
    assert_eq!(v.kind(), "plane");
    assert_eq!(v.name(), "ASK 21");
}
