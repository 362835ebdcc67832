//! Fuzz target: catalog JSON → `Catalog::build`
//!
//! Invariants checked:
//! - No panics on any document, valid JSON or not
//! - A successful build yields exactly one entity per catalog entry, in order
//!
//! cargo fuzz run fuzz_catalog_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use polyfleet::catalog::Catalog;
use polyfleet::config::CatalogConfig;
use polyfleet::entity::Entity;

fuzz_target!(|data: &[u8]| {
    let Ok(config) = serde_json::from_slice::<CatalogConfig>(data) else {
        return;
    };
    if let Ok(fleet) = Catalog::builtin().build(&config) {
        assert_eq!(fleet.vehicles.len(), config.vehicles.len());
        assert_eq!(fleet.handsets.len(), config.devices.len());
        for (v, spec) in fleet.vehicles.iter().zip(&config.vehicles) {
            assert_eq!(v.name(), spec.name);
        }
    }
});
