//! Catalog configuration.
//!
//! Describes which devices and vehicles exist at startup.  The defaults
//! reproduce the demonstration fleet; a JSON file with the same shape can
//! replace them (see [`crate::adapters::json_file`]).
//!
//! Kind-specific attributes are flattened into each entry, e.g.
//!
//! ```json
//! { "kind": "plane", "name": "Boeing 747", "max_speed": 920, "wingspan_m": 68.5 }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::device::{DEFAULT_CREDENTIAL, MAX_CREDENTIAL_LEN};

/// One vehicle entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSpec {
    /// Builder key, e.g. `"car"`.
    pub kind: String,
    pub name: String,
    /// km/h
    pub max_speed: f64,
    /// Kind-specific attributes (`fuel_type`, `wingspan_m`, ...).
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// One device entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSpec {
    /// Builder key, e.g. `"smartphone"`.
    pub kind: String,
    pub brand: String,
    pub model: String,
    pub storage_gb: u32,
    pub battery_mah: u32,
    pub price: f64,
    /// Kind-specific attributes (`refresh_rate_hz`, `cooling`).
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Full catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Credential every device starts with.
    #[serde(default = "default_credential")]
    pub default_credential: String,
    #[serde(default)]
    pub devices: Vec<DeviceSpec>,
    #[serde(default)]
    pub vehicles: Vec<VehicleSpec>,
}

fn default_credential() -> String {
    DEFAULT_CREDENTIAL.to_string()
}

fn attrs(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

impl VehicleSpec {
    pub fn new(kind: &str, name: &str, max_speed: f64, attributes: Value) -> Self {
        Self {
            kind: kind.to_string(),
            name: name.to_string(),
            max_speed,
            attributes: attrs(attributes),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_credential: default_credential(),
            devices: vec![
                DeviceSpec {
                    kind: "smartphone".into(),
                    brand: "Apple".into(),
                    model: "iPhone 15".into(),
                    storage_gb: 128,
                    battery_mah: 4000,
                    price: 999.0,
                    attributes: Map::new(),
                },
                DeviceSpec {
                    kind: "gaming_phone".into(),
                    brand: "ASUS".into(),
                    model: "ROG Phone 7".into(),
                    storage_gb: 512,
                    battery_mah: 6000,
                    price: 1299.0,
                    attributes: attrs(json!({ "refresh_rate_hz": 165, "cooling": "Vapor Chamber" })),
                },
            ],
            vehicles: vec![
                VehicleSpec::new("car", "Tesla Model S", 250.0, json!({ "fuel_type": "Electric" })),
                VehicleSpec::new("plane", "Boeing 747", 920.0, json!({ "wingspan_m": 68.5 })),
                VehicleSpec::new("boat", "Speedboat 5000", 80.0, json!({ "hull": "Speedboat" })),
                VehicleSpec::new("bicycle", "Mountain Bike Pro", 45.0, json!({ "gears": 21 })),
                VehicleSpec::new(
                    "rocket",
                    "Falcon Heavy",
                    28_000.0,
                    json!({ "fuel_capacity": "1,500 tons" }),
                ),
            ],
        }
    }
}

impl CatalogConfig {
    /// Reject catalogs the selector cannot run with.
    pub fn validate(&self) -> Result<(), &'static str> {
        let len = self.default_credential.chars().count();
        if len == 0 || len > MAX_CREDENTIAL_LEN {
            return Err("default_credential must be 1-16 characters");
        }
        if self.vehicles.is_empty() {
            return Err("catalog must list at least one vehicle");
        }
        Ok(())
    }
}
