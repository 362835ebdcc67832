//! Builder table that turns a [`CatalogConfig`] into registries.
//!
//! Each kind maps to a plain `fn` pointer, in the same spirit as the FSM
//! state table.  A kind with no entry has no way to produce its primary
//! action, so building it fails with
//! [`ConstructionError::MissingImplementation`] before any entity is
//! handed out.

use log::{debug, info};
use serde_json::{Map, Value};

use crate::config::{CatalogConfig, DeviceSpec, VehicleSpec};
use crate::device::{GamingPhone, Handset, Smartphone};
use crate::error::{ConstructionError, Error, Result};
use crate::registry::Registry;
use crate::vehicle::{Bicycle, Boat, Car, Plane, Rocket, Vehicle};

pub type VehicleBuilder = fn(&VehicleSpec) -> core::result::Result<Vehicle, ConstructionError>;
pub type DeviceBuilder =
    fn(&DeviceSpec, &str) -> core::result::Result<Handset, ConstructionError>;

/// Built entities, in catalog order.
pub struct Fleet {
    pub vehicles: Registry<Vehicle>,
    pub handsets: Registry<Handset>,
}

pub struct Catalog {
    vehicles: Vec<(&'static str, VehicleBuilder)>,
    devices: Vec<(&'static str, DeviceBuilder)>,
}

impl Catalog {
    /// Every kind this crate implements.
    pub fn builtin() -> Self {
        Self {
            vehicles: vec![
                ("car", build_car as VehicleBuilder),
                ("plane", build_plane as VehicleBuilder),
                ("boat", build_boat as VehicleBuilder),
                ("bicycle", build_bicycle as VehicleBuilder),
                ("rocket", build_rocket as VehicleBuilder),
            ],
            devices: vec![
                ("smartphone", build_smartphone as DeviceBuilder),
                ("gaming_phone", build_gaming_phone as DeviceBuilder),
            ],
        }
    }

    /// An empty table; kinds are added with [`register_vehicle`](Self::register_vehicle)
    /// and [`register_device`](Self::register_device).
    pub fn empty() -> Self {
        Self {
            vehicles: Vec::new(),
            devices: Vec::new(),
        }
    }

    pub fn register_vehicle(&mut self, kind: &'static str, build: VehicleBuilder) {
        self.vehicles.retain(|(k, _)| *k != kind);
        self.vehicles.push((kind, build));
    }

    pub fn register_device(&mut self, kind: &'static str, build: DeviceBuilder) {
        self.devices.retain(|(k, _)| *k != kind);
        self.devices.push((kind, build));
    }

    pub fn vehicle_kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.vehicles.iter().map(|(k, _)| *k)
    }

    pub fn build_vehicle(&self, spec: &VehicleSpec) -> core::result::Result<Vehicle, ConstructionError> {
        let build = self
            .vehicles
            .iter()
            .find(|(k, _)| *k == spec.kind)
            .map(|(_, b)| *b)
            .ok_or_else(|| ConstructionError::MissingImplementation {
                kind: spec.kind.clone(),
            })?;
        build(spec)
    }

    pub fn build_device(
        &self,
        spec: &DeviceSpec,
        credential: &str,
    ) -> core::result::Result<Handset, ConstructionError> {
        let build = self
            .devices
            .iter()
            .find(|(k, _)| *k == spec.kind)
            .map(|(_, b)| *b)
            .ok_or_else(|| ConstructionError::MissingImplementation {
                kind: spec.kind.clone(),
            })?;
        build(spec, credential)
    }

    /// Validate the config and build every entity.  Stops at the first error.
    pub fn build(&self, config: &CatalogConfig) -> Result<Fleet> {
        config.validate().map_err(Error::Config)?;

        let mut vehicles: Registry<Vehicle> = Registry::new();
        for spec in &config.vehicles {
            let v = self.build_vehicle(spec)?;
            debug!("catalog: built {} '{}'", v.kind(), spec.name);
            vehicles.push(v);
        }

        let mut handsets: Registry<Handset> = Registry::new();
        for spec in &config.devices {
            let h = self.build_device(spec, &config.default_credential)?;
            debug!("catalog: built {} '{} {}'", h.kind(), spec.brand, spec.model);
            handsets.push(h);
        }

        info!(
            "catalog: {} vehicles, {} devices",
            vehicles.len(),
            handsets.len()
        );
        Ok(Fleet { vehicles, handsets })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Attribute helpers
// ═══════════════════════════════════════════════════════════════════════════

fn attr<'a>(
    attributes: &'a Map<String, Value>,
    kind: &str,
    attribute: &'static str,
) -> core::result::Result<&'a Value, ConstructionError> {
    attributes
        .get(attribute)
        .ok_or_else(|| ConstructionError::MissingAttribute {
            kind: kind.to_string(),
            attribute,
        })
}

fn invalid(kind: &str, attribute: &'static str) -> ConstructionError {
    ConstructionError::InvalidAttribute {
        kind: kind.to_string(),
        attribute,
    }
}

fn text_attr(
    attributes: &Map<String, Value>,
    kind: &str,
    attribute: &'static str,
) -> core::result::Result<String, ConstructionError> {
    attr(attributes, kind, attribute)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(kind, attribute))
}

fn number_attr(
    attributes: &Map<String, Value>,
    kind: &str,
    attribute: &'static str,
) -> core::result::Result<f64, ConstructionError> {
    attr(attributes, kind, attribute)?
        .as_f64()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| invalid(kind, attribute))
}

fn integer_attr<T: TryFrom<u64>>(
    attributes: &Map<String, Value>,
    kind: &str,
    attribute: &'static str,
) -> core::result::Result<T, ConstructionError> {
    attr(attributes, kind, attribute)?
        .as_u64()
        .and_then(|v| T::try_from(v).ok())
        .ok_or_else(|| invalid(kind, attribute))
}

// ═══════════════════════════════════════════════════════════════════════════
//  Vehicle builders
// ═══════════════════════════════════════════════════════════════════════════

fn build_car(spec: &VehicleSpec) -> core::result::Result<Vehicle, ConstructionError> {
    let fuel = text_attr(&spec.attributes, &spec.kind, "fuel_type")?;
    Ok(Car::new(&spec.name, spec.max_speed, fuel)?.into())
}

fn build_plane(spec: &VehicleSpec) -> core::result::Result<Vehicle, ConstructionError> {
    let wingspan = number_attr(&spec.attributes, &spec.kind, "wingspan_m")?;
    Ok(Plane::new(&spec.name, spec.max_speed, wingspan)?.into())
}

fn build_boat(spec: &VehicleSpec) -> core::result::Result<Vehicle, ConstructionError> {
    let hull = text_attr(&spec.attributes, &spec.kind, "hull")?;
    Ok(Boat::new(&spec.name, spec.max_speed, hull)?.into())
}

fn build_bicycle(spec: &VehicleSpec) -> core::result::Result<Vehicle, ConstructionError> {
    let gears: u8 = integer_attr(&spec.attributes, &spec.kind, "gears")?;
    Ok(Bicycle::new(&spec.name, spec.max_speed, gears)?.into())
}

fn build_rocket(spec: &VehicleSpec) -> core::result::Result<Vehicle, ConstructionError> {
    let fuel = text_attr(&spec.attributes, &spec.kind, "fuel_capacity")?;
    Ok(Rocket::new(&spec.name, spec.max_speed, fuel)?.into())
}

// ═══════════════════════════════════════════════════════════════════════════
//  Device builders
// ═══════════════════════════════════════════════════════════════════════════

fn base_phone(
    spec: &DeviceSpec,
    credential: &str,
) -> core::result::Result<Smartphone, ConstructionError> {
    Smartphone::with_credential(
        spec.brand.clone(),
        spec.model.clone(),
        spec.storage_gb,
        spec.battery_mah,
        spec.price,
        credential,
    )
}

fn build_smartphone(
    spec: &DeviceSpec,
    credential: &str,
) -> core::result::Result<Handset, ConstructionError> {
    Ok(base_phone(spec, credential)?.into())
}

fn build_gaming_phone(
    spec: &DeviceSpec,
    credential: &str,
) -> core::result::Result<Handset, ConstructionError> {
    let refresh: u16 = integer_attr(&spec.attributes, &spec.kind, "refresh_rate_hz")?;
    let cooling = text_attr(&spec.attributes, &spec.kind, "cooling")?;
    let base = base_phone(spec, credential)?;
    Ok(GamingPhone::new(base, refresh, cooling).into())
}
