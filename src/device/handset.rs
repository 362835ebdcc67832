//! Base device: a smartphone with open, guarded and sealed attributes.

use log::info;

use super::vault::Vault;
use crate::entity::{Entity, Identity};
use crate::error::{AccessError, ConstructionError};

/// Credential every device ships with unless the catalog says otherwise.
pub const DEFAULT_CREDENTIAL: &str = "1234";

pub struct Smartphone {
    // -- Open --
    pub brand: String,
    pub model: String,

    // -- Guarded: readable everywhere, written only inside `crate::device` --
    pub(in crate::device) storage_gb: u32,
    pub(in crate::device) battery_mah: u32,

    // -- Sealed --
    identity: Identity,
    vault: Vault,
}

impl Smartphone {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        storage_gb: u32,
        battery_mah: u32,
        price: f64,
    ) -> Result<Self, ConstructionError> {
        Self::with_credential(brand, model, storage_gb, battery_mah, price, DEFAULT_CREDENTIAL)
    }

    pub fn with_credential(
        brand: impl Into<String>,
        model: impl Into<String>,
        storage_gb: u32,
        battery_mah: u32,
        price: f64,
        credential: &str,
    ) -> Result<Self, ConstructionError> {
        let brand = brand.into();
        let model = model.into();
        let identity = Identity::new(format!("{brand} {model}"), f64::from(battery_mah))?;
        let vault = Vault::new(identity.name(), price, credential)?;
        Ok(Self {
            brand,
            model,
            storage_gb,
            battery_mah,
            identity,
            vault,
        })
    }

    // ── Guarded attributes ────────────────────────────────────

    pub fn storage_gb(&self) -> u32 {
        self.storage_gb
    }

    pub fn battery_mah(&self) -> u32 {
        self.battery_mah
    }

    /// Grow storage.  Shrinking is rejected.
    pub fn upgrade_storage(&mut self, new_gb: u32) -> Result<(), AccessError> {
        if new_gb < self.storage_gb {
            return Err(AccessError::StorageDowngrade {
                current_gb: self.storage_gb,
                requested_gb: new_gb,
            });
        }
        self.storage_gb = new_gb;
        Ok(())
    }

    pub fn get_specs(&self) -> String {
        format!(
            "{} {} - {}GB, {}mAh",
            self.brand, self.model, self.storage_gb, self.battery_mah
        )
    }

    // ── Sealed attributes ─────────────────────────────────────

    pub fn unlock(&mut self, credential: &str) -> Result<(), AccessError> {
        self.vault.unlock(credential)?;
        info!("{}: unlocked", self.identity.name());
        Ok(())
    }

    pub fn lock(&mut self) {
        self.vault.lock();
        info!("{}: locked", self.identity.name());
    }

    pub fn is_locked(&self) -> bool {
        self.vault.is_locked()
    }

    pub fn change_credential(&mut self, old: &str, new: &str) -> Result<(), AccessError> {
        self.vault.change_credential(old, new)
    }

    /// Apply a discount in percent (`0..=50`).  Returns the new display price.
    pub fn apply_discount(&mut self, percent: f64) -> Result<String, AccessError> {
        self.vault.apply_discount(percent)?;
        Ok(self.vault.price_label())
    }

    pub fn get_price(&self) -> String {
        self.vault.price_label()
    }

    // ── Everyday operations ───────────────────────────────────

    pub fn make_call(&self, number: &str) -> String {
        format!("Calling {number} from {} {}", self.brand, self.model)
    }

    pub fn send_message(&self, number: &str, message: &str) -> String {
        format!("Sending message to {number}: {message}")
    }

    pub fn take_photo(&self) -> String {
        format!("Photo taken with {} {}'s camera!", self.brand, self.model)
    }
}

impl Entity for Smartphone {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn capacity_label(&self) -> &'static str {
        "Battery"
    }

    fn capacity_unit(&self) -> &'static str {
        "mAh"
    }

    fn primary_action(&self) -> String {
        self.take_photo()
    }

    fn describe(&self) -> String {
        self.get_specs()
    }
}
