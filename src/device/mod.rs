//! Device hierarchy with three attribute visibility tiers.
//!
//! | Tier    | Examples                    | Read            | Write                         |
//! |---------|-----------------------------|-----------------|-------------------------------|
//! | open    | `brand`, `model`            | anyone          | anyone                        |
//! | guarded | storage, battery, refresh   | getters         | `crate::device` only          |
//! | sealed  | price, lock state, PIN      | validated calls | `vault` methods only          |
//!
//! [`Handset`] is the tagged union stored in registries.  Kind-specific
//! operations are reached through [`Handset::as_gaming`], never by
//! guessing the variant.

pub mod gaming;
pub mod handset;
mod vault;

pub use gaming::GamingPhone;
pub use handset::{DEFAULT_CREDENTIAL, Smartphone};
pub use vault::{DISCOUNT_RANGE, MAX_CREDENTIAL_LEN};

use crate::entity::{Entity, Identity};

/// Any device kind.
pub enum Handset {
    Standard(Smartphone),
    Gaming(GamingPhone),
}

impl Handset {
    /// Short kind tag used in logs and listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Standard(_) => "smartphone",
            Self::Gaming(_) => "gaming_phone",
        }
    }

    /// The base smartphone shared by every kind.
    pub fn phone(&self) -> &Smartphone {
        match self {
            Self::Standard(p) => p,
            Self::Gaming(g) => g.base(),
        }
    }

    pub fn phone_mut(&mut self) -> &mut Smartphone {
        match self {
            Self::Standard(p) => p,
            Self::Gaming(g) => g.base_mut(),
        }
    }

    /// Specs as the concrete kind renders them.
    pub fn get_specs(&self) -> String {
        match self {
            Self::Standard(p) => p.get_specs(),
            Self::Gaming(g) => g.get_specs(),
        }
    }

    pub fn as_gaming(&self) -> Option<&GamingPhone> {
        match self {
            Self::Gaming(g) => Some(g),
            Self::Standard(_) => None,
        }
    }

    pub fn as_gaming_mut(&mut self) -> Option<&mut GamingPhone> {
        match self {
            Self::Gaming(g) => Some(g),
            Self::Standard(_) => None,
        }
    }
}

impl Entity for Handset {
    fn identity(&self) -> &Identity {
        self.phone().identity()
    }

    fn capacity_label(&self) -> &'static str {
        self.phone().capacity_label()
    }

    fn capacity_unit(&self) -> &'static str {
        self.phone().capacity_unit()
    }

    fn primary_action(&self) -> String {
        match self {
            Self::Standard(p) => p.primary_action(),
            Self::Gaming(g) => g.primary_action(),
        }
    }

    fn secondary_action(&self) -> String {
        match self {
            Self::Standard(p) => p.secondary_action(),
            Self::Gaming(g) => g.secondary_action(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Standard(p) => p.describe(),
            Self::Gaming(g) => g.describe(),
        }
    }
}

impl From<Smartphone> for Handset {
    fn from(p: Smartphone) -> Self {
        Self::Standard(p)
    }
}

impl From<GamingPhone> for Handset {
    fn from(g: GamingPhone) -> Self {
        Self::Gaming(g)
    }
}
