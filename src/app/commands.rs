//! Menu commands the selector understands.
//!
//! Both menus are fixed, numbered lists.  Parsing goes through
//! [`parse_choice`] so a bad line is reported the same way everywhere.

use core::fmt;

use crate::error::{InputError, parse_choice};

/// Top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Parade,
    SelectVehicle,
    Race,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 4] = [Self::Parade, Self::SelectVehicle, Self::Race, Self::Exit];

    pub fn label(self) -> &'static str {
        match self {
            Self::Parade => "See all vehicles move",
            Self::SelectVehicle => "Select a specific vehicle",
            Self::Race => "Race simulation",
            Self::Exit => "Exit",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, InputError> {
        parse_choice(raw, Self::ALL.len()).map(|i| Self::ALL[i])
    }
}

/// Actions offered once a vehicle is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleAction {
    Travel,
    Signal,
    Maneuver,
    Highlight,
}

impl VehicleAction {
    pub const ALL: [Self; 4] = [Self::Travel, Self::Signal, Self::Maneuver, Self::Highlight];

    pub fn label(self) -> &'static str {
        match self {
            Self::Travel => "Move",
            Self::Signal => "Sound alert",
            Self::Maneuver => "Special maneuver",
            Self::Highlight => "Highlight",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, InputError> {
        parse_choice(raw, Self::ALL.len()).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for VehicleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `"1. label"` lines for a menu.
pub fn numbered<T: Copy>(items: &[T], label: fn(T) -> &'static str) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, label(*item)))
        .collect()
}
