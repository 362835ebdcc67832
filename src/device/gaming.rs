//! Gaming phone: a [`Smartphone`] plus performance mode.

use log::info;

use super::handset::Smartphone;
use crate::entity::{Entity, Identity};

pub struct GamingPhone {
    base: Smartphone,
    pub(in crate::device) refresh_rate_hz: u16,
    cooling: String,
    performance_mode: bool,
}

impl GamingPhone {
    pub fn new(base: Smartphone, refresh_rate_hz: u16, cooling: impl Into<String>) -> Self {
        Self {
            base,
            refresh_rate_hz,
            cooling: cooling.into(),
            performance_mode: false,
        }
    }

    /// The underlying smartphone, for every inherited operation.
    pub fn base(&self) -> &Smartphone {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut Smartphone {
        &mut self.base
    }

    pub fn refresh_rate_hz(&self) -> u16 {
        self.refresh_rate_hz
    }

    pub fn cooling(&self) -> &str {
        &self.cooling
    }

    /// Base specs followed by refresh rate and cooling.
    pub fn get_specs(&self) -> String {
        format!(
            "{}, {}Hz, {} cooling",
            self.base.get_specs(),
            self.refresh_rate_hz,
            self.cooling
        )
    }

    pub fn enable_performance_mode(&mut self) -> String {
        self.performance_mode = true;
        info!("{}: performance mode on", self.name());
        "Game Mode enabled! Enhanced performance activated!".to_string()
    }

    pub fn disable_performance_mode(&mut self) -> String {
        self.performance_mode = false;
        info!("{}: performance mode off", self.name());
        "Game Mode disabled!".to_string()
    }

    pub fn is_performance_mode(&self) -> bool {
        self.performance_mode
    }

    pub fn play_game(&self, title: &str) -> String {
        if self.performance_mode {
            format!("Playing {title} in ultra-smooth {}Hz!", self.refresh_rate_hz)
        } else {
            format!("Playing {title} - enable Game Mode for better performance!")
        }
    }
}

impl Entity for GamingPhone {
    fn identity(&self) -> &Identity {
        self.base.identity()
    }

    fn capacity_label(&self) -> &'static str {
        self.base.capacity_label()
    }

    fn capacity_unit(&self) -> &'static str {
        self.base.capacity_unit()
    }

    fn primary_action(&self) -> String {
        self.base.primary_action()
    }

    fn describe(&self) -> String {
        self.get_specs()
    }
}
