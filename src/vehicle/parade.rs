//! Broadcast operations over an ordered vehicle sequence.

use log::debug;

use super::Vehicle;
use crate::entity::Entity;

/// Everything one vehicle produced during a parade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParadeStep {
    /// 1-based position in the sequence.
    pub position: usize,
    pub description: String,
    pub travel: String,
    pub alert: String,
    /// Present only for kinds with a maneuver; never more than one.
    pub maneuver: Option<String>,
}

impl ParadeStep {
    /// Printable lines in call order.
    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![
            self.description.clone(),
            self.travel.clone(),
            self.alert.clone(),
        ];
        if let Some(m) = &self.maneuver {
            out.push(m.clone());
        }
        out
    }
}

/// Visit every vehicle in order: describe, travel, alert, then the
/// kind's maneuver if it has one.
pub fn parade<'a>(vehicles: impl IntoIterator<Item = &'a Vehicle>) -> Vec<ParadeStep> {
    vehicles
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            debug!("parade: #{} {} ({})", i + 1, v.name(), v.kind());
            ParadeStep {
                position: i + 1,
                description: v.describe(),
                travel: v.primary_action(),
                alert: v.secondary_action(),
                maneuver: v.maneuver().map(|m| m.perform()),
            }
        })
        .collect()
}

/// Every vehicle travels once, in order, followed by a closing line.
pub fn race<'a>(vehicles: impl IntoIterator<Item = &'a Vehicle>) -> Vec<String> {
    let mut lines: Vec<String> = vehicles.into_iter().map(Entity::primary_action).collect();
    lines.push("All vehicles completed the race in their own unique ways!".to_string());
    lines
}
