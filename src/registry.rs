//! Ordered, owning entity collection with 1-based menu selection.

use crate::entity::Entity;
use crate::error::{InputError, parse_choice};

/// Insertion-ordered sequence of entities.
///
/// Positions shown to users are 1-based; [`Registry::select`] validates a
/// raw input line against the current length before any element is
/// touched.
pub struct Registry<T> {
    entries: Vec<T>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entity and return its 1-based position.
    pub fn push(&mut self, entity: impl Into<T>) -> usize {
        self.entries.push(entity.into());
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Zero-based access.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index)
    }

    /// Parse a 1-based menu line into a zero-based index.
    pub fn select(&self, raw: &str) -> Result<usize, InputError> {
        parse_choice(raw, self.entries.len())
    }
}

impl<T: Entity> Registry<T> {
    /// Numbered listing, one line per entity.
    pub fn listing(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{}. {}", i + 1, e.describe()))
            .collect()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Registry<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Registry<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::{Boat, Car, Vehicle};

    fn registry() -> Registry<Vehicle> {
        let mut r: Registry<Vehicle> = Registry::new();
        r.push(Car::new("Tesla Model S", 250.0, "Electric").unwrap());
        r.push(Boat::new("Speedboat 5000", 80.0, "Speedboat").unwrap());
        r
    }

    #[test]
    fn push_returns_one_based_position() {
        let mut r: Registry<Vehicle> = Registry::new();
        assert_eq!(r.push(Car::new("a", 1.0, "x").unwrap()), 1);
        assert_eq!(r.push(Car::new("b", 1.0, "x").unwrap()), 2);
    }

    #[test]
    fn select_validates_against_length() {
        let r = registry();
        assert_eq!(r.select("2"), Ok(1));
        assert_eq!(
            r.select("3"),
            Err(InputError::OutOfRange { value: 3, max: 2 })
        );
        assert!(matches!(r.select("boat"), Err(InputError::NotANumber(_))));
    }

    #[test]
    fn empty_registry_rejects_everything() {
        let r: Registry<Vehicle> = Registry::new();
        assert!(r.select("1").is_err());
        assert!(r.listing().is_empty());
    }

    #[test]
    fn listing_is_numbered_in_order() {
        assert_eq!(
            registry().listing(),
            vec![
                "1. Tesla Model S (Max speed: 250 km/h)".to_string(),
                "2. Speedboat 5000 (Max speed: 80 km/h)".to_string(),
            ]
        );
    }
}
