// Copyright 2025 Cowboy AI, LLC.

//! Enclosure aggregate

use super::value_objects::{Capacity, EnclosureSize, EnclosureType};
use crate::entity::AggregateRoot;
use crate::errors::{DomainError, DomainResult};
use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize};
use tracing::debug;

/// A capacity-bounded container of animal ids
///
/// Invariants:
/// - `size >= max_capacity` (checked on construction)
/// - `current_animal_ids.len() <= max_capacity` at all times
/// - no id appears twice in `current_animal_ids`
///
/// Deserialization re-checks all three by replaying [`Enclosure::new`] and
/// [`Enclosure::add_animal`].
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Enclosure {
    id: String,
    enclosure_type: EnclosureType,
    size: EnclosureSize,
    max_capacity: Capacity,
    current_animal_ids: Vec<String>,
    /// true when clean
    cleaning_status: bool,
}

impl Enclosure {
    /// Create an empty, clean enclosure
    pub fn new(
        id: impl Into<String>,
        enclosure_type: EnclosureType,
        size: EnclosureSize,
        max_capacity: Capacity,
    ) -> DomainResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::validation("enclosure ID cannot be empty"));
        }
        if size.value() < max_capacity.value() {
            return Err(DomainError::validation(
                "enclosure size must be greater than or equal to max capacity",
            ));
        }

        Ok(Self {
            id,
            enclosure_type,
            size,
            max_capacity,
            current_animal_ids: Vec::new(),
            cleaning_status: true,
        })
    }

    /// Enclosure type
    pub fn enclosure_type(&self) -> EnclosureType {
        self.enclosure_type
    }

    /// Size
    pub fn size(&self) -> EnclosureSize {
        self.size
    }

    /// Maximum number of occupants
    pub fn max_capacity(&self) -> Capacity {
        self.max_capacity
    }

    /// Occupant ids in arrival order
    pub fn current_animal_ids(&self) -> &[String] {
        &self.current_animal_ids
    }

    /// Add an animal; makes the enclosure dirty
    pub fn add_animal(&mut self, animal_id: &str) -> DomainResult<()> {
        if animal_id.is_empty() {
            return Err(DomainError::validation("animal ID cannot be empty"));
        }
        if self.contains(animal_id) {
            return Err(DomainError::invariant("animal is already in this enclosure"));
        }
        if !self.has_space() {
            return Err(DomainError::CapacityExceeded {
                enclosure_id: self.id.clone(),
                capacity: self.max_capacity.value(),
            });
        }

        self.current_animal_ids.push(animal_id.to_string());
        self.cleaning_status = false;
        debug!(enclosure_id = %self.id, animal_id, "animal added to enclosure");
        Ok(())
    }

    /// Remove an animal, preserving the order of the others
    pub fn remove_animal(&mut self, animal_id: &str) -> DomainResult<()> {
        if animal_id.is_empty() {
            return Err(DomainError::validation("animal ID cannot be empty"));
        }

        let index = self
            .current_animal_ids
            .iter()
            .position(|id| id == animal_id)
            .ok_or_else(|| DomainError::invariant("animal is not in this enclosure"))?;

        self.current_animal_ids.remove(index);
        debug!(enclosure_id = %self.id, animal_id, "animal removed from enclosure");
        Ok(())
    }

    /// Clean a dirty enclosure
    pub fn clean(&mut self) -> DomainResult<()> {
        if self.cleaning_status {
            return Err(DomainError::invariant("enclosure is already clean"));
        }

        self.cleaning_status = true;
        debug!(enclosure_id = %self.id, "enclosure cleaned");
        Ok(())
    }

    /// Whether the enclosure is clean
    pub fn is_clean(&self) -> bool {
        self.cleaning_status
    }

    /// Whether the animal is currently inside
    pub fn contains(&self, animal_id: &str) -> bool {
        self.current_animal_ids.iter().any(|id| id == animal_id)
    }

    /// Number of occupants
    pub fn current_animal_count(&self) -> usize {
        self.current_animal_ids.len()
    }

    /// Whether another animal fits
    pub fn has_space(&self) -> bool {
        self.current_animal_ids.len() < self.max_capacity.value()
    }

    /// Whether nobody lives here
    pub fn is_empty(&self) -> bool {
        self.current_animal_ids.is_empty()
    }
}

#[derive(Deserialize)]
struct EnclosureRecord {
    id: String,
    enclosure_type: EnclosureType,
    size: EnclosureSize,
    max_capacity: Capacity,
    #[serde(default)]
    current_animal_ids: Vec<String>,
    cleaning_status: bool,
}

impl<'de> Deserialize<'de> for Enclosure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = EnclosureRecord::deserialize(deserializer)?;
        let mut enclosure = Enclosure::new(
            record.id,
            record.enclosure_type,
            record.size,
            record.max_capacity,
        )
        .map_err(de::Error::custom)?;
        for animal_id in &record.current_animal_ids {
            enclosure.add_animal(animal_id).map_err(de::Error::custom)?;
        }
        enclosure.cleaning_status = record.cleaning_status;
        Ok(enclosure)
    }
}

impl AggregateRoot for Enclosure {
    const ENTITY_TYPE: &'static str = "Enclosure";

    fn id(&self) -> &str {
        &self.id
    }
}
