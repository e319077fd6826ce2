// Copyright 2025 Cowboy AI, LLC.

//! Animal aggregate

use super::value_objects::{AnimalName, BirthDate, FoodType, Gender, HealthStatus, Species};
use crate::entity::AggregateRoot;
use crate::errors::{DomainError, DomainResult};
use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize};
use tracing::debug;

/// An animal living in the zoo
///
/// `enclosure_id` is a weak reference to an [`Enclosure`](super::Enclosure);
/// the enclosure's animal list is its inverse index and the two are kept in
/// step by the application services, not by the entities themselves.
///
/// Deserialization goes through [`Animal::new`]; an empty `enclosure_id`
/// loads as unassigned.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Animal {
    id: String,
    species: Species,
    name: AnimalName,
    birth_date: BirthDate,
    gender: Gender,
    favorite_food: FoodType,
    health_status: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    enclosure_id: Option<String>,
}

impl Animal {
    /// Create an unassigned animal; the id must not be empty
    pub fn new(
        id: impl Into<String>,
        species: Species,
        name: AnimalName,
        birth_date: BirthDate,
        gender: Gender,
        favorite_food: FoodType,
        health_status: HealthStatus,
    ) -> DomainResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::validation("animal ID cannot be empty"));
        }

        Ok(Self {
            id,
            species,
            name,
            birth_date,
            gender,
            favorite_food,
            health_status,
            enclosure_id: None,
        })
    }

    /// Species
    pub fn species(&self) -> &Species {
        &self.species
    }

    /// Name
    pub fn name(&self) -> &AnimalName {
        &self.name
    }

    /// Birth date
    pub fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    /// Gender
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Favorite food
    pub fn favorite_food(&self) -> FoodType {
        self.favorite_food
    }

    /// Current health status
    pub fn health_status(&self) -> HealthStatus {
        self.health_status
    }

    /// Enclosure the animal lives in, if any
    pub fn enclosure_id(&self) -> Option<&str> {
        self.enclosure_id.as_deref()
    }

    /// Whether the animal is assigned to an enclosure
    pub fn is_in_enclosure(&self) -> bool {
        self.enclosure_id.is_some()
    }

    /// Feed the animal; sick animals must be treated first
    pub fn feed(&self, food_type: FoodType) -> DomainResult<()> {
        if self.health_status == HealthStatus::Sick {
            return Err(DomainError::invariant(
                "cannot feed a sick animal, treat it first",
            ));
        }

        debug!(animal_id = %self.id, name = %self.name, food = %food_type, "animal fed");
        Ok(())
    }

    /// Treat a sick animal, making it healthy
    pub fn treat(&mut self) -> DomainResult<()> {
        if self.health_status == HealthStatus::Healthy {
            return Err(DomainError::invariant("animal is already healthy"));
        }

        self.health_status = HealthStatus::Healthy;
        debug!(animal_id = %self.id, "animal treated");
        Ok(())
    }

    /// Point the animal at a new enclosure
    ///
    /// Only this side of the relationship changes; the caller must update
    /// both enclosures' animal lists.
    pub fn move_to_enclosure(&mut self, enclosure_id: &str) -> DomainResult<()> {
        if enclosure_id.is_empty() {
            return Err(DomainError::validation("enclosure ID cannot be empty"));
        }
        if self.enclosure_id.as_deref() == Some(enclosure_id) {
            return Err(DomainError::invariant("animal is already in this enclosure"));
        }

        let previous = self.enclosure_id.replace(enclosure_id.to_string());
        debug!(
            animal_id = %self.id,
            from = previous.as_deref().unwrap_or("-"),
            to = enclosure_id,
            "animal moved"
        );
        Ok(())
    }

    /// Overwrite the health status
    pub fn set_health_status(&mut self, status: HealthStatus) {
        self.health_status = status;
    }
}

#[derive(Deserialize)]
struct AnimalRecord {
    id: String,
    species: Species,
    name: AnimalName,
    birth_date: BirthDate,
    gender: Gender,
    favorite_food: FoodType,
    health_status: HealthStatus,
    #[serde(default)]
    enclosure_id: Option<String>,
}

impl<'de> Deserialize<'de> for Animal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = AnimalRecord::deserialize(deserializer)?;
        let mut animal = Animal::new(
            record.id,
            record.species,
            record.name,
            record.birth_date,
            record.gender,
            record.favorite_food,
            record.health_status,
        )
        .map_err(de::Error::custom)?;
        animal.enclosure_id = record.enclosure_id.filter(|id| !id.is_empty());
        Ok(animal)
    }
}

impl AggregateRoot for Animal {
    const ENTITY_TYPE: &'static str = "Animal";

    fn id(&self) -> &str {
        &self.id
    }
}
