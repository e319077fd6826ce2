// Copyright 2025 Cowboy AI, LLC.

//! Enclosure CRUD and upkeep

use crate::domain::{
    Animal, AnimalRepository, Capacity, Enclosure, EnclosureRepository, EnclosureSize,
    EnclosureType,
};
use crate::errors::{DomainError, DomainResult, ResultExt};
use std::sync::Arc;
use tracing::info;

/// Manages enclosures
pub struct EnclosureManagementService {
    enclosures: Arc<dyn EnclosureRepository>,
    animals: Arc<dyn AnimalRepository>,
}

impl EnclosureManagementService {
    /// Create the service
    pub fn new(enclosures: Arc<dyn EnclosureRepository>, animals: Arc<dyn AnimalRepository>) -> Self {
        Self {
            enclosures,
            animals,
        }
    }

    /// Build and store a new, empty enclosure
    pub fn create_enclosure(
        &self,
        enclosure_id: &str,
        enclosure_type: EnclosureType,
        size: EnclosureSize,
        max_capacity: Capacity,
    ) -> DomainResult<Enclosure> {
        match self.enclosures.get_by_id(enclosure_id) {
            Ok(_) => {
                return Err(DomainError::invariant(format!(
                    "enclosure {enclosure_id} already exists"
                )))
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e.context("failed to check existing enclosure")),
        }

        let enclosure = Enclosure::new(enclosure_id, enclosure_type, size, max_capacity)?;
        self.enclosures
            .save(&enclosure)
            .context("failed to save enclosure")?;
        info!(enclosure_id, kind = %enclosure_type, capacity = max_capacity.value(), "enclosure created");
        Ok(enclosure)
    }

    /// Load one enclosure
    pub fn get_enclosure_by_id(&self, enclosure_id: &str) -> DomainResult<Enclosure> {
        self.enclosures.get_by_id(enclosure_id)
    }

    /// Every enclosure
    pub fn get_all_enclosures(&self) -> DomainResult<Vec<Enclosure>> {
        self.enclosures.get_all()
    }

    /// Enclosures of one type
    pub fn get_enclosures_by_type(&self, enclosure_type: EnclosureType) -> DomainResult<Vec<Enclosure>> {
        self.enclosures.get_by_type(enclosure_type)
    }

    /// Delete an empty enclosure
    pub fn delete_enclosure(&self, enclosure_id: &str) -> DomainResult<()> {
        let enclosure = self
            .enclosures
            .get_by_id(enclosure_id)
            .context("failed to get enclosure")?;
        if !enclosure.is_empty() {
            return Err(DomainError::invariant(format!(
                "cannot delete enclosure {enclosure_id} while it holds {} animals",
                enclosure.current_animal_count()
            )));
        }

        self.enclosures
            .delete(enclosure_id)
            .context("failed to delete enclosure")?;
        info!(enclosure_id, "enclosure deleted");
        Ok(())
    }

    /// Clean a dirty enclosure
    pub fn clean_enclosure(&self, enclosure_id: &str) -> DomainResult<Enclosure> {
        let mut enclosure = self
            .enclosures
            .get_by_id(enclosure_id)
            .context("failed to get enclosure")?;
        enclosure.clean().context("failed to clean enclosure")?;
        self.enclosures
            .save(&enclosure)
            .context("failed to save enclosure")?;
        Ok(enclosure)
    }

    /// Occupants resolved in arrival order
    pub fn get_animals_in_enclosure(&self, enclosure_id: &str) -> DomainResult<Vec<Animal>> {
        let enclosure = self
            .enclosures
            .get_by_id(enclosure_id)
            .context("failed to get enclosure")?;

        enclosure
            .current_animal_ids()
            .iter()
            .map(|id| {
                self.animals
                    .get_by_id(id)
                    .context("failed to get animal in enclosure")
            })
            .collect()
    }
}
