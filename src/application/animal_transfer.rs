// Copyright 2025 Cowboy AI, LLC.

//! Animal lifecycle and transfers between enclosures

use crate::domain::{Animal, AnimalRepository, Enclosure, EnclosureRepository, EventPublisher, HealthStatus};
use crate::entity::AggregateRoot;
use crate::errors::{DomainError, DomainResult, ResultExt};
use crate::events::AnimalMoved;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

/// Keeps `Animal::enclosure_id` and `Enclosure::current_animal_ids` in step
///
/// A transfer touches two repositories without a shared transaction. Steps
/// run in a fixed order and stop at the first failure; nothing already
/// persisted is rolled back. The source enclosure is saved before the target
/// side is touched, so a failure there leaves the animal where it was.
///
/// With serialized transfers enabled (the default) `transfer_animal` and
/// `delete_animal` hold one mutex for their whole duration, so two callers
/// sharing this service cannot both claim the last free place.
pub struct AnimalTransferService {
    animals: Arc<dyn AnimalRepository>,
    enclosures: Arc<dyn EnclosureRepository>,
    publisher: Arc<dyn EventPublisher>,
    transfer_lock: Option<Mutex<()>>,
}

impl AnimalTransferService {
    /// Create a service with serialized transfers
    pub fn new(
        animals: Arc<dyn AnimalRepository>,
        enclosures: Arc<dyn EnclosureRepository>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            animals,
            enclosures,
            publisher,
            transfer_lock: Some(Mutex::new(())),
        }
    }

    /// Enable or disable the operation-level transfer lock
    pub fn with_serialized_transfers(mut self, enabled: bool) -> Self {
        self.transfer_lock = enabled.then(|| Mutex::new(()));
        self
    }

    fn lock_transfers(&self) -> DomainResult<Option<MutexGuard<'_, ()>>> {
        self.transfer_lock
            .as_ref()
            .map(|lock| {
                lock.lock()
                    .map_err(|_| DomainError::InternalError("transfer lock poisoned".to_string()))
            })
            .transpose()
    }

    /// Move an animal into `target_enclosure_id`, leaving its current enclosure
    ///
    /// Moving an animal into the enclosure it already lives in fails with
    /// [`DomainError::InvariantViolation`]. That check runs before the
    /// capacity check, so a full current enclosure still reports the
    /// invariant rather than [`DomainError::CapacityExceeded`].
    pub fn transfer_animal(&self, animal_id: &str, target_enclosure_id: &str) -> DomainResult<()> {
        let _guard = self.lock_transfers()?;

        let mut animal = self
            .animals
            .get_by_id(animal_id)
            .context("failed to get animal")?;
        let mut target = self
            .enclosures
            .get_by_id(target_enclosure_id)
            .context("failed to get target enclosure")?;

        if animal.enclosure_id() == Some(target_enclosure_id) {
            return Err(DomainError::invariant(format!(
                "animal {animal_id} is already in enclosure {target_enclosure_id}"
            )));
        }
        if !target.has_space() {
            return Err(DomainError::CapacityExceeded {
                enclosure_id: target_enclosure_id.to_string(),
                capacity: target.max_capacity().value(),
            });
        }

        let from_enclosure_id = animal.enclosure_id().map(str::to_string);
        if let Some(source_id) = &from_enclosure_id {
            let mut source = self
                .enclosures
                .get_by_id(source_id)
                .context("failed to get current enclosure")?;
            source
                .remove_animal(animal_id)
                .context("failed to remove animal from current enclosure")?;
            self.enclosures
                .save(&source)
                .context("failed to save current enclosure")?;
        }

        target
            .add_animal(animal_id)
            .context("failed to add animal to target enclosure")?;
        animal
            .move_to_enclosure(target_enclosure_id)
            .context("failed to update animal's enclosure")?;

        self.animals.save(&animal).context("failed to save animal")?;
        self.enclosures
            .save(&target)
            .context("failed to save target enclosure")?;

        self.publisher
            .publish(AnimalMoved::new(animal_id, from_enclosure_id.clone(), target_enclosure_id).into())
            .context("failed to publish AnimalMoved event")?;

        info!(
            animal_id,
            from = from_enclosure_id.as_deref().unwrap_or("-"),
            to = target_enclosure_id,
            "animal transferred"
        );
        Ok(())
    }

    /// Register a new, unassigned animal
    pub fn create_animal(&self, animal: Animal) -> DomainResult<Animal> {
        if animal.is_in_enclosure() {
            return Err(DomainError::validation(
                "a new animal cannot start in an enclosure, transfer it instead",
            ));
        }
        match self.animals.get_by_id(animal.id()) {
            Ok(_) => {
                return Err(DomainError::invariant(format!(
                    "animal {} already exists",
                    animal.id()
                )))
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e.context("failed to check existing animal")),
        }

        self.animals.save(&animal).context("failed to save animal")?;
        info!(animal_id = animal.id(), species = %animal.species(), "animal created");
        Ok(animal)
    }

    /// Delete an animal, first detaching it from its enclosure
    pub fn delete_animal(&self, animal_id: &str) -> DomainResult<()> {
        let _guard = self.lock_transfers()?;

        let animal = self
            .animals
            .get_by_id(animal_id)
            .context("failed to get animal")?;

        if let Some(enclosure_id) = animal.enclosure_id() {
            let mut enclosure = self
                .enclosures
                .get_by_id(enclosure_id)
                .context("failed to get animal's enclosure")?;
            enclosure
                .remove_animal(animal_id)
                .context("failed to remove animal from enclosure")?;
            self.enclosures
                .save(&enclosure)
                .context("failed to save enclosure")?;
        }

        self.animals
            .delete(animal_id)
            .context("failed to delete animal")?;
        info!(animal_id, "animal deleted");
        Ok(())
    }

    /// Treat a sick animal
    pub fn treat_animal(&self, animal_id: &str) -> DomainResult<Animal> {
        let mut animal = self
            .animals
            .get_by_id(animal_id)
            .context("failed to get animal")?;
        animal.treat().context("failed to treat animal")?;
        self.animals.save(&animal).context("failed to save animal")?;
        Ok(animal)
    }

    /// Overwrite an animal's health status
    pub fn set_health_status(&self, animal_id: &str, status: HealthStatus) -> DomainResult<Animal> {
        let mut animal = self
            .animals
            .get_by_id(animal_id)
            .context("failed to get animal")?;
        animal.set_health_status(status);
        self.animals.save(&animal).context("failed to save animal")?;
        Ok(animal)
    }

    /// Load one animal
    pub fn get_animal_by_id(&self, animal_id: &str) -> DomainResult<Animal> {
        self.animals.get_by_id(animal_id)
    }

    /// Every animal
    pub fn get_all_animals(&self) -> DomainResult<Vec<Animal>> {
        self.animals.get_all()
    }

    /// Enclosures with room for another animal
    pub fn get_available_enclosures(&self) -> DomainResult<Vec<Enclosure>> {
        self.enclosures.get_available()
    }

    /// Animals whose enclosure reference is `enclosure_id`
    pub fn get_animals_by_enclosure(&self, enclosure_id: &str) -> DomainResult<Vec<Animal>> {
        self.animals.get_by_enclosure_id(enclosure_id)
    }
}
