// Copyright 2025 Cowboy AI, LLC.

//! In-memory repositories for the zoo aggregates

use super::in_memory_store::InMemoryStore;
use crate::domain::{
    Animal, AnimalRepository, Enclosure, EnclosureRepository, EnclosureType, FeedingSchedule,
    FeedingScheduleRepository,
};
use crate::entity::AggregateRoot;
use crate::errors::DomainResult;
use chrono::Utc;
use tracing::debug;

/// In-memory animal repository
#[derive(Debug, Default)]
pub struct InMemoryAnimalRepository {
    store: InMemoryStore<Animal>,
}

impl InMemoryAnimalRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnimalRepository for InMemoryAnimalRepository {
    fn get_by_id(&self, id: &str) -> DomainResult<Animal> {
        self.store.get(id)
    }

    fn get_all(&self) -> DomainResult<Vec<Animal>> {
        self.store.all()
    }

    fn save(&self, animal: &Animal) -> DomainResult<()> {
        self.store.upsert(animal)?;
        debug!(animal_id = animal.id(), "animal saved");
        Ok(())
    }

    fn delete(&self, id: &str) -> DomainResult<()> {
        self.store.remove(id)?;
        debug!(animal_id = id, "animal deleted");
        Ok(())
    }

    fn get_by_enclosure_id(&self, enclosure_id: &str) -> DomainResult<Vec<Animal>> {
        self.store
            .filter(|a| a.enclosure_id() == Some(enclosure_id))
    }
}

/// In-memory enclosure repository
#[derive(Debug, Default)]
pub struct InMemoryEnclosureRepository {
    store: InMemoryStore<Enclosure>,
}

impl InMemoryEnclosureRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

impl EnclosureRepository for InMemoryEnclosureRepository {
    fn get_by_id(&self, id: &str) -> DomainResult<Enclosure> {
        self.store.get(id)
    }

    fn get_all(&self) -> DomainResult<Vec<Enclosure>> {
        self.store.all()
    }

    fn save(&self, enclosure: &Enclosure) -> DomainResult<()> {
        self.store.upsert(enclosure)?;
        debug!(enclosure_id = enclosure.id(), "enclosure saved");
        Ok(())
    }

    fn delete(&self, id: &str) -> DomainResult<()> {
        self.store.remove(id)?;
        debug!(enclosure_id = id, "enclosure deleted");
        Ok(())
    }

    fn get_by_type(&self, enclosure_type: EnclosureType) -> DomainResult<Vec<Enclosure>> {
        self.store.filter(|e| e.enclosure_type() == enclosure_type)
    }

    fn get_available(&self) -> DomainResult<Vec<Enclosure>> {
        self.store.filter(Enclosure::has_space)
    }
}

/// In-memory feeding schedule repository
#[derive(Debug, Default)]
pub struct InMemoryFeedingScheduleRepository {
    store: InMemoryStore<FeedingSchedule>,
}

impl InMemoryFeedingScheduleRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedingScheduleRepository for InMemoryFeedingScheduleRepository {
    fn get_by_id(&self, id: &str) -> DomainResult<FeedingSchedule> {
        self.store.get(id)
    }

    fn get_all(&self) -> DomainResult<Vec<FeedingSchedule>> {
        self.store.all()
    }

    fn save(&self, schedule: &FeedingSchedule) -> DomainResult<()> {
        self.store.upsert(schedule)?;
        debug!(schedule_id = schedule.id(), "feeding schedule saved");
        Ok(())
    }

    fn delete(&self, id: &str) -> DomainResult<()> {
        self.store.remove(id)?;
        debug!(schedule_id = id, "feeding schedule deleted");
        Ok(())
    }

    fn get_by_animal_id(&self, animal_id: &str) -> DomainResult<Vec<FeedingSchedule>> {
        self.store.filter(|s| s.animal_id() == animal_id)
    }

    fn get_due_schedules(&self) -> DomainResult<Vec<FeedingSchedule>> {
        let now = Utc::now();
        self.store
            .filter(|s| !s.is_completed() && s.feeding_time().value() < now)
    }
}
