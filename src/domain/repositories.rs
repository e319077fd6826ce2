// Copyright 2025 Cowboy AI, LLC.

//! Storage and publishing boundaries of the zoo domain
//!
//! Repositories hand out owned snapshots: mutating a loaded entity has no
//! effect until it is passed back to `save`.

use super::{Animal, Enclosure, EnclosureType, FeedingSchedule};
use crate::errors::DomainResult;
use crate::events::ZooEvent;

/// Repository for animals
#[cfg_attr(test, mockall::automock)]
pub trait AnimalRepository: Send + Sync {
    /// Load an animal; `EntityNotFound` when absent
    fn get_by_id(&self, id: &str) -> DomainResult<Animal>;

    /// Snapshot of every animal
    fn get_all(&self) -> DomainResult<Vec<Animal>>;

    /// Insert or replace by id
    fn save(&self, animal: &Animal) -> DomainResult<()>;

    /// Remove an animal; `EntityNotFound` when absent
    fn delete(&self, id: &str) -> DomainResult<()>;

    /// Animals whose enclosure reference equals `enclosure_id`
    fn get_by_enclosure_id(&self, enclosure_id: &str) -> DomainResult<Vec<Animal>>;
}

/// Repository for enclosures
#[cfg_attr(test, mockall::automock)]
pub trait EnclosureRepository: Send + Sync {
    /// Load an enclosure; `EntityNotFound` when absent
    fn get_by_id(&self, id: &str) -> DomainResult<Enclosure>;

    /// Snapshot of every enclosure
    fn get_all(&self) -> DomainResult<Vec<Enclosure>>;

    /// Insert or replace by id
    fn save(&self, enclosure: &Enclosure) -> DomainResult<()>;

    /// Remove an enclosure; `EntityNotFound` when absent
    fn delete(&self, id: &str) -> DomainResult<()>;

    /// Enclosures of one type
    fn get_by_type(&self, enclosure_type: EnclosureType) -> DomainResult<Vec<Enclosure>>;

    /// Enclosures with room for another animal
    fn get_available(&self) -> DomainResult<Vec<Enclosure>>;
}

/// Repository for feeding schedules
#[cfg_attr(test, mockall::automock)]
pub trait FeedingScheduleRepository: Send + Sync {
    /// Load a schedule; `EntityNotFound` when absent
    fn get_by_id(&self, id: &str) -> DomainResult<FeedingSchedule>;

    /// Snapshot of every schedule
    fn get_all(&self) -> DomainResult<Vec<FeedingSchedule>>;

    /// Insert or replace by id
    fn save(&self, schedule: &FeedingSchedule) -> DomainResult<()>;

    /// Remove a schedule; `EntityNotFound` when absent
    fn delete(&self, id: &str) -> DomainResult<()>;

    /// Schedules for one animal
    fn get_by_animal_id(&self, animal_id: &str) -> DomainResult<Vec<FeedingSchedule>>;

    /// Incomplete schedules whose feeding time is in the past
    fn get_due_schedules(&self) -> DomainResult<Vec<FeedingSchedule>>;
}

/// Event publisher trait for services to emit events
#[cfg_attr(test, mockall::automock)]
pub trait EventPublisher: Send + Sync {
    /// Publish one domain event
    fn publish(&self, event: ZooEvent) -> DomainResult<()>;
}
