// Copyright 2025 Cowboy AI, LLC.

//! Zoo domain model
//!
//! Value objects, the three aggregates and the boundaries (repositories and
//! the event publisher) the application services depend on.

pub mod animal;
pub mod enclosure;
pub mod feeding_schedule;
pub mod repositories;
pub mod value_objects;

pub use animal::Animal;
pub use enclosure::Enclosure;
pub use feeding_schedule::FeedingSchedule;
pub use repositories::{
    AnimalRepository, EnclosureRepository, EventPublisher, FeedingScheduleRepository,
};
pub use value_objects::{
    AnimalName, BirthDate, Capacity, EnclosureSize, EnclosureType, FeedingTime, FoodType, Gender,
    HealthStatus, Species,
};

#[cfg(test)]
pub(crate) use repositories::{
    MockAnimalRepository, MockEnclosureRepository, MockEventPublisher,
    MockFeedingScheduleRepository,
};
