// Copyright 2025 Cowboy AI, LLC.

//! In-memory infrastructure: the generic store, one repository per
//! aggregate and the event log.

mod event_publisher;
mod in_memory_store;
mod repositories;

pub use event_publisher::InMemoryEventPublisher;
pub use in_memory_store::InMemoryStore;
pub use repositories::{
    InMemoryAnimalRepository, InMemoryEnclosureRepository, InMemoryFeedingScheduleRepository,
};
