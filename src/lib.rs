//! # Zoo Domain
//!
//! Domain-Driven Design building blocks for running a small zoo.
//!
//! This crate provides:
//! - **Value Objects**: validated species, names, dates, sizes and capacities
//! - **Aggregates**: `Animal`, `Enclosure` and `FeedingSchedule`
//! - **Repositories**: storage traits plus thread-safe in-memory implementations
//! - **Domain Events**: `AnimalMoved` and `FeedingTime`, recorded by an event publisher
//! - **Application Services**: transfers, feeding, enclosure upkeep and statistics
//! - **Analysis**: text statistics and exact-match plagiarism checks for submitted files
//!
//! ## Design Principles
//!
//! 1. **Validation at the edge**: invalid values cannot be constructed or deserialized
//! 2. **Owned snapshots**: repositories return clones; changes persist only through `save`
//! 3. **Services own cross-aggregate rules**: an animal's enclosure reference and the
//!    enclosure's animal list are only changed together by `AnimalTransferService`
//!
//! ```rust
//! use std::sync::Arc;
//! use zoo_domain::application::{AnimalTransferService, EnclosureManagementService};
//! use zoo_domain::domain::*;
//! use zoo_domain::infrastructure::*;
//!
//! let animals = Arc::new(InMemoryAnimalRepository::new());
//! let enclosures = Arc::new(InMemoryEnclosureRepository::new());
//! let events = Arc::new(InMemoryEventPublisher::new());
//!
//! let management = EnclosureManagementService::new(enclosures.clone(), animals.clone());
//! management.create_enclosure(
//!     "savanna",
//!     EnclosureType::Herbivore,
//!     EnclosureSize::new(100)?,
//!     Capacity::new(4)?,
//! )?;
//!
//! let transfers = AnimalTransferService::new(animals.clone(), enclosures.clone(), events.clone());
//! transfers.create_animal(Animal::new(
//!     "zebra-1",
//!     Species::new("Zebra")?,
//!     AnimalName::new("Marty")?,
//!     BirthDate::new(chrono::Utc::now())?,
//!     Gender::Male,
//!     FoodType::Vegetables,
//!     HealthStatus::Healthy,
//! )?)?;
//! transfers.transfer_animal("zebra-1", "savanna")?;
//!
//! assert_eq!(events.len()?, 1);
//! # Ok::<(), zoo_domain::DomainError>(())
//! ```

#![warn(missing_docs)]

mod entity;
mod errors;
mod events;

pub mod analysis;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

// Re-export core types
pub use config::ZooConfig;
pub use entity::AggregateRoot;
pub use errors::{DomainError, DomainResult, ErrorKind, ResultExt};
pub use events::{AnimalMoved, DomainEvent, FeedingTimeReached, ZooEvent};
