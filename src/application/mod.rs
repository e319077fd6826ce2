// Copyright 2025 Cowboy AI, LLC.

//! Application services
//!
//! Services orchestrate aggregates through the repository traits and are
//! the only place where an animal's enclosure reference and the
//! enclosure's animal list are changed together.

mod animal_transfer;
mod enclosure_management;
mod feeding_organization;
mod zoo_statistics;

pub use animal_transfer::AnimalTransferService;
pub use enclosure_management::EnclosureManagementService;
pub use feeding_organization::FeedingOrganizationService;
pub use zoo_statistics::{ZooStatistics, ZooStatisticsService};
