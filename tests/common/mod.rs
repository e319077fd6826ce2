// Copyright 2025 Cowboy AI, LLC.

//! Shared wiring for integration tests

#![allow(dead_code)]

use chrono::{Duration, Utc};
use std::sync::Arc;
use zoo_domain::application::{
    AnimalTransferService, EnclosureManagementService, FeedingOrganizationService,
    ZooStatisticsService,
};
use zoo_domain::domain::{
    Animal, AnimalName, BirthDate, Capacity, EnclosureSize, EnclosureType, FoodType, Gender,
    HealthStatus, Species,
};
use zoo_domain::infrastructure::{
    InMemoryAnimalRepository, InMemoryEnclosureRepository, InMemoryEventPublisher,
    InMemoryFeedingScheduleRepository,
};

/// Every repository and service over one set of in-memory stores
pub struct TestZoo {
    pub animals: Arc<InMemoryAnimalRepository>,
    pub enclosures: Arc<InMemoryEnclosureRepository>,
    pub schedules: Arc<InMemoryFeedingScheduleRepository>,
    pub events: Arc<InMemoryEventPublisher>,
    pub transfers: AnimalTransferService,
    pub management: EnclosureManagementService,
    pub feeding: FeedingOrganizationService,
    pub statistics: ZooStatisticsService,
}

impl TestZoo {
    pub fn new() -> Self {
        Self::with_serialized_transfers(true)
    }

    pub fn with_serialized_transfers(enabled: bool) -> Self {
        let animals = Arc::new(InMemoryAnimalRepository::new());
        let enclosures = Arc::new(InMemoryEnclosureRepository::new());
        let schedules = Arc::new(InMemoryFeedingScheduleRepository::new());
        let events = Arc::new(InMemoryEventPublisher::new());

        Self {
            transfers: AnimalTransferService::new(
                animals.clone(),
                enclosures.clone(),
                events.clone(),
            )
            .with_serialized_transfers(enabled),
            management: EnclosureManagementService::new(enclosures.clone(), animals.clone()),
            feeding: FeedingOrganizationService::new(
                animals.clone(),
                schedules.clone(),
                events.clone(),
            ),
            statistics: ZooStatisticsService::new(animals.clone(), enclosures.clone()),
            animals,
            enclosures,
            schedules,
            events,
        }
    }

    pub fn add_enclosure(&self, id: &str, capacity: i64) {
        self.management
            .create_enclosure(
                id,
                EnclosureType::Predator,
                EnclosureSize::new(capacity * 10).unwrap(),
                Capacity::new(capacity).unwrap(),
            )
            .unwrap();
    }

    pub fn add_animal(&self, id: &str) {
        self.transfers.create_animal(animal(id, HealthStatus::Healthy)).unwrap();
    }
}

pub fn animal(id: &str, status: HealthStatus) -> Animal {
    Animal::new(
        id,
        Species::new("Tiger").unwrap(),
        AnimalName::new(format!("Tiger {id}")).unwrap(),
        BirthDate::new(Utc::now() - Duration::days(700)).unwrap(),
        Gender::Female,
        FoodType::Meat,
        status,
    )
    .unwrap()
}
