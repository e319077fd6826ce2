// Copyright 2025 Cowboy AI, LLC.

//! Seeds an in-memory zoo, runs a day of operations and prints the statistics

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};
use zoo_domain::analysis::PlagiarismChecker;
use zoo_domain::application::{
    AnimalTransferService, EnclosureManagementService, FeedingOrganizationService,
    ZooStatisticsService,
};
use zoo_domain::domain::{
    Animal, AnimalName, BirthDate, Capacity, EnclosureSize, EnclosureType, FeedingTime, FoodType,
    Gender, HealthStatus, Species,
};
use zoo_domain::infrastructure::{
    InMemoryAnimalRepository, InMemoryEnclosureRepository, InMemoryEventPublisher,
    InMemoryFeedingScheduleRepository,
};
use zoo_domain::{AggregateRoot, DomainEvent, ZooConfig};

fn animal(
    id: &str,
    species: &str,
    name: &str,
    age_years: i64,
    gender: Gender,
    food: FoodType,
) -> Result<Animal> {
    Ok(Animal::new(
        id,
        Species::new(species)?,
        AnimalName::new(name)?,
        BirthDate::new(Utc::now() - Duration::days(age_years * 365))?,
        gender,
        food,
        HealthStatus::Healthy,
    )?)
}

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => ZooConfig::from_file(&path).with_context(|| format!("loading {path}"))?,
        None => ZooConfig::from_env().context("reading ZOO_* environment")?,
    };
    zoo_domain::telemetry::init(&config.log_filter)?;

    let animals = Arc::new(InMemoryAnimalRepository::new());
    let enclosures = Arc::new(InMemoryEnclosureRepository::new());
    let schedules = Arc::new(InMemoryFeedingScheduleRepository::new());
    let events = Arc::new(InMemoryEventPublisher::new());

    let management = EnclosureManagementService::new(enclosures.clone(), animals.clone());
    let transfers = AnimalTransferService::new(animals.clone(), enclosures.clone(), events.clone())
        .with_serialized_transfers(config.serialize_transfers);
    let feeding = FeedingOrganizationService::new(animals.clone(), schedules, events.clone());
    let statistics = ZooStatisticsService::new(animals, enclosures);

    management.create_enclosure(
        "pride-rock",
        EnclosureType::Predator,
        EnclosureSize::new(400)?,
        Capacity::new(2)?,
    )?;
    management.create_enclosure(
        "savanna",
        EnclosureType::Herbivore,
        EnclosureSize::new(1200)?,
        Capacity::new(6)?,
    )?;

    transfers.create_animal(animal("lion-1", "Lion", "Simba", 4, Gender::Male, FoodType::Meat)?)?;
    transfers.create_animal(animal("lion-2", "Lion", "Nala", 4, Gender::Female, FoodType::Meat)?)?;
    transfers.create_animal(animal(
        "zebra-1",
        "Zebra",
        "Marty",
        6,
        Gender::Male,
        FoodType::Vegetables,
    )?)?;

    transfers.transfer_animal("lion-1", "pride-rock")?;
    transfers.transfer_animal("lion-2", "pride-rock")?;
    transfers.transfer_animal("zebra-1", "savanna")?;

    if let Err(e) = transfers.transfer_animal("zebra-1", "pride-rock") {
        warn!(error = %e, "transfer refused");
    }

    feeding.create_feeding_schedule(
        "breakfast-lion-1",
        "lion-1",
        FeedingTime::new(Utc::now() - Duration::minutes(30)),
        FoodType::Meat,
    )?;
    feeding.create_feeding_schedule(
        "lunch-zebra-1",
        "zebra-1",
        FeedingTime::new(Utc::now() + Duration::hours(3)),
        FoodType::Vegetables,
    )?;
    for schedule in feeding.get_due_feedings()? {
        feeding.mark_feeding_completed(schedule.id())?;
    }

    transfers.set_health_status("lion-2", HealthStatus::Sick)?;
    transfers.treat_animal("lion-2")?;
    management.clean_enclosure("savanna")?;

    for event in events.events()? {
        info!(event_type = event.event_type(), aggregate = event.aggregate_id(), "recorded");
    }

    let essays = HashMap::from([
        ("essay-1".to_string(), "Zebras are striped.".to_string()),
        ("essay-2".to_string(), "Lions sleep a lot.".to_string()),
    ]);
    let analyzer = config.text_analyzer();
    let submission = "Zebras are striped.";
    let report = PlagiarismChecker::new().check(submission, &essays);

    let summary = serde_json::json!({
        "statistics": statistics.get_zoo_statistics()?,
        "utilization": statistics.get_enclosure_utilization()?,
        "submission": analyzer.analyze(submission),
        "plagiarism": report,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
