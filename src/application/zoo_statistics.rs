// Copyright 2025 Cowboy AI, LLC.

//! Read-only aggregation over animals and enclosures

use crate::domain::{AnimalRepository, EnclosureRepository, Gender, HealthStatus};
use crate::entity::AggregateRoot;
use crate::errors::{DomainResult, ResultExt};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Point-in-time snapshot of the zoo
///
/// Each enclosure is counted in exactly one of `empty_enclosures`,
/// `available_enclosures` (occupied with room left) and `full_enclosures`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ZooStatistics {
    /// Number of animals
    pub total_animals: usize,
    /// Animals that can be fed
    pub healthy_animals: usize,
    /// Animals waiting for treatment
    pub sick_animals: usize,
    /// Number of enclosures
    pub total_enclosures: usize,
    /// Occupied enclosures with room left
    pub available_enclosures: usize,
    /// Enclosures at capacity
    pub full_enclosures: usize,
    /// Enclosures without occupants
    pub empty_enclosures: usize,
    /// Animal count per species
    pub animals_by_species: BTreeMap<String, usize>,
    /// Animal count per gender
    pub animals_by_gender: BTreeMap<Gender, usize>,
    /// Only assigned animals are counted here
    pub animals_by_enclosure: BTreeMap<String, usize>,
}

/// Computes statistics from repository snapshots
pub struct ZooStatisticsService {
    animals: Arc<dyn AnimalRepository>,
    enclosures: Arc<dyn EnclosureRepository>,
}

impl ZooStatisticsService {
    /// Create the service
    pub fn new(animals: Arc<dyn AnimalRepository>, enclosures: Arc<dyn EnclosureRepository>) -> Self {
        Self {
            animals,
            enclosures,
        }
    }

    /// One scan of each repository, classified into a snapshot
    pub fn get_zoo_statistics(&self) -> DomainResult<ZooStatistics> {
        let animals = self.animals.get_all().context("failed to get animals")?;
        let enclosures = self
            .enclosures
            .get_all()
            .context("failed to get enclosures")?;

        let mut stats = ZooStatistics {
            total_animals: animals.len(),
            total_enclosures: enclosures.len(),
            ..ZooStatistics::default()
        };

        for animal in &animals {
            match animal.health_status() {
                HealthStatus::Healthy => stats.healthy_animals += 1,
                HealthStatus::Sick => stats.sick_animals += 1,
            }
            *stats
                .animals_by_species
                .entry(animal.species().to_string())
                .or_default() += 1;
            *stats.animals_by_gender.entry(animal.gender()).or_default() += 1;
            if let Some(enclosure_id) = animal.enclosure_id() {
                *stats
                    .animals_by_enclosure
                    .entry(enclosure_id.to_string())
                    .or_default() += 1;
            }
        }

        for enclosure in &enclosures {
            if enclosure.is_empty() {
                stats.empty_enclosures += 1;
            } else if enclosure.has_space() {
                stats.available_enclosures += 1;
            } else {
                stats.full_enclosures += 1;
            }
        }

        Ok(stats)
    }

    /// Animal count per species
    pub fn get_animal_count_by_species(&self) -> DomainResult<BTreeMap<String, usize>> {
        let mut counts = BTreeMap::new();
        for animal in self.animals.get_all().context("failed to get animals")? {
            *counts.entry(animal.species().to_string()).or_default() += 1;
        }
        Ok(counts)
    }

    /// Occupancy over capacity per enclosure id
    pub fn get_enclosure_utilization(&self) -> DomainResult<BTreeMap<String, f64>> {
        let enclosures = self
            .enclosures
            .get_all()
            .context("failed to get enclosures")?;

        Ok(enclosures
            .iter()
            .map(|e| {
                let capacity = e.max_capacity().value();
                let ratio = if capacity == 0 {
                    0.0
                } else {
                    e.current_animal_count() as f64 / capacity as f64
                };
                (e.id().to_string(), ratio)
            })
            .collect())
    }

    /// Animal count per health status; both statuses are always present
    pub fn get_health_status_statistics(&self) -> DomainResult<BTreeMap<HealthStatus, usize>> {
        let mut counts: BTreeMap<HealthStatus, usize> =
            HealthStatus::ALL.iter().map(|s| (*s, 0)).collect();
        for animal in self.animals.get_all().context("failed to get animals")? {
            *counts.entry(animal.health_status()).or_default() += 1;
        }
        Ok(counts)
    }
}
