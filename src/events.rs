// Copyright (c) 2025 - Cowboy AI, LLC.

//! Domain events for the zoo
//!
//! Events represent facts that have occurred in the domain. They are
//! immutable, timestamped at creation and recorded after a successful
//! state change.

use crate::domain::FoodType;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Base trait for all domain events
///
/// # Examples
///
/// ```rust
/// use zoo_domain::{AnimalMoved, DomainEvent};
///
/// let event = AnimalMoved::new("lion-1", Some("e-1".to_string()), "e-2");
/// assert_eq!(event.event_type(), "AnimalMoved");
/// assert_eq!(event.aggregate_id(), "lion-1");
/// ```
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Get the aggregate ID this event relates to
    fn aggregate_id(&self) -> &str;

    /// Get the event type name
    fn event_type(&self) -> &'static str;

    /// When the event was created
    fn occurred_on(&self) -> DateTime<Utc>;

    /// Get the schema version
    fn version(&self) -> &'static str {
        "v1"
    }
}

/// An animal changed enclosure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnimalMoved {
    /// Unique event id
    pub event_id: Uuid,
    /// When the move was recorded
    pub occurred_on: DateTime<Utc>,
    /// The animal that moved
    pub animal_id: String,
    /// Where it came from; `None` when it had no enclosure before
    pub from_enclosure_id: Option<String>,
    /// Where it lives now
    pub to_enclosure_id: String,
}

impl AnimalMoved {
    /// Record a move happening now
    pub fn new(
        animal_id: impl Into<String>,
        from_enclosure_id: Option<String>,
        to_enclosure_id: impl Into<String>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_on: Utc::now(),
            animal_id: animal_id.into(),
            from_enclosure_id,
            to_enclosure_id: to_enclosure_id.into(),
        }
    }
}

impl DomainEvent for AnimalMoved {
    fn aggregate_id(&self) -> &str {
        &self.animal_id
    }

    fn event_type(&self) -> &'static str {
        "AnimalMoved"
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }
}

/// A scheduled feeding is due
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeedingTimeReached {
    /// Unique event id
    pub event_id: Uuid,
    /// When the due feeding was noticed
    pub occurred_on: DateTime<Utc>,
    /// Schedule that is due
    pub schedule_id: String,
    /// Animal to feed
    pub animal_id: String,
    /// Food to bring
    pub food_type: FoodType,
}

impl FeedingTimeReached {
    /// Record a due feeding noticed now
    pub fn new(
        schedule_id: impl Into<String>,
        animal_id: impl Into<String>,
        food_type: FoodType,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_on: Utc::now(),
            schedule_id: schedule_id.into(),
            animal_id: animal_id.into(),
            food_type,
        }
    }
}

impl DomainEvent for FeedingTimeReached {
    fn aggregate_id(&self) -> &str {
        &self.animal_id
    }

    fn event_type(&self) -> &'static str {
        "FeedingTime"
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }
}

/// Enum wrapper for all zoo events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum ZooEvent {
    /// An animal was transferred
    AnimalMoved(AnimalMoved),
    /// A feeding became due
    FeedingTime(FeedingTimeReached),
}

impl ZooEvent {
    fn inner(&self) -> &dyn DomainEvent {
        match self {
            ZooEvent::AnimalMoved(e) => e,
            ZooEvent::FeedingTime(e) => e,
        }
    }
}

impl DomainEvent for ZooEvent {
    fn aggregate_id(&self) -> &str {
        self.inner().aggregate_id()
    }

    fn event_type(&self) -> &'static str {
        self.inner().event_type()
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        self.inner().occurred_on()
    }
}

impl From<AnimalMoved> for ZooEvent {
    fn from(event: AnimalMoved) -> Self {
        ZooEvent::AnimalMoved(event)
    }
}

impl From<FeedingTimeReached> for ZooEvent {
    fn from(event: FeedingTimeReached) -> Self {
        ZooEvent::FeedingTime(event)
    }
}
