// Copyright 2025 Cowboy AI, LLC.

//! Feeding schedule aggregate

use super::value_objects::{FeedingTime, FoodType};
use crate::entity::AggregateRoot;
use crate::errors::{DomainError, DomainResult};
use chrono::{DateTime, Duration, Utc};
use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize};
use tracing::debug;

/// A one-way-completable reminder to feed an animal
///
/// Deserialization goes through [`FeedingSchedule::new`].
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct FeedingSchedule {
    id: String,
    animal_id: String,
    feeding_time: FeedingTime,
    food_type: FoodType,
    completed: bool,
}

impl FeedingSchedule {
    /// Create a pending schedule; both ids must be non-empty
    pub fn new(
        id: impl Into<String>,
        animal_id: impl Into<String>,
        feeding_time: FeedingTime,
        food_type: FoodType,
    ) -> DomainResult<Self> {
        let id = id.into();
        let animal_id = animal_id.into();
        if id.is_empty() {
            return Err(DomainError::validation("feeding schedule ID cannot be empty"));
        }
        if animal_id.is_empty() {
            return Err(DomainError::validation("animal ID cannot be empty"));
        }

        Ok(Self {
            id,
            animal_id,
            feeding_time,
            food_type,
            completed: false,
        })
    }

    /// Animal to feed
    pub fn animal_id(&self) -> &str {
        &self.animal_id
    }

    /// When to feed
    pub fn feeding_time(&self) -> FeedingTime {
        self.feeding_time
    }

    /// What to feed
    pub fn food_type(&self) -> FoodType {
        self.food_type
    }

    /// Whether the feeding happened
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Reschedule a pending feeding
    pub fn change_schedule(&mut self, feeding_time: FeedingTime, food_type: FoodType) -> DomainResult<()> {
        if self.completed {
            return Err(DomainError::invariant(
                "cannot change a completed feeding schedule",
            ));
        }

        self.feeding_time = feeding_time;
        self.food_type = food_type;
        debug!(schedule_id = %self.id, animal_id = %self.animal_id, "feeding schedule changed");
        Ok(())
    }

    /// Mark as completed; there is no way back
    pub fn mark_completed(&mut self) -> DomainResult<()> {
        if self.completed {
            return Err(DomainError::invariant(
                "feeding schedule is already marked as completed",
            ));
        }

        self.completed = true;
        debug!(schedule_id = %self.id, animal_id = %self.animal_id, "feeding completed");
        Ok(())
    }

    /// Whether `now` is past the feeding time
    pub fn is_due_at(&self, now: DateTime<Utc>) -> bool {
        now > self.feeding_time.value()
    }

    /// Whether the feeding time has passed
    pub fn is_due(&self) -> bool {
        self.is_due_at(Utc::now())
    }

    /// Time left until feeding as seen from `now`, zero once due
    pub fn time_until_feeding_at(&self, now: DateTime<Utc>) -> Duration {
        (self.feeding_time.value() - now).max(Duration::zero())
    }

    /// Time left until feeding, zero once due
    pub fn time_until_feeding(&self) -> Duration {
        self.time_until_feeding_at(Utc::now())
    }
}

#[derive(Deserialize)]
struct FeedingScheduleRecord {
    id: String,
    animal_id: String,
    feeding_time: FeedingTime,
    food_type: FoodType,
    #[serde(default)]
    completed: bool,
}

impl<'de> Deserialize<'de> for FeedingSchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = FeedingScheduleRecord::deserialize(deserializer)?;
        let mut schedule = FeedingSchedule::new(
            record.id,
            record.animal_id,
            record.feeding_time,
            record.food_type,
        )
        .map_err(de::Error::custom)?;
        schedule.completed = record.completed;
        Ok(schedule)
    }
}

impl AggregateRoot for FeedingSchedule {
    const ENTITY_TYPE: &'static str = "FeedingSchedule";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule_at(time: DateTime<Utc>) -> FeedingSchedule {
        FeedingSchedule::new("s-1", "a-1", FeedingTime::new(time), FoodType::Meat).unwrap()
    }

    #[test]
    fn new_requires_ids() {
        let t = FeedingTime::new(Utc::now());
        assert!(FeedingSchedule::new("", "a", t, FoodType::Meat).is_err());
        assert!(FeedingSchedule::new("s", "", t, FoodType::Meat).is_err());

        let s = FeedingSchedule::new("s", "a", t, FoodType::Meat).unwrap();
        assert!(!s.is_completed());
    }

    #[test]
    fn completion_is_one_way() {
        let mut s = schedule_at(Utc::now());
        s.mark_completed().unwrap();
        assert!(s.is_completed());

        assert!(s.mark_completed().is_err());
        let err = s
            .change_schedule(FeedingTime::new(Utc::now()), FoodType::Fruits)
            .unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(s.food_type(), FoodType::Meat);
    }

    #[test]
    fn change_schedule_overwrites_pending() {
        let mut s = schedule_at(Utc::now());
        let later = Utc::now() + Duration::hours(2);
        s.change_schedule(FeedingTime::new(later), FoodType::Insects).unwrap();

        assert_eq!(s.feeding_time().value(), later);
        assert_eq!(s.food_type(), FoodType::Insects);
    }

    #[test]
    fn due_and_time_until() {
        let now = Utc::now();
        let past = schedule_at(now - Duration::minutes(5));
        let future = schedule_at(now + Duration::minutes(30));

        assert!(past.is_due_at(now));
        assert_eq!(past.time_until_feeding_at(now), Duration::zero());

        assert!(!future.is_due_at(now));
        assert_eq!(future.time_until_feeding_at(now), Duration::minutes(30));
    }

    #[test]
    fn exact_feeding_instant_is_not_due() {
        let now = Utc::now();
        assert!(!schedule_at(now).is_due_at(now));
    }

    #[test]
    fn serde_round_trip_keeps_completion() {
        let mut s = schedule_at(Utc::now());
        s.mark_completed().unwrap();

        let json = serde_json::to_string(&s).unwrap();
        let back: FeedingSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
        assert!(back.is_completed());
    }

    #[test]
    fn deserialize_rejects_empty_animal_id() {
        let mut json = serde_json::to_value(schedule_at(Utc::now())).unwrap();
        json["animal_id"] = serde_json::json!("");

        let err = serde_json::from_value::<FeedingSchedule>(json).unwrap_err();
        assert!(err.to_string().contains("animal ID cannot be empty"));
    }

    #[test]
    fn wall_clock_queries() {
        assert!(schedule_at(Utc::now() - Duration::hours(1)).is_due());
        assert!(schedule_at(Utc::now() + Duration::hours(1)).time_until_feeding() > Duration::zero());
    }
}
