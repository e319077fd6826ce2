// Copyright 2025 Cowboy AI, LLC.

//! Feeding schedules and due-feeding notifications

use crate::domain::{
    AnimalRepository, EventPublisher, FeedingSchedule, FeedingScheduleRepository, FeedingTime,
    FoodType,
};
use crate::entity::AggregateRoot;
use crate::errors::{DomainError, DomainResult, ResultExt};
use crate::events::FeedingTimeReached;
use std::sync::Arc;
use tracing::{info, warn};

/// Manages feeding schedules for animals
pub struct FeedingOrganizationService {
    animals: Arc<dyn AnimalRepository>,
    schedules: Arc<dyn FeedingScheduleRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl FeedingOrganizationService {
    /// Create the service
    pub fn new(
        animals: Arc<dyn AnimalRepository>,
        schedules: Arc<dyn FeedingScheduleRepository>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            animals,
            schedules,
            publisher,
        }
    }

    /// Schedule a feeding for an existing animal
    pub fn create_feeding_schedule(
        &self,
        schedule_id: &str,
        animal_id: &str,
        feeding_time: FeedingTime,
        food_type: FoodType,
    ) -> DomainResult<FeedingSchedule> {
        self.animals
            .get_by_id(animal_id)
            .context("failed to get animal")?;

        match self.schedules.get_by_id(schedule_id) {
            Ok(_) => {
                return Err(DomainError::invariant(format!(
                    "feeding schedule {schedule_id} already exists"
                )))
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e.context("failed to check existing feeding schedule")),
        }

        let schedule = FeedingSchedule::new(schedule_id, animal_id, feeding_time, food_type)?;
        self.schedules
            .save(&schedule)
            .context("failed to save feeding schedule")?;
        info!(schedule_id, animal_id, food = %food_type, "feeding scheduled");
        Ok(schedule)
    }

    /// Load one schedule
    pub fn get_feeding_schedule(&self, schedule_id: &str) -> DomainResult<FeedingSchedule> {
        self.schedules.get_by_id(schedule_id)
    }

    /// Reschedule a pending feeding
    pub fn update_feeding_schedule(
        &self,
        schedule_id: &str,
        feeding_time: FeedingTime,
        food_type: FoodType,
    ) -> DomainResult<FeedingSchedule> {
        let mut schedule = self
            .schedules
            .get_by_id(schedule_id)
            .context("failed to get feeding schedule")?;
        schedule
            .change_schedule(feeding_time, food_type)
            .context("failed to change feeding schedule")?;
        self.schedules
            .save(&schedule)
            .context("failed to save feeding schedule")?;
        Ok(schedule)
    }

    /// Complete a feeding and feed the animal
    ///
    /// The completed schedule is persisted before the animal is fed. If the
    /// animal turns out to be sick the schedule stays completed and the error
    /// is returned.
    pub fn mark_feeding_completed(&self, schedule_id: &str) -> DomainResult<()> {
        let mut schedule = self
            .schedules
            .get_by_id(schedule_id)
            .context("failed to get feeding schedule")?;
        schedule
            .mark_completed()
            .context("failed to mark feeding as completed")?;
        self.schedules
            .save(&schedule)
            .context("failed to save feeding schedule")?;

        let animal = self
            .animals
            .get_by_id(schedule.animal_id())
            .context("failed to get animal")?;
        animal
            .feed(schedule.food_type())
            .context("failed to feed animal")?;
        self.animals.save(&animal).context("failed to save animal")?;

        info!(schedule_id, animal_id = animal.id(), "feeding completed");
        Ok(())
    }

    /// Remove a schedule
    pub fn delete_feeding_schedule(&self, schedule_id: &str) -> DomainResult<()> {
        self.schedules
            .delete(schedule_id)
            .context("failed to delete feeding schedule")
    }

    /// Incomplete schedules whose time has passed
    ///
    /// Publishes one `FeedingTime` event per due schedule. Publishing is best
    /// effort: failures are logged and the schedules are returned anyway.
    pub fn get_due_feedings(&self) -> DomainResult<Vec<FeedingSchedule>> {
        let due = self
            .schedules
            .get_due_schedules()
            .context("failed to get due feeding schedules")?;

        for schedule in due.iter().filter(|s| !s.is_completed() && s.is_due()) {
            let event = FeedingTimeReached::new(
                schedule.id(),
                schedule.animal_id(),
                schedule.food_type(),
            );
            if let Err(e) = self.publisher.publish(event.into()) {
                warn!(schedule_id = schedule.id(), error = %e, "failed to publish FeedingTime event");
            }
        }

        Ok(due)
    }

    /// Schedules for one animal
    pub fn get_feeding_schedules_by_animal(&self, animal_id: &str) -> DomainResult<Vec<FeedingSchedule>> {
        self.schedules.get_by_animal_id(animal_id)
    }

    /// Every schedule
    pub fn get_all_feeding_schedules(&self) -> DomainResult<Vec<FeedingSchedule>> {
        self.schedules.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::animal::fixtures::animal;
    use crate::domain::{HealthStatus, MockEventPublisher, MockFeedingScheduleRepository};
    use crate::events::DomainEvent;
    use crate::infrastructure::{
        InMemoryAnimalRepository, InMemoryEventPublisher, InMemoryFeedingScheduleRepository,
    };
    use chrono::{Duration, Utc};

    fn hours_from_now(hours: i64) -> FeedingTime {
        FeedingTime::new(Utc::now() + Duration::hours(hours))
    }

    fn service_with(
        publisher: Arc<dyn EventPublisher>,
    ) -> (
        Arc<InMemoryAnimalRepository>,
        Arc<InMemoryFeedingScheduleRepository>,
        FeedingOrganizationService,
    ) {
        let animals = Arc::new(InMemoryAnimalRepository::new());
        let schedules = Arc::new(InMemoryFeedingScheduleRepository::new());
        let service = FeedingOrganizationService::new(animals.clone(), schedules.clone(), publisher);
        (animals, schedules, service)
    }

    #[test]
    fn create_requires_existing_animal() {
        let (animals, _, service) = service_with(Arc::new(InMemoryEventPublisher::new()));

        let err = service
            .create_feeding_schedule("s-1", "ghost", hours_from_now(1), FoodType::Meat)
            .unwrap_err();
        assert!(err.is_not_found());

        animals.save(&animal("a", HealthStatus::Healthy)).unwrap();
        service
            .create_feeding_schedule("s-1", "a", hours_from_now(1), FoodType::Meat)
            .unwrap();
        assert!(service
            .create_feeding_schedule("s-1", "a", hours_from_now(2), FoodType::Meat)
            .is_err());
        assert_eq!(service.get_feeding_schedules_by_animal("a").unwrap().len(), 1);
    }

    #[test]
    fn update_rejected_once_completed() {
        let (animals, _, service) = service_with(Arc::new(InMemoryEventPublisher::new()));
        animals.save(&animal("a", HealthStatus::Healthy)).unwrap();
        service
            .create_feeding_schedule("s-1", "a", hours_from_now(1), FoodType::Meat)
            .unwrap();

        let updated = service
            .update_feeding_schedule("s-1", hours_from_now(3), FoodType::Fruits)
            .unwrap();
        assert_eq!(updated.food_type(), FoodType::Fruits);

        service.mark_feeding_completed("s-1").unwrap();
        assert!(service
            .update_feeding_schedule("s-1", hours_from_now(4), FoodType::Seeds)
            .unwrap_err()
            .is_validation_error());
        assert!(service.mark_feeding_completed("s-1").is_err());
    }

    #[test]
    fn completing_for_sick_animal_keeps_schedule_completed() {
        let (animals, schedules, service) = service_with(Arc::new(InMemoryEventPublisher::new()));
        animals.save(&animal("a", HealthStatus::Sick)).unwrap();
        service
            .create_feeding_schedule("s-1", "a", hours_from_now(1), FoodType::Meat)
            .unwrap();

        let err = service.mark_feeding_completed("s-1").unwrap_err();
        assert!(err.to_string().starts_with("failed to feed animal"));
        assert!(schedules.get_by_id("s-1").unwrap().is_completed());
    }

    #[test]
    fn due_feedings_publish_one_event_each() {
        let publisher = Arc::new(InMemoryEventPublisher::new());
        let (animals, _, service) = service_with(publisher.clone());
        animals.save(&animal("a", HealthStatus::Healthy)).unwrap();
        service
            .create_feeding_schedule("past-1", "a", hours_from_now(-2), FoodType::Meat)
            .unwrap();
        service
            .create_feeding_schedule("past-2", "a", hours_from_now(-1), FoodType::Fruits)
            .unwrap();
        service
            .create_feeding_schedule("future", "a", hours_from_now(5), FoodType::Seeds)
            .unwrap();
        service
            .create_feeding_schedule("done", "a", hours_from_now(-3), FoodType::Seeds)
            .unwrap();
        service.mark_feeding_completed("done").unwrap();

        let due: Vec<_> = service
            .get_due_feedings()
            .unwrap()
            .iter()
            .map(|s| s.id().to_string())
            .collect();

        assert_eq!(due, ["past-1", "past-2"]);
        let events = publisher.events_of_type("FeedingTime").unwrap();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.aggregate_id() == "a"));
    }

    #[test]
    fn due_feedings_survive_publish_failures() {
        let mut publisher = MockEventPublisher::new();
        publisher
            .expect_publish()
            .times(1)
            .returning(|_| Err(DomainError::InfrastructureError("bus down".to_string())));
        let (animals, _, service) = service_with(Arc::new(publisher));
        animals.save(&animal("a", HealthStatus::Healthy)).unwrap();
        service
            .create_feeding_schedule("s-1", "a", hours_from_now(-1), FoodType::Insects)
            .unwrap();

        let due = service.get_due_feedings().unwrap();
        assert_eq!(due.len(), 1);
    }

    #[test]
    fn delete_and_list() {
        let (animals, _, service) = service_with(Arc::new(InMemoryEventPublisher::new()));
        animals.save(&animal("a", HealthStatus::Healthy)).unwrap();
        service
            .create_feeding_schedule("s-1", "a", hours_from_now(1), FoodType::Meat)
            .unwrap();

        service.delete_feeding_schedule("s-1").unwrap();
        assert!(service.get_all_feeding_schedules().unwrap().is_empty());
        assert!(service.get_feeding_schedule("s-1").unwrap_err().is_not_found());
        assert!(service.delete_feeding_schedule("s-1").unwrap_err().is_not_found());
    }

    #[test]
    fn schedule_save_failure_leaves_animal_unfed() {
        let animals = Arc::new(InMemoryAnimalRepository::new());
        animals.save(&animal("a", HealthStatus::Healthy)).unwrap();

        let pending = FeedingSchedule::new("s-1", "a", hours_from_now(-1), FoodType::Meat).unwrap();
        let mut schedules = MockFeedingScheduleRepository::new();
        schedules
            .expect_get_by_id()
            .returning(move |_| Ok(pending.clone()));
        schedules
            .expect_save()
            .returning(|_| Err(DomainError::InfrastructureError("read-only".to_string())));

        let service = FeedingOrganizationService::new(
            animals,
            Arc::new(schedules),
            Arc::new(InMemoryEventPublisher::new()),
        );
        let err = service.mark_feeding_completed("s-1").unwrap_err();
        assert!(err.to_string().starts_with("failed to save feeding schedule"));
        assert_eq!(err.kind(), crate::errors::ErrorKind::Internal);
    }
}
