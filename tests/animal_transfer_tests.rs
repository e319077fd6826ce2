// Copyright 2025 Cowboy AI, LLC.

//! Transfers keep both sides of the animal/enclosure relationship in step
//!
//! ```mermaid
//! graph LR
//!     A[Load animal] --> B[Load target]
//!     B --> C{Has space?}
//!     C -->|no| X[CapacityExceeded]
//!     C -->|yes| D[Remove from source + save]
//!     D --> E[Add to target]
//!     E --> F[Save animal, save target]
//!     F --> G[Publish AnimalMoved]
//! ```

mod common;

use common::TestZoo;
use std::sync::Arc;
use std::thread;
use zoo_domain::domain::{AnimalRepository, EnclosureRepository};
use zoo_domain::{DomainError, DomainEvent, ErrorKind, ZooEvent};

#[test]
fn transfer_between_enclosures_updates_both_sides() {
    let zoo = TestZoo::new();
    zoo.add_enclosure("e1", 2);
    zoo.add_enclosure("e2", 2);
    zoo.add_animal("a");
    zoo.transfers.transfer_animal("a", "e1").unwrap();

    zoo.transfers.transfer_animal("a", "e2").unwrap();

    assert_eq!(zoo.animals.get_by_id("a").unwrap().enclosure_id(), Some("e2"));
    assert!(!zoo.enclosures.get_by_id("e1").unwrap().contains("a"));
    assert!(zoo.enclosures.get_by_id("e2").unwrap().contains("a"));

    let moves = zoo.events.events_of_type("AnimalMoved").unwrap();
    assert_eq!(moves.len(), 2);
    match &moves[1] {
        ZooEvent::AnimalMoved(moved) => {
            assert_eq!(moved.from_enclosure_id.as_deref(), Some("e1"));
            assert_eq!(moved.to_enclosure_id, "e2");
            assert_eq!(moved.aggregate_id(), "a");
        }
        other => panic!("expected AnimalMoved, got {other:?}"),
    }
}

#[test]
fn first_placement_has_no_source() {
    let zoo = TestZoo::new();
    zoo.add_enclosure("e1", 1);
    zoo.add_animal("a");

    zoo.transfers.transfer_animal("a", "e1").unwrap();

    let events = zoo.events.events().unwrap();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], ZooEvent::AnimalMoved(m) if m.from_enclosure_id.is_none()));
}

#[test]
fn transfer_into_full_enclosure_changes_nothing() {
    let zoo = TestZoo::new();
    zoo.add_enclosure("full", 1);
    zoo.add_animal("other-animal");
    zoo.add_animal("animal1");
    zoo.transfers.transfer_animal("other-animal", "full").unwrap();
    let before = zoo.enclosures.get_by_id("full").unwrap();

    let err = zoo.transfers.transfer_animal("animal1", "full").unwrap_err();

    assert!(matches!(err, DomainError::CapacityExceeded { capacity: 1, .. }));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(zoo.animals.get_by_id("animal1").unwrap().enclosure_id(), None);
    assert_eq!(zoo.enclosures.get_by_id("full").unwrap(), before);
    assert_eq!(zoo.events.len().unwrap(), 1);
}

#[test]
fn transfer_to_unknown_enclosure_is_not_found() {
    let zoo = TestZoo::new();
    zoo.add_animal("a");

    let err = zoo.transfers.transfer_animal("a", "nowhere").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        err.to_string(),
        "failed to get target enclosure: Entity not found: Enclosure with id nowhere"
    );
}

#[test]
fn delete_animal_frees_its_place() {
    let zoo = TestZoo::new();
    zoo.add_enclosure("e1", 1);
    zoo.add_animal("a");
    zoo.add_animal("b");
    zoo.transfers.transfer_animal("a", "e1").unwrap();

    zoo.transfers.delete_animal("a").unwrap();
    zoo.transfers.transfer_animal("b", "e1").unwrap();

    let inside = zoo.management.get_animals_in_enclosure("e1").unwrap();
    assert_eq!(inside.len(), 1);
    assert_eq!(zoo.transfers.get_all_animals().unwrap().len(), 1);
}

/// Eight threads race for two free places
#[test]
fn same_enclosure_is_reported_before_capacity() {
    let zoo = TestZoo::new();
    zoo.add_enclosure("e1", 1);
    zoo.add_animal("a");
    zoo.transfers.transfer_animal("a", "e1").unwrap();

    let err = zoo.transfers.transfer_animal("a", "e1").unwrap_err();

    assert!(matches!(err, DomainError::InvariantViolation(_)));
    assert_eq!(zoo.enclosures.get_by_id("e1").unwrap().current_animal_count(), 1);
    assert_eq!(zoo.events.len().unwrap(), 1);
}

#[test]
fn lock_per_call_mode_keeps_sequential_transfers_consistent() {
    let zoo = TestZoo::with_serialized_transfers(false);
    zoo.add_enclosure("e1", 1);
    zoo.add_enclosure("e2", 2);
    zoo.add_animal("a");
    zoo.add_animal("b");

    zoo.transfers.transfer_animal("a", "e1").unwrap();
    zoo.transfers.transfer_animal("b", "e2").unwrap();
    let err = zoo.transfers.transfer_animal("b", "e1").unwrap_err();
    assert!(matches!(err, DomainError::CapacityExceeded { capacity: 1, .. }));
    zoo.transfers.transfer_animal("a", "e2").unwrap();
    zoo.transfers.delete_animal("b").unwrap();

    let e1 = zoo.enclosures.get_by_id("e1").unwrap();
    let e2 = zoo.enclosures.get_by_id("e2").unwrap();
    assert!(e1.is_empty());
    assert_eq!(e2.current_animal_ids(), ["a".to_string()]);
    assert_eq!(zoo.animals.get_by_id("a").unwrap().enclosure_id(), Some("e2"));
    assert!(zoo.animals.get_by_id("b").unwrap_err().is_not_found());
    assert_eq!(zoo.events.events_of_type("AnimalMoved").unwrap().len(), 3);
}

#[test]
fn serialized_transfers_never_overfill() {
    let zoo = Arc::new(TestZoo::new());
    zoo.add_enclosure("last-spots", 2);
    for i in 0..8 {
        zoo.add_animal(&format!("a-{i}"));
    }

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let zoo = Arc::clone(&zoo);
            thread::spawn(move || zoo.transfers.transfer_animal(&format!("a-{i}"), "last-spots"))
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 2);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, DomainError::CapacityExceeded { .. })));

    let enclosure = zoo.enclosures.get_by_id("last-spots").unwrap();
    assert_eq!(enclosure.current_animal_count(), 2);
    assert_eq!(zoo.transfers.get_animals_by_enclosure("last-spots").unwrap().len(), 2);
    assert_eq!(zoo.events.len().unwrap(), 2);
}

#[test]
fn statistics_follow_transfers() {
    let zoo = TestZoo::new();
    zoo.add_enclosure("e1", 1);
    zoo.add_enclosure("e2", 3);
    zoo.add_enclosure("e3", 3);
    for id in ["a", "b", "c"] {
        zoo.add_animal(id);
    }
    zoo.transfers.transfer_animal("a", "e1").unwrap();
    zoo.transfers.transfer_animal("b", "e2").unwrap();

    let stats = zoo.statistics.get_zoo_statistics().unwrap();
    assert_eq!(stats.full_enclosures, 1);
    assert_eq!(stats.available_enclosures, 1);
    assert_eq!(stats.empty_enclosures, 1);
    assert_eq!(stats.animals_by_enclosure.values().sum::<usize>(), 2);
}
