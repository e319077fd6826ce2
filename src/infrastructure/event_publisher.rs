// Copyright 2025 Cowboy AI, LLC.

//! Append-only in-memory event log

use crate::domain::EventPublisher;
use crate::errors::{DomainError, DomainResult};
use crate::events::{DomainEvent, ZooEvent};
use std::sync::RwLock;
use tracing::debug;

/// Event publisher that keeps every published event for the process lifetime
///
/// There are no subscribers; the log is an audit trail read back through
/// [`events`](Self::events).
#[derive(Debug, Default)]
pub struct InMemoryEventPublisher {
    events: RwLock<Vec<ZooEvent>>,
}

impl InMemoryEventPublisher {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every published event, oldest first
    pub fn events(&self) -> DomainResult<Vec<ZooEvent>> {
        self.events
            .read()
            .map(|events| events.clone())
            .map_err(|_| DomainError::InternalError("event log lock poisoned".to_string()))
    }

    /// Copy of the events with the given type tag
    pub fn events_of_type(&self, event_type: &str) -> DomainResult<Vec<ZooEvent>> {
        Ok(self
            .events()?
            .into_iter()
            .filter(|e| e.event_type() == event_type)
            .collect())
    }

    /// Number of published events
    pub fn len(&self) -> DomainResult<usize> {
        self.events
            .read()
            .map(|events| events.len())
            .map_err(|_| DomainError::InternalError("event log lock poisoned".to_string()))
    }

    /// Whether nothing was published yet
    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl EventPublisher for InMemoryEventPublisher {
    fn publish(&self, event: ZooEvent) -> DomainResult<()> {
        if event.aggregate_id().is_empty() {
            return Err(DomainError::validation(format!(
                "{} event has no aggregate id",
                event.event_type()
            )));
        }

        debug!(event_type = event.event_type(), aggregate_id = event.aggregate_id(), "event published");
        self.events
            .write()
            .map_err(|_| DomainError::InternalError("event log lock poisoned".to_string()))?
            .push(event);
        Ok(())
    }
}
