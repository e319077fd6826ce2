// Copyright 2025 Cowboy AI, LLC.

//! Generic in-memory storage shared by the repositories

use crate::entity::AggregateRoot;
use crate::errors::{DomainError, DomainResult};
use indexmap::IndexMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Insertion-ordered map of aggregates keyed by id, guarded by one lock
///
/// Reads share the lock, writes take it exclusively. Each call locks on its
/// own; multi-step operations spanning several calls are not atomic.
#[derive(Debug)]
pub struct InMemoryStore<E: AggregateRoot> {
    entries: RwLock<IndexMap<String, E>>,
}

impl<E: AggregateRoot> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AggregateRoot> InMemoryStore<E> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(IndexMap::new()),
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, IndexMap<String, E>>> {
        self.entries.read().map_err(|_| {
            DomainError::InternalError(format!("{} store lock poisoned", E::ENTITY_TYPE))
        })
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, IndexMap<String, E>>> {
        self.entries.write().map_err(|_| {
            DomainError::InternalError(format!("{} store lock poisoned", E::ENTITY_TYPE))
        })
    }

    /// Clone of the entity with this id
    pub fn get(&self, id: &str) -> DomainResult<E> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(E::ENTITY_TYPE, id))
    }

    /// Clones of every entity in insertion order
    pub fn all(&self) -> DomainResult<Vec<E>> {
        Ok(self.read()?.values().cloned().collect())
    }

    /// Clones of the entities matching `predicate`
    pub fn filter(&self, predicate: impl Fn(&E) -> bool) -> DomainResult<Vec<E>> {
        Ok(self
            .read()?
            .values()
            .filter(|e| predicate(e))
            .cloned()
            .collect())
    }

    /// Insert or replace; an existing entry keeps its position
    pub fn upsert(&self, entity: &E) -> DomainResult<()> {
        if entity.id().is_empty() {
            return Err(DomainError::validation(format!(
                "{} cannot be saved without an id",
                E::ENTITY_TYPE
            )));
        }
        self.write()?.insert(entity.id().to_string(), entity.clone());
        Ok(())
    }

    /// Remove by id, preserving the order of the rest
    pub fn remove(&self, id: &str) -> DomainResult<()> {
        self.write()?
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(E::ENTITY_TYPE, id))
    }

    /// Number of stored entities
    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.len())
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.read()?.is_empty())
    }
}
