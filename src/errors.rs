// Copyright 2025 Cowboy AI, LLC.

//! Error types for domain operations

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    EntityNotFound {
        /// Type of entity that wasn't found
        entity_type: String,
        /// ID that was searched for
        id: String,
    },

    /// Validation error (bad constructor or request input)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Invariant violation
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Enclosure has no room for another animal
    #[error("Capacity exceeded: enclosure {enclosure_id} holds at most {capacity} animals")]
    CapacityExceeded {
        /// Enclosure that is full
        enclosure_id: String,
        /// Its maximum capacity
        capacity: usize,
    },

    /// Storage or publishing failure
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    InternalError(String),

    /// An inner error annotated with the step that failed
    #[error("{context}: {source}")]
    Operation {
        /// What was being attempted
        context: String,
        /// The underlying error
        #[source]
        source: Box<DomainError>,
    },
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Coarse classification used by presentation layers to pick a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing entity (404 / NOT_FOUND)
    NotFound,
    /// Rejected input or violated rule (400 / INVALID_ARGUMENT)
    Validation,
    /// Everything else (500 / INTERNAL)
    Internal,
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for DomainError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::FileParse { .. } => {
                DomainError::SerializationError(err.to_string())
            }
            config::ConfigError::Foreign(_) => DomainError::InfrastructureError(err.to_string()),
            _ => DomainError::ValidationError(err.to_string()),
        }
    }
}

impl DomainError {
    /// Create an entity-not-found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        DomainError::EntityNotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::ValidationError(msg.into())
    }

    /// Create an invariant violation
    pub fn invariant(msg: impl Into<String>) -> Self {
        DomainError::InvariantViolation(msg.into())
    }

    /// Wrap this error with a description of the failed step
    pub fn context(self, context: impl Into<String>) -> Self {
        DomainError::Operation {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any `Operation` layers
    pub fn root(&self) -> &DomainError {
        let mut current = self;
        while let DomainError::Operation { source, .. } = current {
            current = source;
        }
        current
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), DomainError::EntityNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self.root(),
            DomainError::ValidationError(_)
                | DomainError::InvariantViolation(_)
                | DomainError::CapacityExceeded { .. }
        )
    }

    /// Classify the root error
    pub fn kind(&self) -> ErrorKind {
        if self.is_not_found() {
            ErrorKind::NotFound
        } else if self.is_validation_error() {
            ErrorKind::Validation
        } else {
            ErrorKind::Internal
        }
    }
}

/// Adds step context to fallible domain calls
pub trait ResultExt<T> {
    /// Wrap the error, if any, in an `Operation` layer
    fn context(self, context: &str) -> DomainResult<T>;
}

impl<T> ResultExt<T> for DomainResult<T> {
    fn context(self, context: &str) -> DomainResult<T> {
        self.map_err(|e| e.context(context))
    }
}
