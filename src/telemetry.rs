// Copyright 2025 Cowboy AI, LLC.

//! Log output for binaries

use crate::errors::{DomainError, DomainResult};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Install a global fmt subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`. Fails if a global
/// subscriber is already installed or the directive does not parse.
pub fn init(default_filter: &str) -> DomainResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter).map_err(|e| {
            DomainError::validation(format!("invalid log filter {default_filter:?}: {e}"))
        })?,
    };

    Registry::default()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| DomainError::InfrastructureError(format!("failed to init subscriber: {e}")))
}
