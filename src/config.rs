// Copyright 2025 Cowboy AI, LLC.

//! Runtime configuration
//!
//! Layers are merged by the `config` crate: built-in defaults first, then a
//! JSON document or file, or `ZOO_*` environment variables.

use crate::analysis::{TextAnalyzer, DEFAULT_STOP_WORDS};
use crate::errors::DomainResult;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of the environment overrides, e.g. `ZOO_SERIALIZE_TRANSFERS`
pub const ENV_PREFIX: &str = "ZOO";

/// Settings shared by the services and binaries
///
/// Missing fields take their default, so `{}` is a valid config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ZooConfig {
    /// Hold one lock for a whole transfer or animal deletion
    pub serialize_transfers: bool,
    /// Default `tracing` filter directive; `RUST_LOG` wins when set
    pub log_filter: String,
    /// Words skipped by the text analyzer
    pub stop_words: Vec<String>,
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            serialize_transfers: true,
            log_filter: "zoo_domain=info".to_string(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl ZooConfig {
    /// Defaults overlaid with a JSON document
    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        Self::load(Self::defaults()?.add_source(File::from_str(json, FileFormat::Json)))
    }

    /// Defaults overlaid with a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> DomainResult<Self> {
        Self::load(Self::defaults()?.add_source(File::from(path.as_ref()).format(FileFormat::Json)))
    }

    /// Defaults overlaid with `ZOO_*` environment variables
    ///
    /// `ZOO_STOP_WORDS` is a comma separated list.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_environment(Self::environment())
    }

    fn from_environment(environment: Environment) -> DomainResult<Self> {
        Self::load(Self::defaults()?.add_source(environment))
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .ignore_empty(true)
            .list_separator(",")
            .with_list_parse_key("stop_words")
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = ZooConfig::default();
        Config::builder()
            .set_default("serialize_transfers", defaults.serialize_transfers)?
            .set_default("log_filter", defaults.log_filter)?
            .set_default("stop_words", defaults.stop_words)
    }

    fn load(builder: ConfigBuilder<DefaultState>) -> DomainResult<Self> {
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Text analyzer using the configured stop words
    pub fn text_analyzer(&self) -> TextAnalyzer {
        TextAnalyzer::with_stop_words(&self.stop_words)
    }
}
