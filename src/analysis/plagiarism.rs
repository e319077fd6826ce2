// Copyright 2025 Cowboy AI, LLC.

//! Exact-match plagiarism detection

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::debug;

/// Outcome of [`PlagiarismChecker::check`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlagiarismReport {
    /// At least one other file has identical content
    pub plagiarized: bool,
    /// Ids of identical files, sorted
    pub similar_file_ids: Vec<String>,
}

/// Compares content by SHA-256 digest
#[derive(Debug, Clone, Copy, Default)]
pub struct PlagiarismChecker;

impl PlagiarismChecker {
    /// Create a checker
    pub fn new() -> Self {
        Self
    }

    /// Lowercase hex SHA-256 of `content`
    pub fn content_hash(&self, content: &str) -> String {
        hex::encode(Sha256::digest(content.as_bytes()))
    }

    /// Report every file in `others` whose content is byte-identical to `content`
    pub fn check(&self, content: &str, others: &HashMap<String, String>) -> PlagiarismReport {
        let hash = self.content_hash(content);

        let mut similar_file_ids: Vec<String> = others
            .iter()
            .filter(|(_, other)| self.content_hash(other) == hash)
            .map(|(id, _)| id.clone())
            .collect();
        similar_file_ids.sort();

        debug!(candidates = others.len(), matches = similar_file_ids.len(), "plagiarism check");
        PlagiarismReport {
            plagiarized: !similar_file_ids.is_empty(),
            similar_file_ids,
        }
    }
}
