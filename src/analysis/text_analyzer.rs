// Copyright 2025 Cowboy AI, LLC.

//! Word and paragraph statistics for uploaded text

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English words ignored by [`TextAnalyzer::significant_words`]
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "be", "been", "in", "on",
    "at", "to", "for", "with", "by", "of", "about", "from", "this", "that", "these", "those", "it",
    "its", "it's", "they", "them", "their",
];

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

/// Any Unicode punctuation character
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| compile(r"\p{P}"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid pattern")
}

/// Counts produced by [`TextAnalyzer::analyze`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextStatistics {
    /// Non-blank chunks separated by an empty line
    pub paragraph_count: usize,
    /// Whitespace separated tokens
    pub word_count: usize,
    /// Length in bytes, whitespace included
    pub character_count: usize,
}

/// Splits text into paragraphs, words and n-grams
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    stop_words: HashSet<String>,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer {
    /// Analyzer with [`DEFAULT_STOP_WORDS`]
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_STOP_WORDS.iter().copied())
    }

    /// Analyzer with a custom stop word list; words are matched lowercase
    pub fn with_stop_words<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Whether `word` is ignored as a stop word
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Paragraph, word and character counts
    pub fn analyze(&self, content: &str) -> TextStatistics {
        TextStatistics {
            paragraph_count: content
                .split("\n\n")
                .filter(|p| !p.trim().is_empty())
                .count(),
            word_count: content.split_whitespace().count(),
            character_count: content.len(),
        }
    }

    /// Whitespace separated tokens, punctuation kept
    pub fn words<'a>(&self, content: &'a str) -> Vec<&'a str> {
        content.split_whitespace().collect()
    }

    /// Lowercased words with punctuation and stop words removed
    pub fn significant_words(&self, content: &str) -> Vec<String> {
        let lowered = content.to_lowercase();
        let cleaned = PUNCTUATION.replace_all(&lowered, " ");
        cleaned
            .split_whitespace()
            .filter(|w| !self.is_stop_word(w))
            .map(str::to_string)
            .collect()
    }

    /// Runs of `n` consecutive words joined by a single space
    pub fn ngrams(&self, content: &str, n: usize) -> Vec<String> {
        let words = self.words(content);
        if n == 0 || words.len() < n {
            return Vec::new();
        }
        words.windows(n).map(|w| w.join(" ")).collect()
    }

    /// Collapse every whitespace run into one space
    pub fn normalize_whitespace(&self, text: &str) -> String {
        WHITESPACE.replace_all(text, " ").into_owned()
    }
}
