// Copyright 2025 Cowboy AI, LLC.

//! Text statistics and plagiarism checks for submitted files
//!
//! Transport, file storage and word-cloud rendering live outside this crate;
//! these types only look at the text they are given.

mod plagiarism;
mod text_analyzer;

pub use plagiarism::{PlagiarismChecker, PlagiarismReport};
pub use text_analyzer::{TextAnalyzer, TextStatistics, DEFAULT_STOP_WORDS};
