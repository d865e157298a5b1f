// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A learned word and the number of times it has been trained.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub word: String,
    /// Training count. Starts at 1 and only ever grows.
    pub confidence: u64,
}

impl Candidate {
    /// A first sighting of `word`.
    pub fn new(word: &str) -> Self {
        Self::with_confidence(word, 1)
    }

    pub fn with_confidence(word: &str, confidence: u64) -> Self {
        Self {
            word: word.to_string(),
            confidence,
        }
    }

    pub(crate) fn increment(&mut self) {
        self.confidence += 1;
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ({})", self.word, self.confidence)
    }
}
