// File: src/learning.rs
use crate::core::engine::AutocompleteEngine;
use crate::error::Result;
use std::io::BufRead;

/// Characters that end a token while training.
const SEPARATORS: [char; 2] = [' ', '.'];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainingOptions {
    /// Skip the empty tokens produced by trailing or adjacent separators
    /// instead of learning them as the empty word.
    pub ignore_empty_tokens: bool,
}

/// Counts from one training run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainingReport {
    pub learned: usize,
    pub skipped_empty: usize,
}

impl std::ops::AddAssign for TrainingReport {
    fn add_assign(&mut self, other: Self) {
        self.learned += other.learned;
        self.skipped_empty += other.skipped_empty;
    }
}

/// Splits a passage on spaces and periods and lowercases each token.
///
/// The text after the last separator is always a token, so a passage ending
/// in a separator (or containing two in a row) yields an empty token.
pub fn tokenize(passage: &str) -> Vec<String> {
    passage.split(SEPARATORS).map(|token| token.to_ascii_lowercase()).collect()
}

/// Prepares user-typed input for lookup.
pub fn normalize_fragment(fragment: &str) -> String {
    fragment.trim().to_ascii_lowercase()
}

/// Feeds free-form text into an [`AutocompleteEngine`].
pub struct LearningEngine {
    options: TrainingOptions,
}

impl LearningEngine {
    pub fn new(options: TrainingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> TrainingOptions {
        self.options
    }

    pub fn learn(&self, engine: &mut AutocompleteEngine, passage: &str) -> TrainingReport {
        let mut report = TrainingReport::default();
        for token in tokenize(passage) {
            if token.is_empty() && self.options.ignore_empty_tokens {
                report.skipped_empty += 1;
                continue;
            }
            engine.train(&token);
            report.learned += 1;
        }
        log::debug!(
            "trained {} token(s), skipped {} empty",
            report.learned,
            report.skipped_empty
        );
        report
    }

    /// Trains every line of `reader` as its own passage.
    pub fn learn_reader<R: BufRead>(
        &self,
        engine: &mut AutocompleteEngine,
        reader: R,
    ) -> Result<TrainingReport> {
        let mut report = TrainingReport::default();
        for line in reader.lines() {
            report += self.learn(engine, &line?);
        }
        Ok(report)
    }
}

impl Default for LearningEngine {
    fn default() -> Self {
        Self::new(TrainingOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn tokenize_splits_on_space_and_period() {
        assert_eq!(tokenize("The cat sat"), vec!["the", "cat", "sat"]);
        assert_eq!(tokenize("one.two"), vec!["one", "two"]);
    }

    #[test]
    fn tokenize_keeps_trailing_and_adjacent_empties() {
        assert_eq!(tokenize("Hi there."), vec!["hi", "there", ""]);
        assert_eq!(tokenize("end. Next"), vec!["end", "", "next"]);
        assert_eq!(tokenize(""), vec![""]);
    }

    #[test]
    fn tokenize_does_not_split_other_punctuation() {
        assert_eq!(tokenize("well,\tok"), vec!["well,\tok"]);
    }

    #[test]
    fn normalize_fragment_folds_case() {
        assert_eq!(normalize_fragment("  ThE "), "the");
    }

    #[test]
    fn learn_registers_empty_word_by_default() {
        let mut engine = AutocompleteEngine::new();
        let report = LearningEngine::default().learn(&mut engine, "Cat car. car");

        assert_eq!(report, TrainingReport { learned: 4, skipped_empty: 0 });
        let all = engine.find_words("");
        assert_eq!(all[0].word, "");
        assert_eq!(engine.trie().get("car").map(|c| c.confidence), Some(2));
    }

    #[test]
    fn learn_can_skip_empty_tokens() {
        let mut engine = AutocompleteEngine::new();
        let learner = LearningEngine::new(TrainingOptions { ignore_empty_tokens: true });
        let report = learner.learn(&mut engine, "Cat car. car.");

        assert_eq!(report, TrainingReport { learned: 3, skipped_empty: 2 });
        assert!(engine.trie().get("").is_none());
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn learn_reader_trains_each_line() {
        let mut engine = AutocompleteEngine::new();
        let learner = LearningEngine::new(TrainingOptions { ignore_empty_tokens: true });
        let text = "the quick fox\nthe lazy dog.\n";
        let report = learner.learn_reader(&mut engine, Cursor::new(text)).unwrap();

        assert_eq!(report.learned, 6);
        assert_eq!(report.skipped_empty, 1);
        assert_eq!(engine.suggest("the", None)[0].confidence, 2);
    }
}
