use crate::core::ranking::rank;
use crate::core::trie::PrefixTrie;
use crate::core::types::Candidate;

/// Learns words and answers prefix queries against them.
///
/// The engine performs no normalization: callers are expected to hand it
/// tokenized, case-folded words and fragments (see [`crate::learning`]).
/// It is not synchronized; wrap it in a single lock if it must be shared.
#[derive(Debug, Clone, Default)]
pub struct AutocompleteEngine {
    trie: PrefixTrie,
}

impl AutocompleteEngine {
    pub fn new() -> Self {
        Self { trie: PrefixTrie::new() }
    }

    pub fn train(&mut self, word: &str) {
        let confidence = self.trie.insert(word);
        log::trace!("learned {:?} (confidence {})", word, confidence);
    }

    /// Every learned word starting with `fragment`, in trie order (unranked).
    pub fn find_words(&self, fragment: &str) -> Vec<Candidate> {
        let found = self.trie.lookup(fragment);
        log::debug!("{:?} matched {} word(s)", fragment, found.len());
        found
    }

    /// Ranks `candidates` against this engine's highest confidence.
    pub fn rank(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        rank(candidates, self.trie.max_confidence())
    }

    /// Ranked completions for `fragment`, truncated to `limit` when given.
    pub fn suggest(&self, fragment: &str, limit: Option<usize>) -> Vec<Candidate> {
        let mut ranked = self.rank(self.find_words(fragment));
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Every learned word, ranked.
    pub fn dump(&self) -> Vec<Candidate> {
        self.suggest("", None)
    }

    pub fn max_confidence(&self) -> u64 {
        self.trie.max_confidence()
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }
}
