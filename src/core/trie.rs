// --- File: src/core/trie.rs
use crate::core::types::Candidate;
use std::collections::BTreeMap;

const ROOT: usize = 0;

#[derive(Debug, Clone)]
struct TrieNode {
    /// Ordered so that traversal visits children in ascending key order.
    children: BTreeMap<char, usize>,
    terminal: Option<Candidate>,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: BTreeMap::new(), terminal: None }
    }
}

/// An in-memory prefix tree of learned words with per-word training counts.
///
/// Nodes live in a flat arena and refer to their children by index; the root
/// is always slot 0. Nothing is ever removed, so indices stay valid for the
/// lifetime of the trie.
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    nodes: Vec<TrieNode>,
    max_confidence: u64,
    word_count: usize,
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()], max_confidence: 0, word_count: 0 }
    }

    /// Records one sighting of `word` and returns its confidence afterwards.
    ///
    /// Creates one node per missing path segment. The empty word lands on the
    /// root. O(k log b) where k is the word length and b the branching factor.
    pub fn insert(&mut self, word: &str) -> u64 {
        let mut node_idx = ROOT;
        for c in word.chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&c) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(c, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
        }

        let node = &mut self.nodes[node_idx];
        let confidence = match node.terminal.as_mut() {
            Some(candidate) => {
                candidate.increment();
                candidate.confidence
            }
            None => {
                node.terminal = Some(Candidate::new(word));
                self.word_count += 1;
                1
            }
        };

        if confidence > self.max_confidence {
            self.max_confidence = confidence;
        }
        confidence
    }

    /// Returns every learned word starting with `fragment`, in pre-order:
    /// the word ending at the fragment itself first, then each child subtree
    /// in ascending character order.
    pub fn lookup(&self, fragment: &str) -> Vec<Candidate> {
        let Some(start) = self.find_node(fragment) else {
            return vec![];
        };

        let mut found = Vec::new();
        let mut stack = vec![start];
        while let Some(node_idx) = stack.pop() {
            let node = &self.nodes[node_idx];
            debug_assert!(
                node_idx == ROOT || node.terminal.is_some() || !node.children.is_empty(),
                "trie node {node_idx} has neither children nor a word"
            );
            if let Some(candidate) = &node.terminal {
                found.push(candidate.clone());
            }
            // Reversed so the smallest key is popped first.
            stack.extend(node.children.values().rev().copied());
        }
        found
    }

    /// Exact-match lookup.
    pub fn get(&self, word: &str) -> Option<&Candidate> {
        self.find_node(word).and_then(|idx| self.nodes[idx].terminal.as_ref())
    }

    /// Highest confidence of any learned word, 0 when nothing has been learned.
    pub fn max_confidence(&self) -> u64 {
        self.max_confidence
    }

    /// Number of distinct words learned.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn find_node(&self, key: &str) -> Option<usize> {
        let mut node_idx = ROOT;
        for c in key.chars() {
            node_idx = *self.nodes[node_idx].children.get(&c)?;
        }
        Some(node_idx)
    }
}
