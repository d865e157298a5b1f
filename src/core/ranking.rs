// File: src/core/ranking.rs
use crate::core::types::Candidate;
use std::cmp::Reverse;

/// Orders candidates by descending confidence, keeping the incoming order
/// among candidates that share a confidence.
///
/// `max_confidence` is the highest level to sweep from (normally the trie's
/// running maximum). Candidates are bucketed by level in one pass and the
/// buckets are drained from the top down. When the level range is much wider
/// than the input a stable sort produces the same order without allocating
/// empty buckets. Candidates above `max_confidence` are kept, never dropped.
pub fn rank(candidates: Vec<Candidate>, max_confidence: u64) -> Vec<Candidate> {
    if candidates.len() < 2 {
        return candidates;
    }

    let highest = candidates.iter().map(|c| c.confidence).max().unwrap_or(0);
    let ceiling = highest.max(max_confidence);

    if ceiling > candidates.len() as u64 {
        let mut ranked = candidates;
        ranked.sort_by_key(|c| Reverse(c.confidence));
        return ranked;
    }

    // ceiling <= len, so this cast cannot truncate.
    let levels = ceiling as usize;
    let mut buckets: Vec<Vec<Candidate>> = vec![Vec::new(); levels + 1];
    for candidate in candidates {
        let level = candidate.confidence as usize;
        buckets[level].push(candidate);
    }
    buckets.into_iter().rev().flatten().collect()
}
