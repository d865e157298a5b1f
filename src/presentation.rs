use crate::core::types::Candidate;
use crate::error::Result;
use serde::Serialize;

pub const NO_MATCH: &str = "No words trained to match the fragment.";

#[derive(Serialize)]
struct Suggestions<'a> {
    fragment: &'a str,
    candidates: &'a [Candidate],
}

/// `"car" (2), "cat" (1)`
pub fn format_candidates(candidates: &[Candidate]) -> String {
    candidates
        .iter()
        .map(Candidate::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders ranked completions for a fragment, or the no-match message.
pub fn format_suggestions(fragment: &str, candidates: &[Candidate]) -> String {
    if candidates.is_empty() {
        return NO_MATCH.to_string();
    }
    format!("\"{}\" --> {}", fragment, format_candidates(candidates))
}

pub fn to_json(fragment: &str, candidates: &[Candidate]) -> Result<String> {
    Ok(serde_json::to_string(&Suggestions { fragment, candidates })?)
}
