use lazy_static::lazy_static;
use regex::Regex;

/// Upper bound on the keyword sequence derived from one item.
pub const MAX_KEYWORDS: usize = 10;

/// Common/filler terms excluded from extraction, including the domain
/// fillers "lost"/"found"/"item" which appear in nearly every report.
const STOP_WORDS: [&str; 42] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "found", "lost", "item", "has", "have", "is", "was", "were", "been", "be", "will", "would",
    "could", "should", "may", "might", "can", "this", "that", "these", "those", "i", "you", "he",
    "she", "it", "we", "they",
];

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").expect("valid keyword pattern");
}

/// Derives at most [`MAX_KEYWORDS`] significant tokens from free text, in
/// original order. No deduplication, no stemming. Deterministic for a given
/// input and never fails; empty input yields an empty sequence.
pub fn extract(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, "");

    cleaned
        .split_whitespace()
        .filter(|word| word.len() > 2 && !STOP_WORDS.contains(word))
        .map(str::to_owned)
        .take(MAX_KEYWORDS)
        .collect()
}
