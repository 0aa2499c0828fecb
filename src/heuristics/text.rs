//! Free-text heuristic.
//!
//! Counts how many distinct phishing-indicator phrases occur in the text.
//! A phrase contributes at most once no matter how often it repeats, and
//! phrases nested inside other phrases ("account" in "update your account")
//! each count on their own.

use std::panic::{self, AssertUnwindSafe};

/// Indicator phrases, matched as lower-case substrings.
pub const PHISHING_PHRASES: [&str; 12] = [
    "urgent",
    "immediate",
    "verify",
    "account",
    "password",
    "click here",
    "limited time",
    "act now",
    "suspended",
    "update your account",
    "confirm your identity",
    "security alert",
];

/// Text is suspicious when strictly more than this many phrases are present.
pub const TEXT_MATCH_THRESHOLD: usize = 2;

/// Distinct phrases present in `text`, in [`PHISHING_PHRASES`] order.
pub fn matched_phrases(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    PHISHING_PHRASES
        .iter()
        .copied()
        .filter(|phrase| lowered.contains(phrase))
        .collect()
}

/// Classify free text as suspicious (`true`) or not.
///
/// Scoring runs inside a guarded scope: any fault while scanning is logged
/// and reported as "not suspicious" instead of reaching the caller.
pub fn classify_text(text: &str) -> bool {
    match panic::catch_unwind(AssertUnwindSafe(|| matched_phrases(text).len())) {
        Ok(count) => count > TEXT_MATCH_THRESHOLD,
        Err(_) => {
            tracing::warn!("text classification failed; treating input as not suspicious");
            false
        }
    }
}
