//! Scan orchestration.
//!
//! Runs the URL heuristic first and the text heuristic only when the URL is
//! absent or clean. A positive result is recorded through an [`EntrySink`]
//! before the outcome is returned.

use crate::error::StorageResult;
use crate::heuristics::{classify_text, classify_url};
use crate::storage::EntryStore;
use serde::Serialize;
use std::fmt;

/// Reason reported when neither heuristic fires.
pub const NO_THREATS_REASON: &str = "No threats detected";

/// Message reported for clean input.
pub const SAFE_MESSAGE: &str = "Content appears safe";

/// Why an input was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The URL heuristic fired.
    SuspiciousUrl,
    /// The text heuristic fired.
    PhishingText,
}

impl Reason {
    /// The reason string as stored and reported.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuspiciousUrl => "Suspicious URL pattern detected",
            Self::PhishingText => "Phishing text pattern detected",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination for positive detections.
///
/// Implementations own deduplication: the detector calls
/// [`append_if_new`](EntrySink::append_if_new) once per positive scan even
/// when the pair was seen before.
pub trait EntrySink: Send + Sync {
    /// Record `(subject, reason)`, returning `true` if it was new.
    fn append_if_new(&self, subject: &str, reason: &str) -> StorageResult<bool>;
}

impl EntrySink for EntryStore {
    fn append_if_new(&self, subject: &str, reason: &str) -> StorageResult<bool> {
        EntryStore::append_if_new(self, subject, reason)
    }
}

impl<S: EntrySink + ?Sized> EntrySink for &S {
    fn append_if_new(&self, subject: &str, reason: &str) -> StorageResult<bool> {
        (**self).append_if_new(subject, reason)
    }
}

impl<S: EntrySink + ?Sized> EntrySink for std::sync::Arc<S> {
    fn append_if_new(&self, subject: &str, reason: &str) -> StorageResult<bool> {
        (**self).append_if_new(subject, reason)
    }
}

/// Result of scanning one URL/text pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    /// Whether either heuristic fired.
    pub suspicious: bool,
    /// Reason string, or [`NO_THREATS_REASON`].
    pub reason: String,
    /// The input that fired; empty when clean.
    pub subject: String,
    /// One-line summary for display.
    pub message: String,
    /// Whether this scan added a new row to the report log.
    pub recorded: bool,
}

impl ScanOutcome {
    fn flagged(reason: Reason, subject: &str, recorded: bool) -> Self {
        Self {
            suspicious: true,
            reason: reason.to_string(),
            subject: subject.to_string(),
            message: format!("Suspicious content detected: {}", subject),
            recorded,
        }
    }

    fn clean() -> Self {
        Self {
            suspicious: false,
            reason: NO_THREATS_REASON.to_string(),
            subject: String::new(),
            message: SAFE_MESSAGE.to_string(),
            recorded: false,
        }
    }
}

/// Decide which heuristic, if any, flags the input. First match wins.
pub fn evaluate<'a>(url: &'a str, text: &'a str) -> Option<(Reason, &'a str)> {
    if !url.is_empty() && classify_url(url) {
        Some((Reason::SuspiciousUrl, url))
    } else if !text.is_empty() && classify_text(text) {
        Some((Reason::PhishingText, text))
    } else {
        None
    }
}

/// Combines the heuristics with an injected report sink.
pub struct Detector<S> {
    sink: S,
}

impl<S: EntrySink> Detector<S> {
    /// Create a detector that records positives into `sink`.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// The sink positives are recorded into.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Scan a URL and a piece of text; either may be empty.
    ///
    /// Fails only when recording a positive result fails.
    pub fn scan(&self, url: &str, text: &str) -> StorageResult<ScanOutcome> {
        let Some((reason, subject)) = evaluate(url, text) else {
            tracing::debug!("no threats detected");
            return Ok(ScanOutcome::clean());
        };

        let recorded = self.sink.append_if_new(subject, reason.as_str())?;
        if recorded {
            tracing::info!(%reason, subject, "recorded new suspicious entry");
        } else {
            tracing::debug!(%reason, subject, "suspicious entry already recorded");
        }

        Ok(ScanOutcome::flagged(reason, subject, recorded))
    }
}
