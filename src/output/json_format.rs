//! JSON output formatting.

use crate::detector::ScanOutcome;
use crate::storage::Entry;
use std::io::{self, Write};

/// Write a scan outcome as pretty-printed JSON.
pub fn write_outcome_json<W: Write>(out: &mut W, outcome: &ScanOutcome) -> io::Result<()> {
    let json = serde_json::to_string_pretty(outcome).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}

/// Write entries as a JSON array; an empty log is `[]`.
pub fn write_entries_json<W: Write>(out: &mut W, entries: &[Entry]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(entries).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}
