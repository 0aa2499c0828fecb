//! CSV output formatting.

use crate::detector::ScanOutcome;
use crate::storage::{Entry, CSV_HEADER};
use std::io::{self, Write};

/// Write a scan outcome as a single CSV row with a header.
pub fn write_outcome_csv<W: Write>(out: &mut W, outcome: &ScanOutcome) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["suspicious", "reason", "subject", "message", "recorded"])?;
    wtr.write_record([
        outcome.suspicious.to_string().as_str(),
        &outcome.reason,
        &outcome.subject,
        &outcome.message,
        outcome.recorded.to_string().as_str(),
    ])?;

    wtr.flush()?;
    Ok(())
}

/// Write entries in the same layout as the report database.
pub fn write_entries_csv<W: Write>(out: &mut W, entries: &[Entry]) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(CSV_HEADER)?;
    for entry in entries {
        wtr.write_record([&entry.subject, &entry.reason])?;
    }

    wtr.flush()?;
    Ok(())
}
