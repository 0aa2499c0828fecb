//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of scan
//! outcomes and the report log.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::{write_entries_csv, write_outcome_csv};
pub use json_format::{write_entries_json, write_outcome_json};
pub use plain::{print_error, print_info, print_warning, write_entries_plain, write_outcome_plain};

use crate::cli::OutputFormat;
use crate::detector::ScanOutcome;
use crate::storage::Entry;
use std::io::{self, Write};

/// Format a scan outcome into `out`.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &ScanOutcome, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => write_outcome_plain(out, outcome),
        OutputFormat::Json => write_outcome_json(out, outcome),
        OutputFormat::Csv => write_outcome_csv(out, outcome),
    }
}

/// Format the report log into `out`.
pub fn write_entries<W: Write>(out: &mut W, entries: &[Entry], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => write_entries_plain(out, entries),
        OutputFormat::Json => write_entries_json(out, entries),
        OutputFormat::Csv => write_entries_csv(out, entries),
    }
}

/// Print a scan outcome to stdout.
pub fn print_outcome(outcome: &ScanOutcome, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    write_outcome(&mut stdout.lock(), outcome, format)
}

/// Print the report log to stdout.
pub fn print_entries(entries: &[Entry], format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    write_entries(&mut stdout.lock(), entries, format)
}
