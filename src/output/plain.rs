//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::detector::ScanOutcome;
use crate::storage::Entry;
use console::style;
use std::io::{self, Write};

const RULE: &str = "───────────────────────────────────────────────────────────────";

/// Write a scan outcome as a short verdict block.
pub fn write_outcome_plain<W: Write>(out: &mut W, outcome: &ScanOutcome) -> io::Result<()> {
    writeln!(out)?;
    if outcome.suspicious {
        writeln!(out, "  {} {}", style("SUSPICIOUS").red().bold(), outcome.reason)?;
        writeln!(out, "  {} {}", style("Subject:").bold(), outcome.subject)?;
        let note = if outcome.recorded {
            "added to report log"
        } else {
            "already in report log"
        };
        writeln!(out, "  {} {}", style("Log:").bold(), style(note).dim())?;
    } else {
        writeln!(out, "  {} {}", style("CLEAN").green().bold(), outcome.reason)?;
    }
    writeln!(out, "  {}", style(&outcome.message).dim())?;
    writeln!(out)?;

    Ok(())
}

/// Write the report log as a numbered table.
pub fn write_entries_plain<W: Write>(out: &mut W, entries: &[Entry]) -> io::Result<()> {
    writeln!(out)?;

    if entries.is_empty() {
        writeln!(out, "  {}", style("No reported entries.").dim())?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "  {}", style(RULE).dim())?;
    writeln!(
        out,
        "  {:>4}  {:<44}  {}",
        style("#").bold(),
        style("URL / TEXT").bold(),
        style("DESCRIPTION").bold()
    )?;
    writeln!(out, "  {}", style(RULE).dim())?;

    for (index, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "  {:>4}  {:<44}  {}",
            index + 1,
            truncate_string(&single_line(&entry.subject), 44),
            entry.reason
        )?;
    }

    writeln!(out, "  {}", style(RULE).dim())?;
    writeln!(out, "  {} entries", style(entries.len()).bold())?;
    writeln!(out)?;

    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Collapse line breaks so multi-line text fits one table row.
fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate a string to a maximum number of characters, adding ellipsis if truncated.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
