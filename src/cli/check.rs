//! Single-heuristic diagnostic subcommands.
//!
//! `check-url` and `check-text` report which rule fired without touching
//! the report log.

use super::Context;
use crate::error::CliResult;
use crate::heuristics::{classify_text, matched_phrases, matched_url_signal, TEXT_MATCH_THRESHOLD};
use clap::Parser;
use console::style;

/// Run only the URL heuristic.
#[derive(Parser, Debug)]
pub struct CheckUrlCommand {
    /// URL to check
    #[arg(value_name = "URL")]
    pub url: String,
}

impl CheckUrlCommand {
    /// Execute the check-url command.
    pub fn execute(&self, _ctx: &Context) -> CliResult<()> {
        match matched_url_signal(&self.url) {
            Some(signal) => println!("{} {}", style("suspicious:").red().bold(), signal),
            None => println!("{}", style("clean").green().bold()),
        }
        Ok(())
    }
}

/// Run only the text heuristic.
#[derive(Parser, Debug)]
pub struct CheckTextCommand {
    /// Text to check
    #[arg(value_name = "TEXT")]
    pub text: String,
}

impl CheckTextCommand {
    /// Execute the check-text command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let phrases = matched_phrases(&self.text);
        let verdict = if classify_text(&self.text) {
            style("suspicious").red().bold()
        } else {
            style("clean").green().bold()
        };

        println!(
            "{} ({} phrases matched, flagged above {})",
            verdict,
            phrases.len(),
            TEXT_MATCH_THRESHOLD
        );
        if !ctx.quiet {
            for phrase in phrases {
                println!("  {} {}", style("•").dim(), phrase);
            }
        }
        Ok(())
    }
}
