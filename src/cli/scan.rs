//! Scan subcommand implementation.
//!
//! Handles `phishguard scan` for checking a URL and/or a piece of text.

use super::{Context, OutputFormat};
use crate::detector::Detector;
use crate::error::CliResult;
use crate::output;
use clap::Parser;

/// Scan a URL and/or text for phishing indicators.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// URL to check
    #[arg(short, long, default_value = "")]
    pub url: String,

    /// Free text to check (message body, email, etc.)
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// Output format for the verdict
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Exit with status 1 when the input is flagged
    #[arg(long)]
    pub fail_on_suspicious: bool,
}

impl ScanCommand {
    /// Execute the scan command, returning the process exit code.
    pub fn execute(&self, ctx: &Context) -> CliResult<i32> {
        if self.url.is_empty() && self.text.is_empty() && !ctx.quiet {
            output::print_warning("nothing to scan: pass --url and/or --text");
        }

        let store = ctx.open_store()?;
        let detector = Detector::new(&store);
        let outcome = detector.scan(&self.url, &self.text)?;

        output::print_outcome(&outcome, ctx.output_format(self.output))?;

        if ctx.verbose && outcome.suspicious && !ctx.quiet {
            output::print_info(&format!(
                "{} entries in {}",
                store.len(),
                store.path().display()
            ));
        }

        Ok(if outcome.suspicious && self.fail_on_suspicious {
            1
        } else {
            0
        })
    }
}
