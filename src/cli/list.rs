//! List subcommand implementation.
//!
//! Handles `phishguard list` for showing the report log.

use super::{Context, OutputFormat};
use crate::error::CliResult;
use crate::output;
use clap::Parser;

/// Show every recorded entry, oldest first.
#[derive(Parser, Debug)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let store = ctx.open_store()?;
        // Pick up edits made to the file since the store was opened.
        let entries = store.reload()?;

        output::print_entries(&entries, ctx.output_format(self.output))?;
        Ok(())
    }
}
