//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `phishguard scan --url <URL> --text <TEXT>` - Scan input and log positives
//! - `phishguard list` - Show the report log
//! - `phishguard check-url <URL>` / `check-text <TEXT>` - Run one heuristic

mod check;
mod list;
mod scan;

pub use check::{CheckTextCommand, CheckUrlCommand};
pub use list::ListCommand;
pub use scan::ScanCommand;

use crate::config::{AppSettings, Paths};
use crate::error::{CliError, CliResult};
use crate::storage::EntryStore;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PhishGuard - heuristic phishing detection for URLs and text.
///
/// Flags suspicious URLs and messages with simple keyword and pattern
/// rules, and keeps a deduplicated CSV log of everything it has flagged.
#[derive(Parser, Debug)]
#[command(name = "phishguard")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Heuristic phishing detector with a deduplicated report log", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the report database (CSV)
    #[arg(long, global = true, value_name = "PATH", env = "PHISHGUARD_DB")]
    pub db: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a URL and/or text and record anything suspicious
    #[command(alias = "s")]
    Scan(ScanCommand),

    /// List every recorded entry
    #[command(alias = "database", alias = "ls")]
    List(ListCommand),

    /// Run only the URL heuristic (nothing is recorded)
    CheckUrl(CheckUrlCommand),

    /// Run only the text heuristic (nothing is recorded)
    CheckText(CheckTextCommand),
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// Settings and paths shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: AppSettings,
    /// XDG paths, when a home directory could be found.
    pub paths: Option<Paths>,
    /// Database path from `--db` / `PHISHGUARD_DB`.
    pub db: Option<PathBuf>,
    pub verbose: bool,
    pub quiet: bool,
}

impl Context {
    /// Resolve settings from the parsed arguments.
    ///
    /// The database path is resolved later, by the commands that open the store.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let (settings, paths) = match &cli.config {
            Some(path) => (AppSettings::load_from(path)?, Paths::discover().ok()),
            None => {
                let paths = Paths::discover()?;
                (AppSettings::load(&paths)?, Some(paths))
            }
        };

        Ok(Self {
            settings,
            paths,
            db: cli.db.clone(),
            verbose: cli.verbose,
            quiet: cli.quiet,
        })
    }

    /// Resolve the report database path.
    pub fn database_path(&self) -> CliResult<PathBuf> {
        match &self.paths {
            Some(paths) => Ok(self.settings.database_path(self.db.as_deref(), paths)),
            None => self
                .db
                .clone()
                .or_else(|| self.settings.database_file.clone())
                .ok_or_else(|| {
                    CliError::Other(
                        "no report database path: pass --db or set database_file".to_string(),
                    )
                }),
        }
    }

    /// Open the report store.
    pub fn open_store(&self) -> CliResult<EntryStore> {
        let path = self.database_path()?;
        tracing::debug!(database = %path.display(), "opening report database");
        Ok(EntryStore::open(path)?)
    }

    /// Pick the explicit format, else the configured default.
    pub fn output_format(&self, explicit: Option<OutputFormat>) -> OutputFormat {
        explicit.unwrap_or_else(|| {
            self.settings
                .default_output_format
                .parse()
                .unwrap_or_default()
        })
    }
}

impl Cli {
    /// Dispatch the selected subcommand. Returns the process exit code.
    pub fn run(&self) -> CliResult<i32> {
        let ctx = Context::from_cli(self)?;

        match &self.command {
            Commands::Scan(cmd) => cmd.execute(&ctx),
            Commands::List(cmd) => cmd.execute(&ctx).map(|()| 0),
            Commands::CheckUrl(cmd) => cmd.execute(&ctx).map(|()| 0),
            Commands::CheckText(cmd) => cmd.execute(&ctx).map(|()| 0),
        }
    }
}
