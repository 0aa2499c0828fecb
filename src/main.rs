use anyhow::Context as _;
use clap::Parser;
use phishguard::cli::Cli;
use phishguard::config::{AppSettings, Paths};
use phishguard::output;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let code = cli.run().context("command failed")?;
    Ok(u8::try_from(code).unwrap_or(1))
}

/// `RUST_LOG` wins; otherwise the CLI flags, then the settings file.
fn init_tracing(cli: &Cli) {
    let fallback = if cli.verbose {
        "debug".to_string()
    } else if cli.quiet {
        "error".to_string()
    } else {
        configured_log_level(cli).unwrap_or_else(|| "warn".to_string())
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn configured_log_level(cli: &Cli) -> Option<String> {
    let settings = match &cli.config {
        Some(path) => AppSettings::load_from(path).ok()?,
        None => AppSettings::load(&Paths::discover().ok()?).ok()?,
    };
    Some(settings.log_level)
}
