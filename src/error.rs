//! Error types for PhishGuard.
//!
//! Uses `thiserror` for ergonomic error definitions. Classification itself
//! never fails; only the report store, configuration, and CLI layers do.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the report store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to prepare storage directory: {0}")]
    DirectoryError(String),

    #[error("Failed to save report database: {0}")]
    SaveFailed(String),

    #[error("Failed to load report database: {0}")]
    LoadFailed(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised while resolving paths or reading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine a home directory for configuration")]
    DirectoryNotFound,

    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("Invalid settings format: {0}")]
    InvalidFormat(String),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for CLI command handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
