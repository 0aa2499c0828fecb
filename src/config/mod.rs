//! Configuration management for PhishGuard.
//!
//! Provides XDG-compliant paths and the optional JSON settings file.

mod settings;

pub use settings::{AppSettings, Paths, DATABASE_FILE_NAME};
