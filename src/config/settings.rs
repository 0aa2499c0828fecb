//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration and data.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the report database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "phishing_db.csv";

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/phishguard)
    pub config_dir: PathBuf,
    /// Data directory (~/.local/share/phishguard)
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve paths using XDG directories.
    pub fn discover() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "phishguard", "phishguard")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
            data_dir: project.data_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Get the default path of the report database.
    pub fn default_database_file(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Report database location; the XDG data directory when unset.
    pub database_file: Option<PathBuf>,
    /// Default output format (plain, json, csv).
    pub default_output_format: String,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            database_file: None,
            default_output_format: "plain".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, or defaults if absent.
    pub fn load(paths: &Paths) -> ConfigResult<Self> {
        let file = paths.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Resolve the report database path.
    ///
    /// An explicit override (CLI flag or environment) wins, then the
    /// settings file, then the XDG default.
    pub fn database_path(&self, explicit: Option<&Path>, paths: &Paths) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.database_file.clone())
            .unwrap_or_else(|| paths.default_database_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn paths_in(root: &Path) -> Paths {
        Paths {
            config_dir: root.join("config"),
            data_dir: root.join("data"),
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.database_file, None);
        assert_eq!(settings.default_output_format, "plain");
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let parsed: AppSettings = serde_json::from_str(r#"{"log_level":"debug"}"#).unwrap();
        assert_eq!(parsed.log_level, "debug");
        assert_eq!(parsed.default_output_format, "plain");
    }

    #[test]
    fn test_load_from_settings_file() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        fs::create_dir_all(&paths.config_dir).unwrap();
        fs::write(
            paths.settings_file(),
            r#"{"database_file":"/srv/phishguard/reports.csv","default_output_format":"json"}"#,
        )
        .unwrap();

        let settings = AppSettings::load(&paths).unwrap();
        assert_eq!(
            settings.database_file,
            Some(PathBuf::from("/srv/phishguard/reports.csv"))
        );
        assert_eq!(settings.default_output_format, "json");
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_missing_settings_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        assert_eq!(AppSettings::load(&paths).unwrap(), AppSettings::default());
    }

    #[test]
    fn test_invalid_settings_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("settings.json");
        fs::write(&file, "not json").unwrap();

        assert!(matches!(
            AppSettings::load_from(&file),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_database_path_resolution() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        let explicit = dir.path().join("flag.csv");
        let configured = dir.path().join("configured.csv");

        let mut settings = AppSettings::default();
        assert_eq!(
            settings.database_path(None, &paths),
            dir.path().join("data").join(DATABASE_FILE_NAME)
        );

        settings.database_file = Some(configured.clone());
        assert_eq!(settings.database_path(None, &paths), configured);
        assert_eq!(settings.database_path(Some(&explicit), &paths), explicit);
    }
}
