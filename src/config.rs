//! # Configuration Module
//!
//! Runtime settings for ChatterTunes. Nothing is persisted between runs; the
//! configuration file only tunes behavior and is entirely optional.
//!
//! ## Location
//!
//! Unless `--config` is given, the file is looked up in the platform config
//! directory:
//! - Linux: `~/.config/chattertunes/config.json`
//! - macOS: `~/Library/Application Support/chattertunes/config.json`
//! - Windows: `%APPDATA%\chattertunes\config.json`
//!
//! ## Format
//!
//! ```json
//! { "history_capacity": 5, "show_banner": true }
//! ```
//!
//! Missing keys fall back to their defaults.

use crate::user::DEFAULT_HISTORY_CAPACITY;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the platform-appropriate config file path, if the platform has a
/// config directory at all.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chattertunes").join("config.json"))
}

/// Configuration for runtime behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// How many songs each user's recent history keeps, clamped to 1..=5
    pub history_capacity: usize,
    /// Print the welcome banner before each main menu
    pub show_banner: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            show_banner: true,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist and parse. Without one
    /// the default location is tried and silently skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a file that should be read cannot be read or is
    /// not valid JSON.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file at {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Create configuration with an explicit history capacity
    #[must_use]
    pub fn with_history_capacity(history_capacity: usize) -> Self {
        Self {
            history_capacity,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_values() {
        let config = RuntimeConfig::default();
        assert_eq!(config.history_capacity, 5);
        assert!(config.show_banner);
    }

    #[test]
    fn test_default_path_structure() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("chattertunes/config.json"));
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "history_capacity": 3, "show_banner": false }}"#).unwrap();

        let config = RuntimeConfig::load(Some(file.path())).expect("config should load");
        assert_eq!(config.history_capacity, 3);
        assert!(!config.show_banner);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "show_banner": false }}"#).unwrap();

        let config = RuntimeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RuntimeConfig::load(Some(dir.path().join("nope.json").as_path()));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "not json").unwrap();
        assert!(RuntimeConfig::from_file(file.path()).is_err());
    }
}
