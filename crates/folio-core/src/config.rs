//! Configuration management for Folio.
//!
//! This module provides configuration loading and defaults. Configuration
//! is stored in TOML format in a platform-appropriate location.

use crate::error::{FolioError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::fs;
use tracing::debug;

/// Main configuration structure for Folio.
///
/// ## Example Configuration File (folio.toml)
///
/// ```toml
/// [general]
/// max_results = 50
/// log_level = "info"
///
/// [ui]
/// page_size = 20
/// show_tags = true
/// show_dates = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Output and TUI settings
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// General configuration options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default maximum number of search results to print
    pub max_results: usize,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            max_results: 50,
            log_level: "info".to_string(),
        }
    }
}

/// Output and TUI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Number of results per page in the interactive view
    pub page_size: usize,

    /// Show tag lists in listings
    pub show_tags: bool,

    /// Show publish dates in listings
    pub show_dates: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            page_size: 10,
            show_tags: true,
            show_dates: true,
        }
    }
}

impl Config {
    /// Load configuration from the platform config path, or defaults when
    /// no file exists there.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_config_path()?)
    }

    /// Load configuration from a specific path.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one
    /// is an error, never a silent fallback.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), "Loading configuration");
        toml::from_str(&contents)
            .map_err(|e| FolioError::config(format!("{}: {}", path.display(), e)))
    }

    /// The platform-appropriate configuration file path.
    pub fn default_config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "folio")
            .map(|dirs| dirs.config_dir().join("folio.toml"))
            .ok_or_else(|| FolioError::config("no home directory available"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.max_results, 50);
        assert_eq!(config.ui.page_size, 10);
        assert!(config.ui.show_tags);
    }

    #[test]
    fn test_load_reads_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("folio.toml");
        fs::write(
            &config_path,
            "[general]\nmax_results = 25\n\n[ui]\nshow_dates = false\n",
        )
        .unwrap();

        let loaded = Config::load_from(&config_path).unwrap();
        assert_eq!(loaded.general.max_results, 25);
        assert!(!loaded.ui.show_dates);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("folio.toml");
        fs::write(&config_path, "[general\nmax_results = ???\n").unwrap();

        let result = Config::load_from(&config_path);
        assert!(matches!(result, Err(FolioError::ConfigError { .. })));
    }

    #[test]
    fn test_load_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.general.max_results, 50); // Default value
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        fs::write(&config_path, "[general]\nmax_results = 5\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.general.max_results, 5);
        assert_eq!(config.ui.page_size, 10); // Default value
    }
}
