//! Configuration types.
//!
//! Configuration lives in `config.toml` under the tipple config directory.
//! A missing file is not an error: defaults apply.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime configuration loaded from config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog service settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Catalog service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, e.g. "http://localhost:5000/api/v1".
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api/v1".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Text shown when a search returns no recipes.
    pub placeholder: String,

    /// Hint line shown above the result cards.
    pub hint: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: "No recipes found".to_string(),
            hint: "Click on a card to view".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location.
    ///
    /// Tries paths in order:
    /// 1. XDG-style: ~/.config/tipple/config.toml (common for CLI tools)
    /// 2. Platform config dir: e.g. ~/Library/Application Support/tipple/config.toml
    ///
    /// Returns defaults when neither exists.
    pub fn load() -> Result<Self, ConfigError> {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Find the config.toml that exists on this machine, if any.
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(home) = dirs::home_dir() {
        let xdg_path = home.join(".config").join("tipple").join("config.toml");
        if xdg_path.exists() {
            return Some(xdg_path);
        }
    }

    let path = dirs::config_dir()?.join("tipple").join("config.toml");
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.base_url, "http://localhost:5000/api/v1");
        assert_eq!(config.catalog.timeout_secs, 10);
        assert_eq!(config.display.placeholder, "No recipes found");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [catalog]
            base_url = "http://bar.example/api/v1"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.base_url, "http://bar.example/api/v1");
        assert_eq!(config.catalog.timeout_secs, 10);
        assert_eq!(config.display.hint, "Click on a card to view");
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = AppConfig::from_toml_str("[catalog\nbase_url = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[catalog]\nbase_url = \"http://files.example\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.catalog.base_url, "http://files.example");
    }

    #[test]
    fn test_load_from_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
