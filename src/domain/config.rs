//! Config - Application Configuration
//!
//! Stored as TOML in the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::page::PageRef;
use crate::error::Result;
use crate::i18n::Locale;

/// File name of the configuration inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// UI language
    pub locale: Locale,
    /// Page shown after startup
    pub start_page: PageRef,
    /// Base URL that relative card links are resolved against
    pub base_url: Option<String>,
    /// Directory with user page definitions, searched before embedded pages
    pub pages_dir: Option<PathBuf>,
    /// Logging options
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::system_default(),
            start_page: PageRef::named("home"),
            base_url: None,
            pages_dir: None,
            log: LogConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Also write a daily rolling log file into the data directory
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
        }
    }
}

impl AppConfig {
    /// Load the configuration from `dir`, falling back to defaults
    ///
    /// A missing file yields defaults. A broken file is reported and also
    /// yields defaults so the application still starts.
    pub fn load_or_default(dir: &Path) -> Self {
        match Self::load(dir) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("Failed to load {CONFIG_FILE}, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Load the configuration from `dir`; `None` if no file exists
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        Ok(Some(toml::from_str(&content)?))
    }

    /// Write the configuration to `dir`
    pub fn save(&self, dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(dir.join(CONFIG_FILE), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(AppConfig::load(dir.path()).expect("load"), None);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join(CONFIG_FILE),
            "start_page = \"workflow!one\"\nlocale = \"de\"\n\n[log]\nfile = false\n",
        )
        .expect("write config");

        let config = AppConfig::load(dir.path()).expect("load").expect("config");
        assert_eq!(config.start_page, PageRef::parse("workflow!one").expect("page ref"));
        assert_eq!(config.locale, Locale::DeDE);
        assert!(!config.log.file);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "start_page = [").expect("write config");

        assert!(AppConfig::load(dir.path()).is_err());
        let config = AppConfig::load_or_default(dir.path());
        assert_eq!(config.start_page, PageRef::named("home"));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            base_url: Some("https://pki.example.org/".to_string()),
            ..AppConfig::default()
        };

        config.save(dir.path()).expect("save");
        let loaded = AppConfig::load(dir.path()).expect("load").expect("config");
        assert_eq!(loaded, config);
    }
}
