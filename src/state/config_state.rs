//! ConfigState - Application Configuration State

use std::path::PathBuf;

use crate::domain::config::AppConfig;

/// State for application configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration
    pub config: AppConfig,
    /// Directory the configuration was loaded from, if any
    pub dir: Option<PathBuf>,
}

impl ConfigState {
    pub fn new(config: AppConfig, dir: Option<PathBuf>) -> Self {
        Self { config, dir }
    }

    /// Persist the configuration, if a config directory is known
    pub fn save(&self) {
        let Some(dir) = &self.dir else {
            return;
        };
        if let Err(e) = self.config.save(dir) {
            tracing::warn!("Failed to save configuration: {e}");
        }
    }
}
