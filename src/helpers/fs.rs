//! File System Utilities
//!
//! Platform directories for configuration, user pages and log files.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("org", "console-ui", "console-ui").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/console-ui/` or `$XDG_CONFIG_HOME/console-ui/`
/// - **macOS**: `~/Library/Application Support/org.console-ui.console-ui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\console-ui\console-ui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the data directory (log files)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/console-ui/`
/// - **macOS**: `~/Library/Application Support/org.console-ui.console-ui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\console-ui\console-ui\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

/// Default directory for user page definitions: `<config_dir>/pages`
pub fn default_pages_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("pages"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let root = tempfile::tempdir().expect("tempdir");
        let nested = root.path().join("a").join("b");

        let created = ensure_dir(&nested).expect("create");
        assert_eq!(created, nested);
        assert!(nested.is_dir());

        // Existing directories are fine too
        ensure_dir(&nested).expect("exists");
    }
}
