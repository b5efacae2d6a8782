//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{KalError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".kal.yml";

/// Find the default config file under `project_root`, if it exists.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(DEFAULT_CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Parse configuration from YAML (or JSON) text.
///
/// `path` is only used for error messages.
pub fn parse_config(content: &str, path: &Path) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(content).map_err(|e| KalError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load configuration from an explicit file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file does not exist and
/// `ConfigParseError` if it is not a valid config document.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(KalError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    tracing::debug!("Loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Load the config at `explicit`, or the default file under `project_root`,
/// or fall back to an empty config.
pub fn load_config_or_default(explicit: Option<&Path>, project_root: &Path) -> Result<Config> {
    match explicit {
        Some(path) => load_config(path),
        None => match find_config(project_root) {
            Some(path) => load_config(&path),
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}
