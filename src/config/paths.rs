//! Platform-specific configuration paths.

use crate::constants::{APP_NAME, CONFIG_FILE_NAME, env};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Get the configuration directory for the current platform.
///
/// - Linux: `~/.config/birdnet-insights/`
/// - macOS: `~/Library/Application Support/birdnet-insights/`
/// - Windows: `%APPDATA%\birdnet-insights\`
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the config file.
///
/// A non-empty `BIRDNET_INSIGHTS_CONFIG` takes precedence over the platform
/// config directory.
pub fn config_file_path() -> Result<PathBuf> {
    resolve_config_file(std::env::var_os(env::CONFIG_FILE).map(PathBuf::from))
}

fn resolve_config_file(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Ok(config_dir()?.join(CONFIG_FILE_NAME)),
    }
}
