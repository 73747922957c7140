use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::TaskerConfig;

/// Project config file name searched for while walking up the tree
pub const CONFIG_FILE_NAME: &str = "tasker.toml";

/// Discovers tasker configuration by traversing up the directory tree
pub fn discover_config(start_dir: &Path) -> Result<Option<PathBuf>> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Ok(Some(config_path));
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    // Fallback to global config
    if let Some(global_config) = global_config_path() {
        if global_config.exists() {
            return Ok(Some(global_config));
        }
    }

    Ok(None)
}

/// `~/.config/tasker/config.toml`
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/tasker/config.toml"))
}

/// Loads configuration with auto-discovery support
///
/// If `explicit_path` is provided, loads config from that path.
/// Otherwise, auto-discovers config by traversing up directory tree from cwd.
///
/// Returns the path alongside the config so callers can report it.
/// Returns Ok(None) if no config is found (neither explicit nor discovered).
pub fn load_config_with_discovery(
    explicit_path: Option<&str>,
) -> Result<Option<(PathBuf, TaskerConfig)>> {
    if let Some(config_path) = explicit_path {
        let path = PathBuf::from(config_path);
        let config = TaskerConfig::from_file(&path)?;
        return Ok(Some((path, config)));
    }

    let current_dir =
        std::env::current_dir().context("Failed to get current directory for config discovery")?;

    match discover_config(&current_dir)? {
        Some(path) => {
            let config = TaskerConfig::from_file(&path)?;
            Ok(Some((path, config)))
        }
        None => Ok(None),
    }
}
