use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::tasks::DEFAULT_TOOLCHAIN;

/// Complete tasker configuration (loaded from TOML file)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaskerConfig {
    #[serde(default)]
    pub toolchain: ToolchainConfig,

    #[serde(default)]
    pub workspace: WorkspaceConfig,

    #[serde(default)]
    pub log: LogConfig,

    /// Directory of the file this config was read from, used to resolve
    /// relative workspace paths. Not part of the file format.
    #[serde(skip)]
    pub source_dir: Option<PathBuf>,
}

/// External toolchain the tasks drive
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolchainConfig {
    /// Program name or path (e.g., "go", "/usr/local/go/bin/go")
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

/// Where the toolchain commands run
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WorkspaceConfig {
    /// Working directory, relative to the config file when not absolute
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LogConfig {
    /// Show child stdout and echo each command
    #[serde(default)]
    pub verbose: bool,
}

fn default_program() -> String {
    DEFAULT_TOOLCHAIN.to_string()
}

impl TaskerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let mut config: TaskerConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.source_dir = path
            .as_ref()
            .parent()
            .filter(|p| *p != Path::new(""))
            .map(Path::to_path_buf);

        Ok(config)
    }

    /// Workspace directory with relative paths resolved against the config file
    pub fn workspace_dir(&self) -> Option<PathBuf> {
        let dir = PathBuf::from(self.workspace.dir.as_ref()?);
        if dir.is_absolute() {
            return Some(dir);
        }
        match &self.source_dir {
            Some(base) => Some(base.join(dir)),
            None => Some(dir),
        }
    }
}
