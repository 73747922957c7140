//! Configuration merger: CLI args > Env vars > Config file > Defaults
//!
//! CLI arguments and environment variables are both resolved by clap before
//! they reach this module, so only the file and default layers are merged here.

use std::path::PathBuf;

use crate::cli::CommonConfigArgs;
use crate::config::TaskerConfig;

/// Settings a task run needs after all sources are merged
#[derive(Debug, Clone, PartialEq)]
pub struct MergedTaskConfig {
    pub toolchain: String,
    pub working_dir: Option<PathBuf>,
    pub verbose: bool,
    /// Config file the settings were read from, if any
    pub config_path: Option<PathBuf>,
}

impl MergedTaskConfig {
    pub fn merge(args: &CommonConfigArgs, file_config: Option<(PathBuf, TaskerConfig)>) -> Self {
        let (config_path, file) = match file_config {
            Some((path, config)) => (Some(path), config),
            None => (None, TaskerConfig::default()),
        };

        Self {
            toolchain: args
                .toolchain
                .clone()
                .unwrap_or_else(|| file.toolchain.program.clone()),
            working_dir: args
                .dir
                .as_ref()
                .map(PathBuf::from)
                .or_else(|| file.workspace_dir()),
            verbose: args.verbose.unwrap_or(file.log.verbose),
            config_path,
        }
    }
}
