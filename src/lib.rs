// Library interface for tasker
// This allows integration tests and external code to use tasker's modules

pub mod cli;
pub mod cli_utils;
pub mod commands;
pub mod config;
pub mod config_discovery;
pub mod error;
pub mod logging;
pub mod merger;
pub mod runner;
pub mod tasks;

// Re-export commonly used types
pub use error::CommandExecutionError;
pub use runner::{CommandRunner, DryRunRunner, Invocation, ProcessRunner};
pub use tasks::{build, check, Task};
