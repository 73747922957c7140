use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};

/// Tasker - build and check tasks for module-based toolchains
///
/// Each task downloads module dependencies first and stops at the first
/// command that fails.
#[derive(Parser, Debug)]
#[command(name = "tasker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build and check task runner", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Configuration arguments shared across commands
#[derive(Args, Debug, Clone, Default)]
pub struct CommonConfigArgs {
    /// Config file path
    #[arg(short = 'c', long, env = "TASKER_CONFIG")]
    pub config: Option<String>,

    /// Toolchain program (default: go)
    #[arg(long, env = "TASKER_TOOLCHAIN")]
    pub toolchain: Option<String>,

    /// Working directory for toolchain commands
    #[arg(short = 'C', long, env = "TASKER_DIR")]
    pub dir: Option<String>,

    /// Show command output and echo each command (`--verbose=false` to turn off)
    #[arg(
        short = 'v',
        long,
        env = "TASKER_VERBOSE",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub verbose: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download module dependencies and install all packages
    Build(TaskArgs),

    /// Download module dependencies and run all tests
    Check(TaskArgs),

    /// List available tasks
    List(ListArgs),

    /// Check toolchain and configuration
    Doctor(DoctorArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TaskArgs {
    #[command(flatten)]
    pub common: CommonConfigArgs,

    /// Print the commands without running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub common: CommonConfigArgs,

    /// Only show this task
    pub task: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DoctorArgs {
    #[command(flatten)]
    pub common: CommonConfigArgs,
}
