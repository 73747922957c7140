//! Task runner entry points
//!
//! `build` and `check` are each a fixed, ordered pair of toolchain commands.
//! The first failing command aborts the task; later steps never run.

use std::time::Instant;

use tracing::{error, info};

use crate::error::CommandExecutionError;
use crate::runner::{CommandRunner, Invocation};

/// Toolchain program used when nothing else is configured
pub const DEFAULT_TOOLCHAIN: &str = "go";

/// Named tasks exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Build,
    Check,
}

impl Task {
    pub const ALL: [Task; 2] = [Task::Build, Task::Check];

    pub fn name(self) -> &'static str {
        match self {
            Task::Build => "build",
            Task::Check => "check",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Task::Build => "Download module dependencies and install all packages",
            Task::Check => "Download module dependencies and run all tests",
        }
    }

    /// Ordered steps this task runs with the given toolchain program
    pub fn steps(self, toolchain: &str) -> Vec<Invocation> {
        let second = match self {
            Task::Build => Invocation::new(toolchain, ["install", "./..."]),
            Task::Check => Invocation::new(toolchain, ["test", "./..."]),
        };
        vec![download(toolchain), second]
    }

    /// Run every step in order, stopping at the first failure
    pub fn run<R: CommandRunner>(
        self,
        runner: &R,
        toolchain: &str,
    ) -> Result<(), CommandExecutionError> {
        let start = Instant::now();
        let steps = self.steps(toolchain);
        let total = steps.len();

        for (index, step) in steps.iter().enumerate() {
            info!(
                task = self.name(),
                step = %format!("{}/{}", index + 1, total),
                command = %step,
                "running step"
            );

            if let Err(e) = runner.run(step) {
                error!(
                    task = self.name(),
                    command = e.command(),
                    error = %e,
                    "step failed, aborting task"
                );
                return Err(e);
            }
        }

        info!(
            task = self.name(),
            duration_ms = start.elapsed().as_millis() as u64,
            "task completed"
        );
        Ok(())
    }
}

impl std::str::FromStr for Task {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Task::ALL
            .into_iter()
            .find(|task| task.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown task: {}", s))
    }
}

fn download(toolchain: &str) -> Invocation {
    Invocation::new(toolchain, ["mod", "download"])
}

/// Download module dependencies, then install every package in the tree
pub fn build<R: CommandRunner>(runner: &R, toolchain: &str) -> Result<(), CommandExecutionError> {
    Task::Build.run(runner, toolchain)
}

/// Download module dependencies, then test every package in the tree
pub fn check<R: CommandRunner>(runner: &R, toolchain: &str) -> Result<(), CommandExecutionError> {
    Task::Check.run(runner, toolchain)
}
