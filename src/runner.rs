//! Command runner
//!
//! Abstracts "run an external command and block for its exit status" so tasks
//! can be driven by a real subprocess runner, a dry-run printer, or a fake.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

use tracing::{debug, info};

use crate::cli_utils::tasker_prefix;
use crate::error::CommandExecutionError;

/// A single external program execution: program name plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs one invocation to completion
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), CommandExecutionError>;
}

/// Runs invocations as blocking child processes
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    working_dir: Option<PathBuf>,
    verbose: bool,
}

impl ProcessRunner {
    pub fn new(working_dir: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            working_dir,
            verbose,
        }
    }

    fn resolve_program(&self, program: &str) -> PathBuf {
        match which::which(program) {
            Ok(path) => path,
            Err(e) => {
                debug!(
                    command = program,
                    error = %e,
                    "could not resolve program in PATH, trying as-is"
                );
                PathBuf::from(program)
            }
        }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), CommandExecutionError> {
        let command = invocation.to_string();

        if self.verbose {
            eprintln!("{} exec: {}", tasker_prefix(), command);
        }

        let program = self.resolve_program(&invocation.program);
        let mut cmd = Command::new(&program);
        cmd.args(&invocation.args);

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        // Child stdout is only surfaced in verbose mode; stderr always is
        cmd.stdin(Stdio::inherit()).stderr(Stdio::inherit());
        if self.verbose {
            cmd.stdout(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::null());
        }

        debug!(command = %command, program = %program.display(), "spawning");

        let start = Instant::now();
        let status = cmd
            .status()
            .map_err(|source| CommandExecutionError::Spawn {
                command: command.clone(),
                source,
            })?;

        let duration_ms = start.elapsed().as_millis() as u64;

        if status.success() {
            info!(command = %command, status = "success", duration_ms, "command finished");
            Ok(())
        } else {
            debug!(
                command = %command,
                status = "error",
                exit_code = ?status.code(),
                duration_ms,
                "command failed"
            );
            Err(CommandExecutionError::Failed {
                command,
                code: status.code(),
            })
        }
    }
}

/// Prints invocations instead of running them
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), CommandExecutionError> {
        info!(command = %invocation, "dry run, not executing");
        println!("{}", invocation);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_display_joins_args() {
        let inv = Invocation::new("go", ["install", "./..."]);
        assert_eq!(inv.to_string(), "go install ./...");
        assert_eq!(Invocation::new("go", Vec::<String>::new()).to_string(), "go");
    }

    #[test]
    fn test_dry_run_always_succeeds() {
        let inv = Invocation::new("definitely-not-a-real-program", ["mod", "download"]);
        assert!(DryRunRunner.run(&inv).is_ok());
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let runner = ProcessRunner::default();
        let inv = Invocation::new("tasker-test-missing-program-9f3a", ["mod", "download"]);

        let err = runner.run(&inv).unwrap_err();
        match err {
            CommandExecutionError::Spawn { command, .. } => {
                assert_eq!(command, "tasker-test-missing-program-9f3a mod download");
            }
            other => panic!("expected spawn error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_is_success() {
        let runner = ProcessRunner::default();
        assert!(runner.run(&Invocation::new("sh", ["-c", "exit 0"])).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_carries_code() {
        let runner = ProcessRunner::default();
        let err = runner
            .run(&Invocation::new("sh", ["-c", "exit 3"]))
            .unwrap_err();

        match err {
            CommandExecutionError::Failed { code, .. } => assert_eq!(code, Some(3)),
            other => panic!("expected failed error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_working_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker"), "").unwrap();

        let runner = ProcessRunner::new(Some(temp.path().to_path_buf()), false);
        assert!(runner
            .run(&Invocation::new("sh", ["-c", "test -f marker"]))
            .is_ok());

        let elsewhere = ProcessRunner::default();
        assert!(elsewhere
            .run(&Invocation::new("sh", ["-c", "test -f marker"]))
            .is_err());
    }
}
