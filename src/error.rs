use thiserror::Error;

/// An invoked external command failed to start or exited unsuccessfully.
///
/// This is the only failure a task can produce. The first one raised aborts
/// the task and is handed back to the caller unchanged.
#[derive(Debug, Error)]
pub enum CommandExecutionError {
    /// The child process could not be spawned (missing binary, permissions, ...)
    #[error("failed to run \"{command}\"")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The child process ran and exited with a non-zero status
    #[error("running \"{command}\" {}", describe_exit(.code))]
    Failed { command: String, code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("failed with exit code {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

impl CommandExecutionError {
    /// The command line that failed, as displayed in logs
    pub fn command(&self) -> &str {
        match self {
            Self::Spawn { command, .. } | Self::Failed { command, .. } => command,
        }
    }

    /// Process exit code to report for this failure.
    ///
    /// Passes through the child's own code when it fits in a process exit
    /// status, otherwise falls back to 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Failed {
                code: Some(code), ..
            } if (1..=255).contains(code) => *code as u8,
            _ => 1,
        }
    }
}
