// src/exec/result.rs

use thiserror::Error;

/// Why a command did not complete successfully.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("Command failed to start: {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed: {command} (exit code {code})")]
    Exited { command: String, code: i32 },

    #[error("Command failed: {command} (terminated by signal)")]
    Signaled { command: String },
}

impl ExecError {
    pub fn command(&self) -> &str {
        match self {
            ExecError::Spawn { command, .. }
            | ExecError::Exited { command, .. }
            | ExecError::Signaled { command } => command,
        }
    }

    /// Exit code, when the command ran and exited on its own.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecError::Exited { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Outcome of one command: captured streams plus the error, if any.
#[derive(Debug, Default)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub error: Option<ExecError>,
}

impl CommandResult {
    /// Split into the runner's native completion order:
    /// `(error, stdout, stderr)`.
    pub fn into_native(self) -> (Option<ExecError>, String, String) {
        (self.error, self.stdout, self.stderr)
    }
}
