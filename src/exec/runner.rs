// src/exec/runner.rs

//! Pluggable command runner.
//!
//! The session talks to a `CommandRunner` instead of spawning processes
//! itself, so tests can script command results without a shell.
//!
//! - [`ShellRunner`] runs the command through the platform shell with
//!   `tokio::process::Command` and captures both streams.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{info, warn};

use super::result::{CommandResult, ExecError};

pub trait CommandRunner: Send {
    /// Run `command` to completion.
    ///
    /// Failures are reported inside the returned [`CommandResult`], never as
    /// a separate error channel. The future resolves exactly once.
    fn run(&mut self, command: &str) -> Pin<Box<dyn Future<Output = CommandResult> + Send + '_>>;
}

/// Runs commands with `sh -c` (or `cmd /C` on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str) -> Pin<Box<dyn Future<Output = CommandResult> + Send + '_>> {
        let command = command.to_string();
        Box::pin(async move { run_shell(&command).await })
    }
}

/// Run a single shell command and collect its output.
pub async fn run_shell(command: &str) -> CommandResult {
    info!(command, "starting command");

    let mut cmd = shell_command(command);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = match cmd.output().await {
        Ok(output) => output,
        Err(source) => {
            warn!(command, error = %source, "failed to spawn command");
            return CommandResult {
                error: Some(ExecError::Spawn {
                    command: command.to_string(),
                    source,
                }),
                ..CommandResult::default()
            };
        }
    };

    let status = output.status;
    let error = if status.success() {
        None
    } else {
        match status.code() {
            Some(code) => Some(ExecError::Exited {
                command: command.to_string(),
                code,
            }),
            None => Some(ExecError::Signaled {
                command: command.to_string(),
            }),
        }
    };

    info!(
        command,
        exit_code = status.code().unwrap_or(-1),
        success = status.success(),
        "command exited"
    );

    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        error,
    }
}

fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    }
}
