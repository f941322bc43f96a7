use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use shellstack::exec::{CommandResult, CommandRunner, ExecError};
use tracing::debug;

/// Canned completion for one command.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    pub stdout: String,
    pub stderr: String,
    /// `None` means success; `Some(code)` produces `ExecError::Exited`.
    pub exit_code: Option<i32>,
    /// Report `ExecError::Spawn`, as if the shell could not be started.
    pub spawn_fails: bool,
}

impl Scripted {
    pub fn ok(stdout: &str) -> Self {
        Self {
            stdout: stdout.to_string(),
            ..Self::default()
        }
    }

    pub fn failing(code: i32, stderr: &str) -> Self {
        Self {
            stderr: stderr.to_string(),
            exit_code: Some(code),
            ..Self::default()
        }
    }

    pub fn unspawnable() -> Self {
        Self {
            spawn_fails: true,
            ..Self::default()
        }
    }

    fn to_result(&self, command: &str) -> CommandResult {
        if self.spawn_fails {
            return CommandResult {
                error: Some(ExecError::Spawn {
                    command: command.to_string(),
                    source: io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
                }),
                ..CommandResult::default()
            };
        }
        CommandResult {
            stdout: self.stdout.clone(),
            stderr: self.stderr.clone(),
            error: self.exit_code.map(|code| ExecError::Exited {
                command: command.to_string(),
                code,
            }),
        }
    }
}

/// A fake runner that:
/// - records every command it was asked to run
/// - answers from a script; unknown commands exit 127 with a
///   "not found" message on stderr.
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    script: HashMap<String, Scripted>,
    issued: Arc<Mutex<Vec<String>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, command: &str, scripted: Scripted) -> Self {
        self.script.insert(command.to_string(), scripted);
        self
    }

    /// Shared handle to the list of issued commands.
    pub fn issued(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.issued)
    }

    pub fn issued_commands(&self) -> Vec<String> {
        self.issued.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&mut self, command: &str) -> Pin<Box<dyn Future<Output = CommandResult> + Send + '_>> {
        self.issued.lock().unwrap().push(command.to_string());
        debug!(command, "fake runner issuing command");

        let result = match self.script.get(command) {
            Some(scripted) => scripted.to_result(command),
            None => Scripted::failing(127, &format!("sh: 1: {command}: not found\n"))
                .to_result(command),
        };

        Box::pin(async move {
            tokio::task::yield_now().await;
            result
        })
    }
}
