// src/session.rs

use std::fmt;

use tracing::debug;

use crate::exec::{CommandRunner, ExecAction, Flow, Step};
use crate::term::Console;

/// How a [`Session::exec`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every chained command ran and the process is still alive.
    Completed,
    /// Something terminated the process with this code.
    Terminated(i32),
}

/// Runs commands one at a time and feeds completions to their actions.
///
/// Chained commands returned by callbacks are followed in order until a
/// callback returns [`Flow::Done`] or the process is terminated.
pub struct Session<R: CommandRunner> {
    runner: R,
    console: Console,
}

impl<R: CommandRunner> fmt::Debug for Session<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("console", &self.console)
            .finish_non_exhaustive()
    }
}

impl<R: CommandRunner> Session<R> {
    pub fn new(runner: R, console: Console) -> Self {
        Self { runner, console }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run `command`, hand its completion to `action`, and follow any chain.
    pub async fn exec(&mut self, command: impl Into<String>, action: ExecAction) -> SessionOutcome {
        let mut next = Some(Step::new(command, action));

        while let Some(step) = next.take() {
            if let Some(code) = self.console.termination_code() {
                debug!(
                    command = %step.command,
                    code,
                    "process already terminated; chained command dropped"
                );
                break;
            }

            debug!(command = %step.command, policy = ?step.action.policy(), "issuing command");
            let (error, output, stderr) = self.runner.run(&step.command).await.into_native();

            match step.action.handle(&mut self.console, error, output, stderr) {
                Flow::Done => {}
                Flow::Chain(chained) => next = Some(chained),
            }
        }

        match self.console.termination_code() {
            Some(code) => SessionOutcome::Terminated(code),
            None => SessionOutcome::Completed,
        }
    }
}
