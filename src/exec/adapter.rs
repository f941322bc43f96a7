// src/exec/adapter.rs

//! Callback adapter.
//!
//! A runner completes with `(error, stdout, stderr)`. User callbacks are
//! written against `(output, stderr, error)` and only ever run after the
//! exit policy has had its say. [`ExecAction`] is that continuation.
//!
//! Callbacks return a [`Flow`]: either done, or the next command to run.
//! The session only follows a chain while the process is still alive, so a
//! callback that calls [`Console::stop`] and then returns a chained command
//! never gets that command executed.

use std::fmt;

use tracing::debug;

use crate::term::Console;
use crate::types::ExitPolicy;

use super::policy::{Verdict, evaluate};
use super::result::ExecError;

type Callback = Box<dyn FnOnce(&mut Console, String, String, Option<ExecError>) -> Flow + Send>;

/// What the session should do after a callback returns.
#[derive(Debug)]
pub enum Flow {
    Done,
    Chain(Step),
}

impl Flow {
    /// Chain another command after this one.
    pub fn exec(command: impl Into<String>, action: ExecAction) -> Self {
        Flow::Chain(Step::new(command, action))
    }
}

/// A command together with the action handling its completion.
#[derive(Debug)]
pub struct Step {
    pub command: String,
    pub action: ExecAction,
}

impl Step {
    pub fn new(command: impl Into<String>, action: ExecAction) -> Self {
        Self {
            command: command.into(),
            action,
        }
    }
}

pub struct ExecAction {
    callback: Callback,
    policy: ExitPolicy,
}

impl fmt::Debug for ExecAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecAction")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl ExecAction {
    pub fn policy(&self) -> ExitPolicy {
        self.policy
    }

    /// Handle a completion given in the runner's native order.
    ///
    /// Runs the exit policy first; the callback is invoked only when the
    /// policy let the process live.
    pub fn handle(
        self,
        console: &mut Console,
        error: Option<ExecError>,
        output: String,
        stderr: String,
    ) -> Flow {
        match evaluate(console, error.as_ref(), &stderr, self.policy) {
            Verdict::Terminate(code) => {
                debug!(code, "exit policy terminated the process; callback skipped");
                Flow::Done
            }
            Verdict::Proceed => (self.callback)(console, output, stderr, error),
        }
    }
}

/// Wrap `callback` with the default policy (terminate on error and on
/// stderr output).
pub fn exec_action<F>(callback: F) -> ExecAction
where
    F: FnOnce(&mut Console, String, String, Option<ExecError>) -> Flow + Send + 'static,
{
    wrap(callback, ExitPolicy::default())
}

/// Wrap `callback` with an explicit policy.
pub fn wrap<F>(callback: F, policy: ExitPolicy) -> ExecAction
where
    F: FnOnce(&mut Console, String, String, Option<ExecError>) -> Flow + Send + 'static,
{
    ExecAction {
        callback: Box::new(callback),
        policy,
    }
}
