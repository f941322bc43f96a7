// src/exec/policy.rs

//! Exit policy evaluation.

use tracing::debug;

use crate::term::{ANSI_FG_RED, Console, LogLine};
use crate::types::{ExitPolicy, TERMINATION_CODE};

use super::result::ExecError;

/// What [`evaluate`] decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing fatal; the callback may run.
    Proceed,
    /// The process was terminated with this code.
    Terminate(i32),
}

/// Report `error` and `stderr` on the console and apply `policy`.
///
/// Order matters:
/// 1. An error is printed in red; with `on_error` the process terminates
///    right away and stderr is not looked at.
/// 2. Non-empty stderr is printed as-is; with `on_stderr` the process
///    terminates.
///
/// Both termination paths use [`TERMINATION_CODE`].
pub fn evaluate(
    console: &mut Console,
    error: Option<&ExecError>,
    stderr: &str,
    policy: ExitPolicy,
) -> Verdict {
    if let Some(error) = error {
        console.stack(&[LogLine::colored(ANSI_FG_RED, format!("Error: {error}"))]);
        if policy.on_error {
            debug!(command = error.command(), "exit policy: terminating on error");
            console.terminate(TERMINATION_CODE);
            return Verdict::Terminate(TERMINATION_CODE);
        }
    }

    if !stderr.is_empty() {
        console.stack(&[LogLine::template("%s").arg(stderr)]);
        if policy.on_stderr {
            debug!("exit policy: terminating on stderr output");
            console.terminate(TERMINATION_CODE);
            return Verdict::Terminate(TERMINATION_CODE);
        }
    }

    Verdict::Proceed
}
