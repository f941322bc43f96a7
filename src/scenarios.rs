// src/scenarios.rs

//! Ready-made command scenarios used by the binary.
//!
//! Each one shows a different exit-policy behaviour:
//! - [`ps`]: default policy, prints the callback arguments.
//! - [`ps_invalid`]: a failing command with both policy flags off, so the
//!   callback still sees stderr and the error.
//! - [`stop_before_reboot`]: the callback stops the process before a
//!   chained `sudo shutdown -r now` can run.

use crate::exec::{CommandRunner, ExecAction, ExecError, Flow, exec_action, wrap};
use crate::session::{Session, SessionOutcome};
use crate::term::{ANSI_FG_GREEN, ANSI_FG_NC, ANSI_FG_RED, Console, EMPTY_LINE, LogLine};
use crate::types::ExitPolicy;

pub const PS: &str = "ps";
pub const PS_INVALID: &str = "ps --invalid-parameter";
pub const REBOOT: &str = "sudo shutdown -r now";

/// Print the three callback arguments as labelled sections.
pub fn print_report(console: &mut Console, output: &str, stderr: &str, error: Option<&ExecError>) {
    console.stack(&[
        LogLine::colored(ANSI_FG_GREEN, "Response:"),
        LogLine::plain([output]),
    ]);

    let stderr = if stderr.is_empty() {
        "No Standard Error"
    } else {
        stderr
    };
    console.stack(&[
        LogLine::colored(ANSI_FG_RED, "Standard error:"),
        LogLine::plain([stderr, EMPTY_LINE]),
    ]);

    let error = error.map_or_else(|| "No Error".to_string(), ToString::to_string);
    console.stack(&[
        LogLine::colored(ANSI_FG_RED, "Error:"),
        LogLine::plain([error.as_str(), EMPTY_LINE]),
    ]);
}

/// Action that prints the report and finishes.
pub fn report_action(policy: ExitPolicy) -> ExecAction {
    wrap(
        |console, output, stderr, error| {
            print_report(console, &output, &stderr, error.as_ref());
            Flow::Done
        },
        policy,
    )
}

pub async fn run_command<R: CommandRunner>(
    session: &mut Session<R>,
    command: &str,
    policy: ExitPolicy,
) -> SessionOutcome {
    session.exec(command, report_action(policy)).await
}

pub async fn ps<R: CommandRunner>(session: &mut Session<R>, policy: ExitPolicy) -> SessionOutcome {
    session.exec(PS, report_action(policy)).await
}

pub async fn ps_invalid<R: CommandRunner>(session: &mut Session<R>) -> SessionOutcome {
    session
        .exec(PS_INVALID, report_action(ExitPolicy::keep_going()))
        .await
}

/// `ps`, then stop; the chained reboot must never be issued.
pub async fn stop_before_reboot<R: CommandRunner>(session: &mut Session<R>) -> SessionOutcome {
    let action = exec_action(|console, _output, _stderr, _error| {
        console.stop(Some(LogLine::colored(
            ANSI_FG_RED,
            "The machine will not be reboot according to the `stop` command.",
        )));

        Flow::exec(
            REBOOT,
            exec_action(|console, _output, _stderr, _error| {
                console.stack(&[LogLine::template(format!("{ANSI_FG_RED}%s{ANSI_FG_NC}"))
                    .arg("The machine has been reboot.")]);
                Flow::Done
            }),
        )
    });

    session.exec(PS, action).await
}
