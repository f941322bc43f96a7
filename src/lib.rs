// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod scenarios;
pub mod session;
pub mod term;
pub mod types;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::load_or_default;
use crate::exec::ShellRunner;
use crate::session::{Session, SessionOutcome};
use crate::term::{Console, Logger, OsProcessControl};

pub use crate::exec::{ExecAction, ExecError, Flow, exec_action, wrap};
pub use crate::term::{
    ANSI_FG_GREEN, ANSI_FG_NC, ANSI_FG_RED, ANSI_FG_YELLOW, EMPTY_LINE, EMPTY_STRING, LogLine,
};
pub use crate::types::{ColorMode, ExitPolicy};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI overrides
/// - the stdout logger and the real process control
/// - the shell runner
/// - the selected scenario
pub async fn run(args: CliArgs) -> Result<()> {
    let (keep_going_on_error, keep_going_on_stderr) = match &args.command {
        Command::Run {
            keep_going_on_error,
            keep_going_on_stderr,
            ..
        } => (*keep_going_on_error, *keep_going_on_stderr),
        _ => (false, false),
    };

    let cfg = load_or_default(args.config.as_deref().map(Path::new))
        .context("loading shellstack configuration")?
        .with_overrides(args.color, keep_going_on_error, keep_going_on_stderr);
    debug!(?cfg, "effective configuration");

    let console = Console::new(Logger::stdout(cfg.output.color), Box::new(OsProcessControl));
    let mut session = Session::new(ShellRunner::new(), console);

    let outcome = match args.command {
        Command::Run { command, .. } => {
            let command = command.join(" ");
            scenarios::run_command(&mut session, &command, cfg.policy).await
        }
        Command::Ps => scenarios::ps(&mut session, cfg.policy).await,
        Command::PsInvalid => scenarios::ps_invalid(&mut session).await,
        Command::Stop => scenarios::stop_before_reboot(&mut session).await,
    };

    match outcome {
        SessionOutcome::Completed => info!("all commands completed"),
        SessionOutcome::Terminated(code) => info!(code, "session terminated"),
    }

    Ok(())
}
