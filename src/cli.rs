// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::ColorMode;

/// Command-line arguments for `shellstack`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shellstack",
    version,
    about = "Run shell commands and print their output with colored sections.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Shellstack.toml` in the current directory is used when
    /// it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SHELLSTACK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// When to emit ANSI colors. Overrides `[output] color`.
    #[arg(long, value_enum, value_name = "MODE")]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run an arbitrary shell command and print its response, stderr and error.
    Run {
        /// The command line, passed to the shell as a single string.
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,

        /// Print the error and continue instead of exiting.
        #[arg(long)]
        keep_going_on_error: bool,

        /// Print stderr output and continue instead of exiting.
        #[arg(long)]
        keep_going_on_stderr: bool,
    },

    /// Run `ps` with the default exit policy.
    Ps,

    /// Run `ps --invalid-parameter` without exiting on failure.
    PsInvalid,

    /// Run `ps`, then stop before a chained reboot command can run.
    Stop,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
