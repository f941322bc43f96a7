use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

/// Exit code used on every termination path.
///
/// Failures are reported on the terminal, not through the exit status.
pub const TERMINATION_CODE: i32 = 0;

/// Decides whether a failed command terminates the process.
///
/// - `on_error`: the command could not be started or exited non-zero.
/// - `on_stderr`: the command wrote anything to its error stream.
///
/// Both default to `true`. A `false` flag still logs the condition, it just
/// lets the callback run afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExitPolicy {
    pub on_error: bool,
    pub on_stderr: bool,
}

impl ExitPolicy {
    /// Policy that never terminates; the callback always runs.
    pub const fn keep_going() -> Self {
        Self {
            on_error: false,
            on_stderr: false,
        }
    }

    pub const fn with_on_error(mut self, on_error: bool) -> Self {
        self.on_error = on_error;
        self
    }

    pub const fn with_on_stderr(mut self, on_stderr: bool) -> Self {
        self.on_stderr = on_stderr;
        self
    }
}

impl Default for ExitPolicy {
    fn default() -> Self {
        Self {
            on_error: true,
            on_stderr: true,
        }
    }
}

/// When ANSI color sequences reach the terminal.
///
/// - `Always`: write them as composed (historical behaviour, default).
/// - `Never`: strip them before writing.
/// - `Auto`: keep them only when stdout is a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Always,
    Never,
    Auto,
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Always
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            "auto" => Ok(ColorMode::Auto),
            other => Err(format!(
                "invalid color mode: {other} (expected \"always\", \"never\" or \"auto\")"
            )),
        }
    }
}
