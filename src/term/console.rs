// src/term/console.rs

use std::fmt;

use tracing::debug;

use crate::types::TERMINATION_CODE;

use super::control::ProcessControl;
use super::line::LogLine;
use super::logger::Logger;

/// The logger plus the right to end the process.
///
/// This is what command callbacks receive. Termination is first-decision
/// wins: once [`Console::terminate`] has been called, later calls are
/// ignored and [`Console::is_terminated`] stays true.
pub struct Console {
    logger: Logger,
    control: Box<dyn ProcessControl>,
    terminated: Option<i32>,
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("logger", &self.logger)
            .field("terminated", &self.terminated)
            .finish_non_exhaustive()
    }
}

impl Console {
    pub fn new(logger: Logger, control: Box<dyn ProcessControl>) -> Self {
        Self {
            logger,
            control,
            terminated: None,
        }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// See [`Logger::stack`].
    ///
    /// Nothing is written once the process has been terminated.
    pub fn stack(&mut self, lines: &[LogLine]) {
        if let Some(code) = self.terminated {
            debug!(code, lines = lines.len(), "process terminated; output dropped");
            return;
        }
        self.logger.stack(lines);
    }

    pub fn terminate(&mut self, code: i32) {
        if let Some(previous) = self.terminated {
            debug!(code, previous, "termination already requested; ignoring");
            return;
        }
        self.terminated = Some(code);
        self.control.terminate(code);
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated.is_some()
    }

    pub fn termination_code(&self) -> Option<i32> {
        self.terminated
    }

    /// Print `line` (if it has anything to print) and terminate with the
    /// success code.
    ///
    /// Call this from a callback to make sure nothing chained after it runs.
    pub fn stop(&mut self, line: Option<LogLine>) {
        if let Some(line) = line.filter(|l| !l.is_empty()) {
            self.stack(std::slice::from_ref(&line));
        }
        debug!("stop requested");
        self.terminate(TERMINATION_CODE);
    }
}
