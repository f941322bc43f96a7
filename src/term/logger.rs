// src/term/logger.rs

//! Terminal logger: prints groups of [`LogLine`]s in order.

use std::fmt;
use std::io::{self, IsTerminal, Write};

use tracing::warn;

use crate::types::ColorMode;

use super::ansi::strip_ansi;
use super::line::LogLine;

pub struct Logger {
    writer: Box<dyn Write + Send>,
    color: bool,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Logger writing to the process stdout.
    pub fn stdout(mode: ColorMode) -> Self {
        Self::new(Box::new(io::stdout()), mode)
    }

    /// Logger writing to an arbitrary sink.
    ///
    /// `ColorMode::Auto` looks at the process stdout, since that is where a
    /// terminal would be attached. Use [`Logger::with_terminal`] to decide
    /// that yourself.
    pub fn new(writer: Box<dyn Write + Send>, mode: ColorMode) -> Self {
        Self::with_terminal(writer, mode, io::stdout().is_terminal())
    }

    /// Like [`Logger::new`], with `ColorMode::Auto` resolved against
    /// `is_terminal` instead of the process stdout.
    pub fn with_terminal(writer: Box<dyn Write + Send>, mode: ColorMode, is_terminal: bool) -> Self {
        let color = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal,
        };
        Self { writer, color }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Print every line of `lines`, in order, then flush.
    ///
    /// Write failures are logged and otherwise ignored.
    pub fn stack(&mut self, lines: &[LogLine]) {
        let text = self.render_stack(lines);
        let res = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush());
        if let Err(e) = res {
            warn!(error = %e, "failed to write log stack to terminal");
        }
    }

    /// Exactly the text [`Logger::stack`] would write.
    pub fn render_stack(&self, lines: &[LogLine]) -> String {
        let mut out = String::new();
        for line in lines {
            let rendered = line.render();
            if self.color {
                out.push_str(&rendered);
            } else {
                out.push_str(&strip_ansi(&rendered));
            }
            out.push('\n');
        }
        out
    }
}
