// src/term/mod.rs

//! Terminal output layer.
//!
//! - [`ansi`] holds the color constants and ANSI stripping.
//! - [`line`] defines [`LogLine`] and its renderer.
//! - [`logger`] writes groups of lines to a sink.
//! - [`control`] is the process-termination capability.
//! - [`console`] bundles a logger and a control; callbacks get one of these.

pub mod ansi;
pub mod console;
pub mod control;
pub mod line;
pub mod logger;

pub use ansi::{
    ANSI_FG_GREEN, ANSI_FG_NC, ANSI_FG_RED, ANSI_FG_YELLOW, EMPTY_LINE, EMPTY_STRING, strip_ansi,
};
pub use console::Console;
pub use control::{OsProcessControl, ProcessControl};
pub use line::LogLine;
pub use logger::Logger;
