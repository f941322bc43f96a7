// src/term/control.rs

//! Process termination capability.
//!
//! Everything that may end the process goes through [`ProcessControl`].
//! Production code uses [`OsProcessControl`], which really exits; tests
//! provide a recording implementation so termination can be asserted on
//! without killing the test harness.

use std::io::{self, Write};

use tracing::info;

pub trait ProcessControl: Send {
    /// Terminate the process with `code`.
    ///
    /// The OS implementation never returns. Test implementations do, and
    /// callers must then behave as if the process were gone.
    fn terminate(&mut self, code: i32);
}

/// Real process exit via [`std::process::exit`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProcessControl;

impl ProcessControl for OsProcessControl {
    fn terminate(&mut self, code: i32) {
        info!(code, "terminating process");
        let _ = io::stdout().flush();
        std::process::exit(code);
    }
}
