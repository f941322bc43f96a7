// src/term/ansi.rs

//! ANSI escape sequences used to compose colored log templates.
//!
//! See <https://en.wikipedia.org/wiki/ANSI_escape_code>.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// Newline, usually appended as a trailing argument to leave a blank line.
pub const EMPTY_LINE: &str = "\n";

pub const EMPTY_STRING: &str = "";

/// Foreground: red.
pub const ANSI_FG_RED: &str = "\x1b[31m";

/// Foreground: yellow.
pub const ANSI_FG_YELLOW: &str = "\x1b[33m";

/// Foreground: green.
pub const ANSI_FG_GREEN: &str = "\x1b[32m";

/// Foreground: reset to the terminal default ("no color").
pub const ANSI_FG_NC: &str = "\x1b[0m";

// CSI sequences: ESC [ params final-byte.
static ANSI_SEQUENCE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    match Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]") {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(error = %e, "invalid ANSI sequence regex; colors will not be stripped");
            None
        }
    }
});

/// Remove ANSI escape sequences, leaving the visible text untouched.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    match ANSI_SEQUENCE.as_ref() {
        Some(re) => re.replace_all(text, ""),
        None => Cow::Borrowed(text),
    }
}
