// src/term/line.rs

//! Structured log lines and their renderer.
//!
//! A [`LogLine`] is an optional format template plus ordered arguments.
//! Rendering follows `printf`-style conventions loosely:
//!
//! - `%s` (and `%d`, `%i`, `%f`, `%j`, `%o`, `%O`) takes the next argument
//!   verbatim. Arguments are already strings, so there is no numeric
//!   conversion or JSON quoting.
//! - `%c` consumes the next argument and prints nothing (CSS styling has no
//!   terminal meaning).
//! - `%%` renders a single `%`.
//! - A placeholder with no argument left is printed literally.
//! - Arguments left over once the template is exhausted are appended,
//!   separated by a space.
//!
//! Without a template, arguments are joined with single spaces. Rendering
//! never fails.

use super::ansi::ANSI_FG_NC;

const PLACEHOLDERS: &[char] = &['s', 'd', 'i', 'f', 'j', 'o', 'O'];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogLine {
    template: Option<String>,
    args: Vec<String>,
}

impl LogLine {
    /// A line rendered from `template`, e.g. `"\x1b[32m%s\x1b[0m"`.
    pub fn template(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            args: Vec::new(),
        }
    }

    /// A line whose arguments are printed as-is, space separated.
    pub fn plain<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            template: None,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `color`-wrapped single value: `{color}%s{reset}`.
    pub fn colored(color: &str, text: impl Into<String>) -> Self {
        Self::template(format!("{color}%s{ANSI_FG_NC}")).arg(text)
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// True when there is nothing to print at all.
    pub fn is_empty(&self) -> bool {
        self.template.is_none() && self.args.is_empty()
    }

    /// Render to a single string, without the trailing newline.
    pub fn render(&self) -> String {
        let mut args = self.args.iter();
        let mut out = String::new();

        let Some(template) = &self.template else {
            return self.args.join(" ");
        };

        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.peek().copied() {
                Some('%') => {
                    chars.next();
                    out.push('%');
                }
                Some('c') => {
                    chars.next();
                    if args.next().is_none() {
                        out.push_str("%c");
                    }
                }
                Some(spec) if PLACEHOLDERS.contains(&spec) => {
                    chars.next();
                    match args.next() {
                        Some(arg) => out.push_str(arg),
                        None => {
                            out.push('%');
                            out.push(spec);
                        }
                    }
                }
                _ => out.push('%'),
            }
        }

        for arg in args {
            out.push(' ');
            out.push_str(arg);
        }

        out
    }
}

impl From<&str> for LogLine {
    fn from(text: &str) -> Self {
        Self::plain([text])
    }
}

impl From<String> for LogLine {
    fn from(text: String) -> Self {
        Self::plain([text])
    }
}
