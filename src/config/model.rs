// src/config/model.rs

use serde::Deserialize;

use crate::types::{ColorMode, ExitPolicy};

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [policy]
/// on_error = true
/// on_stderr = false
///
/// [output]
/// color = "auto"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    /// Default exit policy from `[policy]`.
    #[serde(default)]
    pub policy: ExitPolicy,

    /// Terminal output settings from `[output]`.
    #[serde(default)]
    pub output: OutputSection,
}

/// `[output]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct OutputSection {
    /// `"always"` (default), `"never"` or `"auto"`.
    #[serde(default)]
    pub color: ColorMode,
}

impl ConfigFile {
    /// Apply command-line overrides on top of the file values.
    ///
    /// `keep_going_on_*` flags can only relax the policy, never tighten it.
    pub fn with_overrides(
        mut self,
        color: Option<ColorMode>,
        keep_going_on_error: bool,
        keep_going_on_stderr: bool,
    ) -> Self {
        if let Some(color) = color {
            self.output.color = color;
        }
        if keep_going_on_error {
            self.policy.on_error = false;
        }
        if keep_going_on_stderr {
            self.policy.on_stderr = false;
        }
        self
    }
}
