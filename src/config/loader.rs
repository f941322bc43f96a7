// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::ConfigFile;
use crate::errors::Result;

/// Load a configuration file from a given path.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: ConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Resolve the configuration to use.
///
/// - An explicitly requested file must exist and parse.
/// - Otherwise [`default_config_path`] is read if present, and built-in
///   defaults are used when it is not.
pub fn load_or_default(explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading requested config file");
        return load_from_path(path);
    }

    let path = default_config_path();
    if path.is_file() {
        debug!(path = %path.display(), "loading default config file");
        load_from_path(&path)
    } else {
        debug!("no config file found; using defaults");
        Ok(ConfigFile::default())
    }
}

/// `Shellstack.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Shellstack.toml")
}
