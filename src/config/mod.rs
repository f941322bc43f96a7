// src/config/mod.rs

//! Configuration loading for shellstack.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk, falling back to defaults (`loader.rs`).

pub mod loader;
pub mod model;

pub use loader::{default_config_path, load_from_path, load_or_default};
pub use model::{ConfigFile, OutputSection};
