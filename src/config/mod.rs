//! Configuration loading
//!
//! Handles an explicit config file (flag or `GCLONE_CONF_FILE`), the per-user
//! `gclone.toml`, and built-in defaults, in that order of precedence.

pub mod loader;

pub use loader::{default_config_path, load_config};
