//! Config file loading

use crate::domain::Config;
use crate::utils::expand_home;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration, falling back to defaults when no file is found.
///
/// An explicitly named file must exist and parse. The auto-discovered
/// per-user file is allowed to be broken: it is reported and ignored.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().filter(|p| p.exists()),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let mut parsed = match parse_toml_config(&content, &config_file) {
        Ok(cfg) => cfg,
        Err(e) => {
            if config_path_provided {
                return Err(e);
            }
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            return Ok(Config::default());
        }
    };

    parsed.base_path = expand_home(&parsed.base_path);
    tracing::debug!(config = %config_file.display(), base = %parsed.base_path.display(), "loaded config");
    Ok(parsed)
}

/// `<config_dir>/gclone/gclone.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gclone").join("gclone.toml"))
}

/// Parse TOML config, accepting either top-level keys or a `[gclone]` table.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get("gclone") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}
