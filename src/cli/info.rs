//! Informational flags used by shell integration.

use anyhow::Result;

use crate::domain::Config;
use crate::scan::get_matches;
use crate::utils::display_path;

pub fn print_base_dir(config: &Config) -> Result<()> {
    println!("{}", display_path(&config.base_path));
    Ok(())
}

pub fn print_base_domain(config: &Config) -> Result<()> {
    println!("{}", config.default_domain);
    Ok(())
}

/// One `<hint>\t<description>` line per completion candidate.
pub fn print_matches(config: &Config, prefix: &str) -> Result<()> {
    for hint in get_matches(config, prefix) {
        println!("{}\t{}", hint.value, hint.description);
    }
    Ok(())
}
