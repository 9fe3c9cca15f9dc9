//! Core configuration value shared by every stage of the clone pipeline.

use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_DOMAIN: &str = "github.com";
pub const DEFAULT_SEARCH_DEPTH: usize = 2;
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Process-wide settings, built once at startup and passed down by reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Root of the local tree; repositories land in `<base_path>/<domain>/...`.
    pub base_path: PathBuf,
    /// Host used for `owner/repo` shorthand.
    pub default_domain: String,
    /// Synthesize `https://` clone URLs for shorthand instead of `git@host:` ones.
    pub default_https: bool,
    /// How many levels below the default domain completion hints search.
    #[serde(rename = "defaultDepth")]
    pub search_depth: usize,
    /// Executable invoked as `<git_program> clone <url>`.
    pub git_program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            default_domain: DEFAULT_DOMAIN.to_string(),
            default_https: false,
            search_depth: DEFAULT_SEARCH_DEPTH,
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
        }
    }
}

impl Config {
    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_default_domain(mut self, domain: impl Into<String>) -> Self {
        self.default_domain = domain.into();
        self
    }

    pub fn with_default_https(mut self, https: bool) -> Self {
        self.default_https = https;
        self
    }
}

fn default_base_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join("Projects").join("git")
}
