//! Clone command implementation

use anyhow::{Context, Result};
use std::env;

use super::utils::PLACEHOLDER;
use super::Cli;
use crate::domain::Config;
use crate::error::GcloneError;
use crate::fetch::{clone_into_tree, CloneRequest, GitCli, RepoReference};
use crate::utils::display_path;

/// The subset of [`Cli`] the clone pipeline cares about.
#[derive(Debug, Clone, Default)]
pub struct CloneArgs {
    pub repo: Option<String>,
    pub local: bool,
    pub nocd: bool,
}

impl From<&Cli> for CloneArgs {
    fn from(cli: &Cli) -> Self {
        Self { repo: cli.repo.clone(), local: cli.local, nocd: cli.nocd }
    }
}

pub fn run(config: &Config, args: CloneArgs) -> Result<()> {
    let repo = args
        .repo
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .ok_or(GcloneError::MissingReference)?;

    let cwd = env::current_dir().context("Unable to retrieve current working directory")?;
    let request = CloneRequest {
        reference: RepoReference::parse(repo),
        local: args.local,
        nocd: args.nocd,
    };
    tracing::debug!(?request, base = %config.base_path.display(), "cloning");

    let outcome = clone_into_tree(config, &request, &cwd, &GitCli::from_config(config))?;

    if args.nocd {
        println!("{PLACEHOLDER}");
    } else {
        println!("{}", display_path(outcome.path()));
    }
    Ok(())
}
