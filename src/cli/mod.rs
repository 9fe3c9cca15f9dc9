//! Command-line interface for gclone
//!
//! `gclone [flags] <repo-or-url>` prints exactly one line on stdout: the
//! repository directory, or `.` when the caller should stay where it is.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::load_config;

mod clone;
mod info;
mod utils;

pub use utils::PLACEHOLDER;

/// Clone git repositories into a predictable domain/owner/repo directory tree
#[derive(Parser, Debug)]
#[command(name = "gclone")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository to clone: https://host/owner/repo, user@host:owner/repo, or owner/repo
    #[arg(value_name = "REPO")]
    pub repo: Option<String>,

    /// Clone into the current directory instead of the managed tree
    #[arg(long)]
    pub local: bool,

    /// Refuse to reuse an existing checkout and print `.` instead of the path
    #[arg(long)]
    pub nocd: bool,

    /// Path to config file (defaults to <config dir>/gclone/gclone.toml)
    #[arg(short = 'c', long, value_name = "FILE", env = "GCLONE_CONF_FILE")]
    pub config: Option<OsString>,

    /// Print the base directory repositories are cloned under
    #[arg(long, conflicts_with_all = ["get_base_domain", "match_prefix"])]
    pub get_base_dir: bool,

    /// Print the domain used for owner/repo shorthand
    #[arg(long, conflicts_with = "match_prefix")]
    pub get_base_domain: bool,

    /// Print completion hints for a partial owner/repo argument
    #[arg(long, value_name = "PREFIX", num_args = 0..=1, default_missing_value = "")]
    pub match_prefix: Option<String>,

    /// Print a completion script for the given shell
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = err.print();
                return ExitCode::SUCCESS;
            }
            return utils::fail(err.to_string().trim_end());
        }
    };

    init_tracing(cli.verbose);

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => utils::fail(&format!("gclone: {err:#}")),
    }
}

fn init_tracing(verbose: bool) {
    let filter = log_filter(verbose, std::env::var("RUST_LOG").ok().as_deref());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// A usable RUST_LOG always wins; otherwise --verbose picks DEBUG over WARN.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "warn" }))
}

fn dispatch(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "gclone", &mut std::io::stdout());
        return Ok(());
    }

    // An empty GCLONE_CONF_FILE means "not set".
    let config_path = cli.config.as_deref().filter(|p| !p.is_empty()).map(Path::new);
    let config = load_config(config_path).context("Failed to load configuration")?;

    if cli.get_base_dir {
        return info::print_base_dir(&config);
    }
    if cli.get_base_domain {
        return info::print_base_domain(&config);
    }
    if let Some(prefix) = cli.match_prefix.as_deref() {
        return info::print_matches(&config, prefix);
    }

    clone::run(&config, clone::CloneArgs::from(&cli))
}
