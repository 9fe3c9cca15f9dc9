//! Library half of `gclone`.
//!
//! The binary is a thin wrapper around [`cli::run`]; everything else is exposed
//! so the pipeline can be driven (and tested) without spawning the CLI.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod scan;
pub mod utils;

pub use domain::Config;
pub use error::GcloneError;
