//! Error taxonomy for the clone pipeline.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GcloneError {
    #[error("Please provide a url or repo to clone!")]
    MissingReference,

    #[error("Directory already exists, will not clone: {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Invalid repository URL '{input}': {reason}")]
    InvalidUrl { input: String, reason: String },

    #[error("Repository URL has no host: {input}")]
    NoHost { input: String },

    #[error("Repository reference has no path: {input}")]
    EmptyPath { input: String },

    #[error("Failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git clone of {url} failed ({status})")]
    CloneFailed { url: String, status: ExitStatus },

    #[error("Clone finished but no '{name}' directory appeared in {}", dir.display())]
    CloneDirMissing { name: String, dir: PathBuf },

    #[error("Filesystem error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GcloneError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, GcloneError>;
