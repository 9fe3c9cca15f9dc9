//! The clone pipeline: derive the target directory, guard against duplicates,
//! clone, and report where the repository lives.

use crate::domain::Config;
use crate::error::{GcloneError, Result};
use crate::fetch::git::CloneInvoker;
use crate::fetch::navigate::{ensure_path, find_existing, rollback};
use crate::fetch::reference::RepoReference;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CloneRequest {
    pub reference: RepoReference,
    /// Clone into the current directory instead of the managed tree.
    pub local: bool,
    /// Treat an existing checkout as an error rather than a result.
    pub nocd: bool,
}

impl CloneRequest {
    pub fn new(reference: RepoReference) -> Self {
        Self { reference, local: false, nocd: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A matching directory was already there; nothing was cloned.
    Existing(PathBuf),
    /// The repository was freshly cloned.
    Cloned(PathBuf),
}

impl Outcome {
    pub fn path(&self) -> &Path {
        match self {
            Outcome::Existing(path) | Outcome::Cloned(path) => path,
        }
    }
}

/// Run the full pipeline for one reference.
///
/// `cwd` stands in for the process working directory: it is only consulted
/// for `--local` requests and is never changed.
pub fn clone_into_tree(
    config: &Config,
    request: &CloneRequest,
    cwd: &Path,
    invoker: &dyn CloneInvoker,
) -> Result<Outcome> {
    let reference = &request.reference;
    let segments = reference.segments()?;
    let repo_name = segments.last().map(String::as_str).unwrap_or_default();

    let (target, created) = if request.local {
        (cwd.to_path_buf(), Vec::new())
    } else {
        let path = reference.path_segments(config)?;
        let ensured = ensure_path(&config.base_path, &path.parent_chain())?;
        (ensured.path, ensured.created)
    };

    if let Some(existing) = find_existing(&target, repo_name)? {
        let path = target.join(existing);
        if request.nocd {
            return Err(GcloneError::AlreadyExists { path });
        }
        tracing::info!(path = %path.display(), "repository already present, skipping clone");
        return Ok(Outcome::Existing(path));
    }

    let url = reference.clone_url(config);
    if let Err(e) = invoker.clone_repo(&url, &target) {
        rollback(&created);
        return Err(e);
    }

    match find_existing(&target, repo_name)? {
        Some(actual) => Ok(Outcome::Cloned(target.join(actual))),
        None => Err(GcloneError::CloneDirMissing { name: repo_name.to_string(), dir: target }),
    }
}
