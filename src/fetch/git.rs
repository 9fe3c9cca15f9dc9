//! External `git clone` invocation

use crate::domain::Config;
use crate::error::{GcloneError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Something that can materialise a repository inside a directory.
pub trait CloneInvoker {
    /// Clone `url` into a new subdirectory of `workdir`, blocking until done.
    fn clone_repo(&self, url: &str, workdir: &Path) -> Result<()>;
}

/// Runs `<program> clone <url>` with inherited stdio.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.git_program.clone())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(crate::domain::DEFAULT_GIT_PROGRAM)
    }
}

impl CloneInvoker for GitCli {
    fn clone_repo(&self, url: &str, workdir: &Path) -> Result<()> {
        tracing::info!("using url: {url}");

        let status = Command::new(&self.program)
            .arg("clone")
            .arg(url)
            .current_dir(workdir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| GcloneError::Spawn { program: self.program.clone(), source })?;

        if !status.success() {
            return Err(GcloneError::CloneFailed { url: url.to_string(), status });
        }
        Ok(())
    }
}
