//! Case-insensitive directory walking for the local repository tree.

use crate::error::{GcloneError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Where [`ensure_path`] ended up, and which directories it had to create on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsuredPath {
    pub path: PathBuf,
    pub created: Vec<PathBuf>,
}

/// Names of the immediate subdirectories of `dir`, sorted.
///
/// Symlinks that point at directories count as directories.
pub fn list_subdirs(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| GcloneError::io(dir, e))?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| {
            let entry = entry.ok()?;
            if !entry.path().is_dir() {
                return None;
            }
            Some(entry.file_name().to_string_lossy().into_owned())
        })
        .collect();
    names.sort();
    Ok(names)
}

/// Find `wanted` among `names` ignoring case; an exact match wins over a case-folded one.
pub fn find_ignore_case<'a>(names: &'a [String], wanted: &str) -> Option<&'a str> {
    if let Some(exact) = names.iter().find(|n| n.as_str() == wanted) {
        return Some(exact.as_str());
    }
    let wanted = wanted.to_lowercase();
    names.iter().find(|n| n.to_lowercase() == wanted).map(String::as_str)
}

/// Walk `segments` below `base`, reusing existing directories whatever their casing
/// and creating missing ones one level at a time.
pub fn ensure_path<S: AsRef<str>>(base: &Path, segments: &[S]) -> Result<EnsuredPath> {
    if !base.is_dir() {
        fs::create_dir_all(base).map_err(|e| GcloneError::io(base, e))?;
        tracing::debug!(base = %base.display(), "created base directory");
    }

    let mut current = base.to_path_buf();
    let mut created = Vec::new();

    for segment in segments {
        let segment = segment.as_ref();
        let existing = list_subdirs(&current)?;

        match find_ignore_case(&existing, segment) {
            Some(actual) => {
                if actual != segment {
                    tracing::debug!(wanted = segment, actual, "reusing directory with different casing");
                }
                current.push(actual);
            }
            None => {
                current.push(segment);
                fs::create_dir(&current).map_err(|e| GcloneError::io(&current, e))?;
                tracing::debug!(dir = %current.display(), "created directory");
                created.push(current.clone());
            }
        }
    }

    Ok(EnsuredPath { path: current, created })
}

/// Actual on-disk name of a subdirectory of `dir` matching `repo_name` ignoring case.
pub fn find_existing(dir: &Path, repo_name: &str) -> Result<Option<String>> {
    let names = list_subdirs(dir)?;
    Ok(find_ignore_case(&names, repo_name).map(str::to_string))
}

/// Remove directories created by [`ensure_path`], innermost first.
///
/// Only empty directories are removed; anything that has gained content is left alone.
pub fn rollback(created: &[PathBuf]) {
    for dir in created.iter().rev() {
        if let Err(e) = fs::remove_dir(dir) {
            tracing::warn!(dir = %dir.display(), error = %e, "could not remove directory during rollback");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_levels_in_order() {
        let tmp = TempDir::new().expect("tmp");
        let ensured = ensure_path(tmp.path(), &["github.com", "acme"]).expect("ensure");

        assert_eq!(ensured.path, tmp.path().join("github.com").join("acme"));
        assert!(ensured.path.is_dir());
        assert_eq!(
            ensured.created,
            vec![tmp.path().join("github.com"), tmp.path().join("github.com").join("acme")]
        );
    }

    #[test]
    fn reuses_existing_directory_with_actual_casing() {
        let tmp = TempDir::new().expect("tmp");
        fs::create_dir_all(tmp.path().join("github.com").join("Foo")).expect("mkdir");

        let ensured = ensure_path(tmp.path(), &["github.com", "foo"]).expect("ensure");

        assert_eq!(ensured.path, tmp.path().join("github.com").join("Foo"));
        assert!(ensured.created.is_empty());
        let names = list_subdirs(&tmp.path().join("github.com")).expect("list");
        assert_eq!(names, vec!["Foo"], "no sibling with different casing may appear");
    }

    #[test]
    fn creates_base_when_absent() {
        let tmp = TempDir::new().expect("tmp");
        let base = tmp.path().join("Projects").join("git");

        let ensured = ensure_path(&base, &["github.com"]).expect("ensure");
        assert_eq!(ensured.path, base.join("github.com"));
        assert_eq!(ensured.created, vec![base.join("github.com")]);
    }

    #[test]
    fn files_are_not_mistaken_for_directories() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("notes"), "x").expect("write");
        fs::create_dir(tmp.path().join("Repo")).expect("mkdir");

        assert_eq!(list_subdirs(tmp.path()).expect("list"), vec!["Repo"]);
        assert_eq!(find_existing(tmp.path(), "NOTES").expect("find"), None);
        assert_eq!(find_existing(tmp.path(), "repo").expect("find"), Some("Repo".to_string()));
    }

    #[test]
    fn exact_match_beats_case_folded_match() {
        let names = vec!["Widgets".to_string(), "widgets".to_string()];
        assert_eq!(find_ignore_case(&names, "widgets"), Some("widgets"));
        assert_eq!(find_ignore_case(&names, "WIDGETS"), Some("Widgets"));
        assert_eq!(find_ignore_case(&names, "gadgets"), None);
    }

    #[test]
    fn rollback_removes_only_empty_created_dirs() {
        let tmp = TempDir::new().expect("tmp");
        let ensured = ensure_path(tmp.path(), &["a", "b", "c"]).expect("ensure");
        fs::write(tmp.path().join("a").join("keep.txt"), "x").expect("write");

        rollback(&ensured.created);

        assert!(!tmp.path().join("a").join("b").exists());
        assert!(tmp.path().join("a").exists(), "non-empty directory survives rollback");
    }

    #[test]
    fn listing_a_missing_directory_is_an_io_error() {
        let tmp = TempDir::new().expect("tmp");
        let err = list_subdirs(&tmp.path().join("missing")).unwrap_err();
        assert!(matches!(err, GcloneError::Io { .. }));
    }
}
