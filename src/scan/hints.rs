//! Completion hints drawn from the default domain's directory tree.
//!
//! Every hint is a valid shorthand argument (`owner/`, `owner/repo/`), so a
//! shell can offer them directly.

use crate::domain::Config;
use crate::utils::normalize_path;
use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// Text to insert on the command line.
    pub value: String,
    /// Short label shown next to it.
    pub description: String,
}

impl Hint {
    fn new(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self { value: value.into(), description: description.into() }
    }

    fn same(value: String) -> Self {
        Self { description: value.clone(), value }
    }
}

/// Hints for `prefix`, sorted case-insensitively.
///
/// Only the default domain is searched: shorthand has no way to name another
/// host, so hints for other domains could not be passed back as an argument.
pub fn get_matches(config: &Config, prefix: &str) -> Vec<Hint> {
    let root = config.base_path.join(&config.default_domain);

    let mut hints: Vec<Hint> = if prefix.is_empty() {
        child_dirs(&root).into_iter().map(|name| Hint::same(format!("{name}/"))).collect()
    } else if prefix.contains('/') {
        complete_path(&root, prefix)
    } else {
        search_components(&root, prefix, config.search_depth)
    };

    hints.sort_by(hint_sorter);
    hints
}

/// Case-insensitive ordering on the description.
pub fn hint_sorter(a: &Hint, b: &Hint) -> Ordering {
    a.description.to_lowercase().cmp(&b.description.to_lowercase())
}

/// `owner/re` -> every `owner/re*` directory.
fn complete_path(root: &Path, prefix: &str) -> Vec<Hint> {
    let (parent, partial) = prefix.rsplit_once('/').unwrap_or(("", prefix));
    let parent = parent.trim_end_matches('/');

    child_dirs(&root.join(parent))
        .into_iter()
        .filter(|name| name.starts_with(partial))
        .map(|name| {
            let value = if parent.is_empty() {
                format!("{name}/")
            } else {
                format!("{parent}/{name}/")
            };
            Hint::new(value, format!("{name}/"))
        })
        .collect()
}

/// Any directory up to `max_depth` levels deep whose name starts with `prefix`.
fn search_components(root: &Path, prefix: &str, max_depth: usize) -> Vec<Hint> {
    if max_depth == 0 {
        return Vec::new();
    }

    WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(&entry.file_name().to_string_lossy()))
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(prefix))
        .filter_map(|entry| {
            let rel = entry.path().strip_prefix(root).ok()?;
            Some(Hint::same(format!("{}/", normalize_path(&rel.to_string_lossy()))))
        })
        .collect()
}

fn child_dirs(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !is_hidden(name))
        .collect()
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
