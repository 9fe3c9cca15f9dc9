//! Path helpers

use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` component against the user's home directory.
///
/// Paths without a leading `~`, or hosts with no resolvable home, are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Forward slashes regardless of platform, for completion output.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Render a path for stdout, the way the shell wrapper will `cd` into it.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
