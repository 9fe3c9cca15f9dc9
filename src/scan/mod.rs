//! Scanning the local repository tree for shell completion

pub mod hints;

pub use hints::{get_matches, Hint};
