//! Utility functions

mod paths;

pub use paths::{display_path, expand_home, normalize_path};
