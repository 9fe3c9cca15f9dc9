//! Shared CLI output helpers.

use std::io::Write;
use std::process::ExitCode;

/// Printed instead of a path when the calling shell should not change directory.
pub const PLACEHOLDER: &str = ".";

/// The single failure path: message on stderr, placeholder on stdout, exit status 1.
pub fn fail(message: &str) -> ExitCode {
    eprintln!("{message}");
    println!("{PLACEHOLDER}");
    let _ = std::io::stdout().flush();
    ExitCode::from(1)
}
