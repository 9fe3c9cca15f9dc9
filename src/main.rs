//! gclone: clone git repositories into a `<base>/<domain>/<owner>/<repo>` tree
//!
//! Prints the resulting directory on stdout so a shell wrapper can `cd` into it.

use std::process::ExitCode;

fn main() -> ExitCode {
    gclone::cli::run()
}
