//! Installer for the man-to-anki distribution.
//!
//! Takes no arguments. Verifies that the distributed files are present in
//! the current directory, copies them into the fixed install directory,
//! and prints how to put that directory on PATH. Exits with status 1 and
//! a diagnostic naming the file when a required file is missing.

use std::env;

use man_to_anki::installer;

fn main() {
    let cwd = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to determine the current directory: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(missing) = installer::first_missing_source(&cwd) {
        eprintln!("Error: {} not found in the current directory.", missing);
        std::process::exit(1);
    }

    let dest = installer::install_dir();
    if let Err(e) = installer::install(&cwd, &dest) {
        eprintln!("Install failed: {:#}", e);
        std::process::exit(1);
    }

    println!("{}", installer::path_hint(&dest));
}
