//! Installer
//!
//! Places the distributed files into the fixed install directory. Backs
//! the zero-argument `man-to-anki-install` binary: verify that every
//! required file is present in the current directory, create the install
//! directory, copy the files in, and print a PATH hint.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// The distributed files, in check order: the program binary, the shell
/// completion helper, and the starter configuration.
pub const REQUIRED_FILES: [&str; 3] = ["man-to-anki", "man-to-anki.bash", "config.json"];

/// The fixed install directory: `$HOME/.local/share/man-to-anki`.
pub fn install_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/root"))
        .join(".local/share/man-to-anki")
}

/// Return the first required file missing from `source_dir`, if any.
/// Files are checked in order and the scan stops at the first miss.
pub fn first_missing_source(source_dir: &Path) -> Option<&'static str> {
    REQUIRED_FILES
        .iter()
        .find(|name| !source_dir.join(name).is_file())
        .copied()
}

/// Copy every required file from `source_dir` into `dest_dir`, creating the
/// destination (and any missing parents) first. Existing copies are
/// overwritten without confirmation.
pub fn install(source_dir: &Path, dest_dir: &Path) -> Result<()> {
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("Failed to create {}", dest_dir.display()))?;

    for name in REQUIRED_FILES {
        let dest = dest_dir.join(name);
        fs::copy(source_dir.join(name), &dest)
            .with_context(|| format!("Failed to copy {} to {}", name, dest.display()))?;
    }

    Ok(())
}

/// The two-line hint printed after a successful install.
pub fn path_hint(dest_dir: &Path) -> String {
    format!(
        "Installed to {}.\nAdd it to your search path: export PATH=\"$PATH:{}\"",
        dest_dir.display(),
        dest_dir.display()
    )
}
