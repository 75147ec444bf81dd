//! Man Page Sources
//!
//! Locates a man page source via `man --path`, decompresses it, renders it
//! to HTML with pandoc, and writes the artifact into the Anki collection.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;

use crate::config::Config;

/// Gzip magic bytes. Man sources are usually stored compressed, but some
/// distributions ship them plain.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Ask `man` where the source for `page` in `section` lives.
pub fn locate_man_page(section: u8, page: &str) -> Result<PathBuf> {
    let output = Command::new("man")
        .args(["--path", &section.to_string(), page])
        .output()
        .context("Failed to execute man (is it installed?)")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "no man page found for {}({}): {}",
            page,
            section,
            stderr.trim()
        );
    }

    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if path.is_empty() {
        bail!("man --path returned nothing for {}({})", page, section);
    }
    Ok(PathBuf::from(path))
}

/// Read a man source file, gunzipping when it is gzip-compressed.
pub fn read_man_source(path: &Path) -> Result<Vec<u8>> {
    let raw = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    if raw.starts_with(&GZIP_MAGIC) {
        let mut decoder = GzDecoder::new(raw.as_slice());
        let mut decompressed = Vec::new();
        decoder
            .read_to_end(&mut decompressed)
            .with_context(|| format!("Failed to decompress {}", path.display()))?;
        Ok(decompressed)
    } else {
        Ok(raw)
    }
}

/// Render man (roff) source to HTML by piping it through pandoc.
pub fn render_html(man_source: &[u8]) -> Result<Vec<u8>> {
    let mut child = Command::new("pandoc")
        .args(["--from", "man", "--to", "html"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("Failed to execute pandoc (is it installed?)")?;

    {
        let mut stdin = child.stdin.take().context("Failed to open pandoc stdin")?;
        stdin
            .write_all(man_source)
            .context("Failed to write man source to pandoc")?;
    }

    let output = child
        .wait_with_output()
        .context("Failed to wait for pandoc")?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("pandoc failed: {}", stderr.trim());
    }

    Ok(output.stdout)
}

/// The artifact filename for a page. The leading underscore marks the file
/// as always-in-use to Anki's media check.
pub fn html_file_name(section: u8, page: &str) -> String {
    format!("_man-{}-{}.html", section, page)
}

/// Render `page` from `section` and write the HTML into the collection
/// directory. An existing artifact for this page is overwritten.
pub fn create_man_html_file(config: &Config, section: u8, page: &str) -> Result<PathBuf> {
    let source_path = locate_man_page(section, page)?;
    tracing::debug!(
        "man source for {}({}) at {}",
        page,
        section,
        source_path.display()
    );

    let man_source = read_man_source(&source_path)?;
    let html = render_html(&man_source)?;

    let html_path = config.collection_dir().join(html_file_name(section, page));
    fs::write(&html_path, &html)
        .with_context(|| format!("Failed to write {}", html_path.display()))?;

    Ok(html_path)
}
