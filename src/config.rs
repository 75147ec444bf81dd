//! Configuration
//!
//! Loads the tool's configuration from `config.json`, looked up in the
//! current directory first and the install directory second.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::installer;

/// Config file name, both in a checkout and in the install directory.
pub const CONFIG_FILENAME: &str = "config.json";

/// Tool configuration, stored as kebab-case JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory the rendered HTML artifacts are written into. This should
    /// be the Anki profile's `collection.media` folder. May start with `~`.
    #[serde(rename = "anki-collection")]
    pub anki_collection: String,

    /// Base URL of the AnkiConnect endpoint.
    #[serde(rename = "anki-connect-url")]
    pub anki_connect_url: String,

    /// Deck the notes are added to.
    pub deck: String,

    /// Hint field for one-liner description cards.
    #[serde(rename = "hint-one-liner")]
    pub hint_one_liner: String,

    /// Tags for one-liner description cards.
    #[serde(rename = "tags-one-liner")]
    pub tags_one_liner: Vec<String>,

    /// Hint template for option cards. The literal `{page}` is replaced
    /// with the command name.
    #[serde(rename = "hint-option-description")]
    pub hint_option_description: String,

    /// Tags for option cards.
    #[serde(rename = "tags-option-description")]
    pub tags_option_description: Vec<String>,
}

impl Config {
    /// Directory the HTML artifacts go into, with `~` resolved.
    pub fn collection_dir(&self) -> PathBuf {
        resolve_path(&self.anki_collection)
    }

    /// Hint text for an option card of `page`.
    pub fn option_hint(&self, page: &str) -> String {
        self.hint_option_description.replace("{page}", page)
    }
}

/// Load the configuration, trying the current directory first and the
/// install directory second.
pub fn load_config() -> Result<Config> {
    let candidates = [
        PathBuf::from(CONFIG_FILENAME),
        installer::install_dir().join(CONFIG_FILENAME),
    ];

    for path in &candidates {
        if path.is_file() {
            return read_config(path);
        }
    }

    bail!(
        "no {} found in the current directory or {}",
        CONFIG_FILENAME,
        installer::install_dir().display()
    );
}

/// Read and parse a config file at a known location.
pub fn read_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Resolve a path that may start with `~` to an absolute path.
///
/// If the path starts with `~`, the tilde is replaced with the user's home
/// directory. Otherwise the path is returned as-is.
pub fn resolve_path(p: &str) -> PathBuf {
    if let Some(rest) = p.strip_prefix('~') {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/root"));
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        home.join(rest)
    } else {
        PathBuf::from(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "anki-collection": "~/.local/share/Anki2/User 1/collection.media",
            "anki-connect-url": "http://127.0.0.1:8765",
            "deck": "Linux",
            "hint-one-liner": "man page one-liner",
            "tags-one-liner": ["man", "one-liner"],
            "hint-option-description": "{page} option",
            "tags-option-description": ["man", "option"]
        }"#
    }

    #[test]
    fn test_parse_kebab_case_keys() {
        let config: Config = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(config.anki_connect_url, "http://127.0.0.1:8765");
        assert_eq!(config.deck, "Linux");
        assert_eq!(config.tags_one_liner, vec!["man", "one-liner"]);
        assert_eq!(config.tags_option_description, vec!["man", "option"]);
    }

    #[test]
    fn test_option_hint_substitutes_page() {
        let config: Config = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(config.option_hint("git commit"), "git commit option");
    }

    #[test]
    fn test_collection_dir_resolves_tilde() {
        let config: Config = serde_json::from_str(sample_json()).unwrap();
        let dir = config.collection_dir();
        assert!(!dir.to_string_lossy().starts_with('~'));
        assert!(dir.ends_with(".local/share/Anki2/User 1/collection.media"));
    }

    #[test]
    fn test_resolve_path_without_tilde() {
        assert_eq!(
            resolve_path("/absolute/path/to/file"),
            PathBuf::from("/absolute/path/to/file")
        );
    }

    #[test]
    fn test_read_config_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "{ not json").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("config.json"));
    }
}
