//! man-to-anki -- Anki flashcards from man pages
//!
//! Renders a man page to HTML inside the Anki collection, extracts the
//! one-line description and option entries from it, and adds notes to a
//! running Anki instance through the AnkiConnect API. The `installer`
//! module backs the standalone `man-to-anki-install` binary.

pub mod anki;
pub mod config;
pub mod installer;
pub mod logging;
pub mod man;
pub mod prompts;
