//! Man page handling: locating and rendering sources, extracting card text.

pub mod extract;
pub mod source;
