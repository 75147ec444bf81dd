//! Note Construction
//!
//! Builds the `addNote` payloads for the two card kinds and the final
//! `guiBrowse` call that shows freshly added notes in the card browser.

use anyhow::{Context, Result};
use serde_json::json;

use crate::anki::client::AnkiConnect;
use crate::config::Config;

/// Note model used for every card. The model carries the four fields
/// Front, Back, Hint, and Source.
pub const MODEL_NAME: &str = "Basic";

/// Field values for a new note.
pub struct NewNote<'a> {
    pub deck: &'a str,
    pub front: &'a str,
    pub back: &'a str,
    pub hint: &'a str,
    pub source: &'a str,
    pub tags: &'a [String],
}

/// Add a note and return its id.
pub async fn add_note(client: &dyn AnkiConnect, note: &NewNote<'_>) -> Result<i64> {
    let params = json!({
        "note": {
            "deckName": note.deck,
            "modelName": MODEL_NAME,
            "fields": {
                "Front": note.front,
                "Back": note.back,
                "Hint": note.hint,
                "Source": note.source,
            },
            "tags": note.tags,
        }
    });

    let result = client.invoke("addNote", params).await?;
    result.as_i64().context("addNote did not return a note id")
}

/// Add the one-line description card for a page.
pub async fn add_description_note(
    client: &dyn AnkiConnect,
    config: &Config,
    description: &str,
    page: &str,
    source: &str,
) -> Result<i64> {
    add_note(
        client,
        &NewNote {
            deck: &config.deck,
            front: description,
            back: page,
            hint: &config.hint_one_liner,
            source,
            tags: &config.tags_one_liner,
        },
    )
    .await
}

/// Add an option card for a page.
pub async fn add_option_note(
    client: &dyn AnkiConnect,
    config: &Config,
    option_description: &str,
    option_title: &str,
    page: &str,
    source: &str,
) -> Result<i64> {
    let hint = config.option_hint(page);
    add_note(
        client,
        &NewNote {
            deck: &config.deck,
            front: option_description,
            back: option_title,
            hint: &hint,
            source,
            tags: &config.tags_option_description,
        },
    )
    .await
}

/// Open the Anki card browser on the given notes.
pub async fn gui_browse_notes(client: &dyn AnkiConnect, note_ids: &[i64]) -> Result<Vec<i64>> {
    let query = format!(
        "nid:{}",
        note_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    );

    let result = client.invoke("guiBrowse", json!({ "query": query })).await?;
    let ids = result
        .as_array()
        .map(|ids| ids.iter().filter_map(|id| id.as_i64()).collect())
        .unwrap_or_default();
    Ok(ids)
}
