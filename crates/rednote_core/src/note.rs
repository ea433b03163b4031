//! The structured note document produced by extraction.

use serde::{Deserialize, Serialize};

/// A structured marketing note.
///
/// This is the wire contract with the model: a JSON object with `title`,
/// `body`, `hashtags`, and `emojis` keys. Every field is defaulted, so an
/// object missing keys still deserializes; only syntactically invalid JSON
/// is rejected.
///
/// # Examples
///
/// ```
/// use rednote_core::Note;
///
/// let note: Note = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
/// assert_eq!(note.title(), "X");
/// assert_eq!(note.body(), "");
/// assert!(note.hashtags().is_empty());
/// assert!(note.emojis().is_empty());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct Note {
    /// Headline of the note
    #[serde(default)]
    title: String,
    /// Main copy, may contain internal line breaks
    #[serde(default)]
    body: String,
    /// Hashtags in display order
    #[serde(default)]
    hashtags: Vec<String>,
    /// Emoji suggestions; usually already embedded in title and body
    #[serde(default)]
    emojis: Vec<String>,
}

impl Note {
    /// Returns a builder for constructing a Note.
    pub fn builder() -> NoteBuilder {
        NoteBuilder::default()
    }
}
