//! Rendering structured notes into Markdown.

use crate::extraction::parse_note;
use rednote_core::Note;

/// Renders a note as Markdown: heading, body, then a hashtag line.
///
/// The emoji list is not rendered separately; the model embeds emoji in the
/// title and body already. Trailing whitespace is trimmed.
///
/// # Examples
///
/// ```
/// use rednote::render;
/// use rednote_core::Note;
///
/// let note = Note::builder()
///     .title("T")
///     .body("B")
///     .hashtags(vec!["#a".to_string(), "#b".to_string()])
///     .build()
///     .unwrap();
/// assert_eq!(render(&note), "## T\n\nB\n\n#a #b");
/// ```
pub fn render(note: &Note) -> String {
    let mut output = format!("## {}\n\n", note.title());
    output.push_str(note.body());
    output.push_str("\n\n");

    if !note.hashtags().is_empty() {
        output.push_str(&note.hashtags().join(" "));
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Renders a raw JSON string, or a diagnostic when it does not decode.
///
/// The diagnostic contains both the decode error and the original input so
/// the caller never has to handle a failure path.
pub fn render_raw(json: &str) -> String {
    match parse_note(json) {
        Ok(note) => render(&note),
        Err(e) => format!("Error: could not parse JSON - {}\nOriginal input:\n{}", e, json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_documented_layout() {
        let note: Note = serde_json::from_str(
            r##"{"title":"T","body":"B\nline2","hashtags":["#a","#b"],"emojis":["x"]}"##,
        )
        .unwrap();
        assert_eq!(render(&note), "## T\n\nB\nline2\n\n#a #b");
    }

    #[test]
    fn empty_hashtags_omit_the_tag_line() {
        let note: Note = serde_json::from_str(r#"{"title":"T","body":"B"}"#).unwrap();
        assert_eq!(render(&note), "## T\n\nB");
    }

    #[test]
    fn no_trailing_blank_lines() {
        let note: Note = serde_json::from_str(r#"{"title":"T","body":"B\n\n"}"#).unwrap();
        assert!(!render(&note).ends_with('\n'));
    }

    #[test]
    fn render_raw_round_trips_well_formed_input() {
        let rendered =
            render_raw(r##"{"title":"T","body":"B","hashtags":["#a"],"emojis":[]}"##);
        assert_eq!(rendered, "## T\n\nB\n\n#a");
    }

    #[test]
    fn render_raw_reports_decode_failures_in_place() {
        let rendered = render_raw("not json at all");
        assert!(rendered.starts_with("Error:"));
        assert!(rendered.contains("not json at all"));
    }
}
