//! Locating and parsing structured notes out of raw model output.
//!
//! Model output format is unreliable: sometimes the JSON arrives fenced,
//! sometimes raw, sometimes not at all. Malformed input is a normal,
//! recoverable condition here, never a panic.

use rednote_core::Note;
use rednote_error::{JsonError, RednoteResult};

const FENCE_LABEL: &str = "```json";

/// Extracts the first balanced JSON object from a ```json fenced block.
///
/// Uses an explicit scanner rather than a regex, so balanced braces are a
/// checked invariant and adversarial input cannot trigger backtracking.
/// Braces inside string literals (and escaped quotes) are ignored. Returns
/// `None` when there is no labeled fence or no balanced object inside it.
///
/// # Examples
///
/// ```
/// use rednote::extract_json;
///
/// let reply = "Here you go!\n```json\n{\"title\": \"X\"}\n```\nEnjoy.";
/// assert_eq!(extract_json(reply), Some("{\"title\": \"X\"}"));
/// assert_eq!(extract_json("no fence here"), None);
/// ```
pub fn extract_json(text: &str) -> Option<&str> {
    let fence = text.find(FENCE_LABEL)?;
    let interior = &text[fence + FENCE_LABEL.len()..];
    let start = interior.find('{')?;
    balanced_object(&interior[start..])
}

/// Returns the prefix of `text` spanning one balanced brace-delimited object.
fn balanced_object(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[..i + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parses a candidate string into a [`Note`], filling absent keys with defaults.
///
/// # Errors
///
/// Returns a `JsonError` when the candidate is not a syntactically valid
/// JSON object.
pub fn parse_note(candidate: &str) -> RednoteResult<Note> {
    serde_json::from_str(candidate).map_err(|e| JsonError::new(e.to_string()).into())
}

/// Attempts to pull a structured note out of raw model output.
///
/// Tries the labeled fenced block first; when the fence is missing or its
/// interior does not parse, falls back to parsing the entire text directly.
/// The fallback is deliberately lenient: a reply that happens to be bare
/// JSON passes even without a fence.
///
/// # Errors
///
/// Returns a `JsonError` when neither attempt yields a valid object.
pub fn extract_note(text: &str) -> RednoteResult<Note> {
    if let Some(candidate) = extract_json(text) {
        if let Ok(note) = parse_note(candidate) {
            return Ok(note);
        }
        tracing::debug!(
            candidate_length = candidate.len(),
            "Fenced block found but did not parse; trying whole text"
        );
    }
    parse_note(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_object_is_extracted() {
        let reply = "Some commentary.\n```json\n{\"title\":\"T\",\"body\":\"B\"}\n```";
        let note = extract_note(reply).unwrap();
        assert_eq!(note.title(), "T");
        assert_eq!(note.body(), "B");
    }

    #[test]
    fn missing_keys_fill_with_defaults() {
        let note = extract_note("```json\n{\"title\":\"X\"}\n```").unwrap();
        assert_eq!(note.title(), "X");
        assert_eq!(note.body(), "");
        assert!(note.hashtags().is_empty());
        assert!(note.emojis().is_empty());
    }

    #[test]
    fn bare_json_parses_without_fence() {
        let note = extract_note(r##"{"title":"bare","hashtags":["#a"]}"##).unwrap();
        assert_eq!(note.title(), "bare");
        assert_eq!(note.hashtags(), &vec!["#a".to_string()]);
    }

    #[test]
    fn plain_prose_fails_without_panicking() {
        assert!(extract_note("not json at all").is_err());
    }

    #[test]
    fn braces_inside_strings_do_not_close_the_object() {
        let reply = "```json\n{\"body\": \"curly } brace {\", \"title\": \"ok\"}\n```";
        let note = extract_note(reply).unwrap();
        assert_eq!(note.body(), "curly } brace {");
        assert_eq!(note.title(), "ok");
    }

    #[test]
    fn escaped_quotes_inside_strings_are_handled() {
        let reply = r#"```json
{"title": "she said \"buy it\"", "body": "b"}
```"#;
        let note = extract_note(reply).unwrap();
        assert_eq!(note.title(), "she said \"buy it\"");
    }

    #[test]
    fn extraction_stops_at_the_first_balanced_object() {
        let text = "```json {\"title\":\"t\"} ``` trailing {\"ignored\":1}";
        assert_eq!(extract_json(text), Some("{\"title\":\"t\"}"));
    }

    #[test]
    fn unbalanced_fence_yields_nothing() {
        assert_eq!(extract_json("```json\n{\"title\": \"never closed\""), None);
    }

    #[test]
    fn invalid_fence_falls_back_to_whole_text() {
        // Fenced interior balances but title is not a string, so the fence
        // attempt fails; the whole text is not JSON either.
        let reply = "```json\n{\"title\": {}}\n``` and more prose";
        assert!(extract_note(reply).is_err());
    }

    #[test]
    fn reparse_of_reserialized_note_is_equal() {
        let note =
            extract_note(r##"{"title":"T","body":"B","hashtags":["#a"],"emojis":["e"]}"##)
                .unwrap();
        let reserialized = serde_json::to_string(&note).unwrap();
        assert_eq!(extract_note(&reserialized).unwrap(), note);
    }
}
