//! Prompt construction for the note-writing persona.

/// Fixed persona and format directive sent as the system message.
pub const SYSTEM_PROMPT: &str = r##"You are a seasoned viral social-media copywriter who blends current trends with product selling points to create engaging, high-conversion marketing notes.

Your task is to take the product and requirements the user provides and produce a complete note with a title, body, relevant hashtags, and emoji.

Reason step by step before writing. The copy should be lively, sincere, and infectious. When the note is finished, output the final copy directly as JSON in this exact shape:
```json
{
  "title": "note title",
  "body": "note body",
  "hashtags": ["#tag1", "#tag2", "#tag3", "#tag4", "#tag5"],
  "emojis": ["sparkles", "fire", "heart"]
}
```
Be sure to think through and gather enough detail before generating the copy."##;

/// Builds the user instruction embedding the subject and tone.
pub fn user_prompt(subject: &str, style: &str) -> String {
    format!(
        "Write a viral-style marketing note for the product \"{subject}\". \
         Requirements: a {style} tone, with a title, body, at least 5 relevant \
         hashtags, and 5 emoji. Output the complete JSON and make sure it is \
         wrapped in a markdown code block (for example: ```json{{...}}```)."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_embeds_subject_and_style() {
        let prompt = user_prompt("Radiance Repair Serum", "mischievous");
        assert!(prompt.contains("Radiance Repair Serum"));
        assert!(prompt.contains("mischievous"));
        assert!(prompt.contains("```json"));
    }
}
