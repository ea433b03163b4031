//! Type conversions between Rednote and chat completions formats.

use crate::deepseek::{ChatMessage, ChatRequest, ChatResponse};
use rednote_core::{GenerateRequest, GenerateResponse, Role};
use rednote_error::{DeepSeekError, DeepSeekErrorKind};

/// Converts a Rednote GenerateRequest to the chat completions format.
pub fn to_chat_request(
    req: &GenerateRequest,
    model: &str,
) -> Result<ChatRequest, DeepSeekError> {
    let messages = req
        .messages()
        .iter()
        .map(|msg| {
            let role = match msg.role() {
                Role::System => "system",
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            ChatMessage {
                role: role.to_string(),
                content: msg.content().clone(),
            }
        })
        .collect::<Vec<_>>();

    let mut builder = ChatRequest::builder();
    builder.model(model.to_string()).messages(messages);

    if let Some(max_tokens) = req.max_tokens() {
        builder.max_tokens(Some(*max_tokens));
    }

    if let Some(temp) = req.temperature() {
        builder.temperature(Some(*temp));
    }

    builder.build().map_err(|e| {
        DeepSeekError::new(DeepSeekErrorKind::Builder(format!(
            "Failed to build request: {}",
            e
        )))
    })
}

/// Converts a chat completions response to a Rednote GenerateResponse.
///
/// A response with no choices, or whose first choice carries an empty
/// message body, maps to `None` content. The loop treats that as the
/// model having nothing further to say. Whitespace-only content still
/// counts as content; it fails extraction and drives a retry instead.
pub fn from_chat_response(response: &ChatResponse) -> GenerateResponse {
    let content = response.choices.first().and_then(|choice| {
        if choice.message.content.is_empty() {
            None
        } else {
            Some(choice.message.content.clone())
        }
    });

    GenerateResponse::new(content)
}
