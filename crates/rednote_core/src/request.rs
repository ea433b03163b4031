//! Request and response types for LLM generation.

use crate::{Conversation, Message};
use serde::{Deserialize, Serialize};

/// Generic generation request.
///
/// # Examples
///
/// ```
/// use rednote_core::{Conversation, GenerateRequest};
///
/// let conversation = Conversation::seed("system", "user");
/// let request = GenerateRequest::builder()
///     .messages(conversation.messages().clone())
///     .temperature(Some(0.8))
///     .build()
///     .unwrap();
/// assert_eq!(request.messages().len(), 2);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Conversation messages in send order
    messages: Vec<Message>,
    /// Maximum tokens to generate
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
}

impl GenerateRequest {
    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Builds a request carrying the full conversation with no sampling overrides.
    pub fn from_conversation(conversation: &Conversation) -> Self {
        Self {
            messages: conversation.messages().clone(),
            max_tokens: None,
            temperature: None,
        }
    }
}

/// The unified response object.
///
/// `content` is `None` when the provider returned a response that carries
/// no assistant text at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// Assistant text, if any
    content: Option<String>,
}

impl GenerateResponse {
    /// Creates a response from optional assistant content.
    pub fn new(content: Option<String>) -> Self {
        Self { content }
    }
}
