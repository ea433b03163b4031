//! DeepSeek chat completions client.
//!
//! The wire format is the OpenAI chat completions shape, so this module also
//! works against Ollama and other compatible gateways by pointing the base
//! URL at them.

mod client;
mod conversions;
mod dto;

pub use client::{DEEPSEEK_API_KEY, DEFAULT_BASE_URL, DeepSeekClient};
pub use conversions::{from_chat_response, to_chat_request};
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatUsage};
