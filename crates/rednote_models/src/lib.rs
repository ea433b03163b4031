//! LLM provider integrations for the Rednote copy generator.

mod deepseek;

pub use deepseek::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatUsage, DEEPSEEK_API_KEY,
    DEFAULT_BASE_URL, DeepSeekClient, from_chat_response, to_chat_request,
};
