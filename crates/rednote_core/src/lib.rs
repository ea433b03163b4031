//! Core data types for the Rednote copy generator.
//!
//! This crate provides the foundation data types used across the Rednote
//! workspace: conversation history, generation requests, and the structured
//! note document.

mod conversation;
mod message;
mod note;
mod request;
mod role;

pub use conversation::Conversation;
pub use message::Message;
pub use note::{Note, NoteBuilder};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
