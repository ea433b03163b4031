//! Conversation history as an immutable value type.

use crate::{Message, Role};
use serde::{Deserialize, Serialize};

/// An ordered sequence of role-tagged messages.
///
/// A conversation always begins with exactly one system message followed by
/// one user message; assistant turns are appended as the exchange proceeds.
/// Appending produces a new `Conversation` rather than mutating in place,
/// which keeps each loop iteration replayable in tests.
///
/// # Examples
///
/// ```
/// use rednote_core::{Conversation, Role};
///
/// let conversation = Conversation::seed("You are a copywriter.", "Write a note.");
/// assert_eq!(conversation.messages().len(), 2);
///
/// let next = conversation.with_assistant("draft text");
/// assert_eq!(conversation.messages().len(), 2);
/// assert_eq!(next.messages().len(), 3);
/// assert_eq!(*next.messages()[2].role(), Role::Assistant);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Conversation {
    /// Messages in send order
    messages: Vec<Message>,
}

impl Conversation {
    /// Creates a conversation seeded with a system directive and a user request.
    pub fn seed(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![
                Message::new(Role::System, system),
                Message::new(Role::User, user),
            ],
        }
    }

    /// Returns a new conversation with an assistant turn appended verbatim.
    pub fn with_assistant(&self, content: impl Into<String>) -> Self {
        let mut messages = self.messages.clone();
        messages.push(Message::new(Role::Assistant, content));
        Self { messages }
    }

    /// Number of messages in the conversation.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when the conversation holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
