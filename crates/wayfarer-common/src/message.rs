//! Conversation messages and the append-only log that holds them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::SessionToken;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "bot")]
    Agent,
}

/// One entry of a conversation, in the endpoint's JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "sessionId")]
    pub session_token: SessionToken,
    pub text: String,
    #[serde(rename = "sender")]
    pub origin: Origin,
    /// Assigned by the server; locally synthesized messages have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Message {
    pub fn user(session_token: SessionToken, text: impl Into<String>) -> Self {
        Self {
            session_token,
            text: text.into(),
            origin: Origin::User,
            created_at: None,
        }
    }

    pub fn agent(session_token: SessionToken, text: impl Into<String>) -> Self {
        Self {
            session_token,
            text: text.into(),
            origin: Origin::Agent,
            created_at: None,
        }
    }

    pub fn is_agent(&self) -> bool {
        self.origin == Origin::Agent
    }
}

/// Ordered messages of one conversation.
///
/// Append-only: there is no way to edit or remove an entry once pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }
}

impl From<Vec<Message>> for ConversationLog {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

impl<'a> IntoIterator for &'a ConversationLog {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
