use serde::{Deserialize, Serialize};

/// Texts substituted locally when the backend cannot be reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Shown as the only message when bootstrap fails.
    pub fallback_greeting: String,
    /// Appended as the agent reply when a send fails.
    pub error_reply: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            fallback_greeting: "Hello! How can I help you plan your next trip?".into(),
            error_reply: "Sorry, I encountered an error. Please try again later.".into(),
        }
    }
}
