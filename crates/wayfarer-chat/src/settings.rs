//! Tunables for bootstrap and exchange behavior.

use std::time::Duration;

use crate::identity::DEFAULT_TOKEN_KEY;

pub const DEFAULT_FALLBACK_GREETING: &str = "Hello! How can I help you plan your next trip?";
pub const DEFAULT_ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again later.";
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ChatSettings {
    /// Storage key holding the session token.
    pub token_key: String,
    /// Sole message of the log when bootstrap cannot reach the backend.
    pub fallback_greeting: String,
    /// Agent message appended in place of a reply when a send fails.
    pub error_reply: String,
    /// Upper bound on each bootstrap or send call.
    pub call_timeout: Duration,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            fallback_greeting: DEFAULT_FALLBACK_GREETING.to_string(),
            error_reply: DEFAULT_ERROR_REPLY.to_string(),
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }
}

impl ChatSettings {
    pub fn with_token_key(mut self, key: impl Into<String>) -> Self {
        self.token_key = key.into();
        self
    }

    pub fn with_fallback_greeting(mut self, text: impl Into<String>) -> Self {
        self.fallback_greeting = text.into();
        self
    }

    pub fn with_error_reply(mut self, text: impl Into<String>) -> Self {
        self.error_reply = text.into();
        self
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }
}
