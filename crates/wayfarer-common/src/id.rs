use serde::{Deserialize, Serialize};
use std::fmt;

const TOKEN_PREFIX: &str = "session_";

/// Generate a fresh session token string.
///
/// UUIDv7 embeds a millisecond timestamp, a per-process monotonic counter
/// and random bits, so tokens minted in the same millisecond still differ.
pub fn new_session_token() -> String {
    format!("{TOKEN_PREFIX}{}", uuid::Uuid::now_v7())
}

/// Opaque correlation key for one visitor's conversation.
///
/// Immutable once issued; every message of the conversation carries it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn generate() -> Self {
        Self(new_session_token())
    }

    /// Wrap a token previously read back from storage, verbatim.
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
