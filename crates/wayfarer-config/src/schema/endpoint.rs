//! Remote chat endpoint configuration.

use serde::{Deserialize, Serialize};

/// Where the chat backend lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL; operations are resolved under `{base_url}/chat/...`.
    pub base_url: String,
    /// Whole-request timeout in seconds (valid range: 1-300).
    pub request_timeout_secs: u32,
    /// Connect timeout in seconds (valid range: 1-300).
    pub connect_timeout_secs: u32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".into(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}
