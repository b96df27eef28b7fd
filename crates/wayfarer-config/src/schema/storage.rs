use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Durable local storage for the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the storage file. Defaults to the platform data dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Key under which the session token is stored.
    pub token_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            token_key: "chatSessionId".into(),
        }
    }
}
