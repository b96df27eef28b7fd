//! Configuration schema types for Wayfarer.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod endpoint;
mod storage;
mod system;

pub use chat::*;
pub use endpoint::*;
pub use storage::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Wayfarer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct WayfarerConfig {
    pub endpoint: EndpointConfig,
    pub chat: ChatConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
