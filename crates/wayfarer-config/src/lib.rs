//! Wayfarer configuration system.
//!
//! TOML-based configuration for the chat client: where the remote chat
//! endpoint lives, how long to wait for it, the texts shown when it is
//! unreachable, where the session token is persisted, and log verbosity.
//! Every section has defaults so partial files work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wayfarer_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ChatConfig, EndpointConfig, LogLevel, LoggingConfig, StorageConfig, WayfarerConfig,
    CONFIG_SCHEMA_VERSION,
};
pub use toml_loader::{load_default, load_from_path};

use std::path::Path;

use wayfarer_common::ConfigError;

/// Load config from the platform default path and validate it strictly.
///
/// Creates a documented default `config.toml` if none exists.
pub fn load_config() -> Result<WayfarerConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it strictly.
pub fn load_config_from(path: &Path) -> Result<WayfarerConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &WayfarerConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
