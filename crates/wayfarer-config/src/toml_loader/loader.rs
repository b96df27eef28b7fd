//! Reading `config.toml` into a [`WayfarerConfig`].

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};
use wayfarer_common::ConfigError;

use super::paths::{create_default_config, default_config_path};
use crate::schema::WayfarerConfig;
use crate::validation;

/// Parse the file at `path`, filling absent keys with defaults.
///
/// Out-of-range values are reported through `tracing` but do not fail the
/// load; callers that need a usable endpoint run [`validation::validate`].
pub fn load_from_path(path: &Path) -> Result<WayfarerConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read {}: {e}",
                path.display()
            )))
        }
    };

    let config: WayfarerConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config has invalid values: {e}");
    }
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load the per-user config, writing the commented template on first run.
pub fn load_default() -> Result<WayfarerConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            info!(path = %path.display(), "wrote default config");
            Ok(WayfarerConfig::default())
        }
        other => other,
    }
}
