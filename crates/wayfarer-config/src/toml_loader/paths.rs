//! Where the per-user config lives.

use std::path::{Path, PathBuf};

use wayfarer_common::ConfigError;

use super::template::default_config_toml;

const APP_DIR: &str = "wayfarer";
const FILE_NAME: &str = "config.toml";

/// `<config dir>/wayfarer/config.toml`, e.g. `~/.config/wayfarer/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no per-user config directory on this platform".into()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_failed = |e: std::io::Error| {
        ConfigError::ParseError(format!("cannot write default config {}: {e}", path.display()))
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_failed)?;
    }
    std::fs::write(path, default_config_toml()).map_err(write_failed)
}
