//! Translate config and flags into chat components.

use std::time::Duration;

use tracing::warn;
use wayfarer_chat::{
    ChatSettings, FileStore, HttpEndpoint, HttpEndpointConfig, KeyValueStore, MemoryStore,
};
use wayfarer_common::{ConfigError, EndpointError};
use wayfarer_config::WayfarerConfig;

use crate::cli::Args;

pub fn load_config(args: &Args) -> Result<WayfarerConfig, ConfigError> {
    match &args.config {
        Some(path) => wayfarer_config::load_config_from(path),
        None => wayfarer_config::load_config(),
    }
}

pub fn chat_settings(config: &WayfarerConfig) -> ChatSettings {
    ChatSettings::default()
        .with_token_key(config.storage.token_key.clone())
        .with_fallback_greeting(config.chat.fallback_greeting.clone())
        .with_error_reply(config.chat.error_reply.clone())
        .with_call_timeout(Duration::from_secs(config.endpoint.request_timeout_secs.into()))
}

pub fn build_store(args: &Args, config: &WayfarerConfig) -> Box<dyn KeyValueStore> {
    if args.ephemeral {
        return Box::new(MemoryStore::new());
    }
    match config.storage.path.clone().or_else(FileStore::default_path) {
        Some(path) => Box::new(FileStore::new(path)),
        None => {
            warn!("no data directory available, session token will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

pub fn build_endpoint(args: &Args, config: &WayfarerConfig) -> Result<HttpEndpoint, EndpointError> {
    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| config.endpoint.base_url.clone());
    HttpEndpoint::new(
        HttpEndpointConfig::new(base_url)
            .with_connect_timeout(Duration::from_secs(config.endpoint.connect_timeout_secs.into()))
            .with_request_timeout(Duration::from_secs(config.endpoint.request_timeout_secs.into())),
    )
}
