//! Full configuration validation.
//!
//! Collects every problem into a single `ConfigError` rather than
//! stopping at the first.


use crate::schema::WayfarerConfig;
use wayfarer_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WayfarerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_endpoint(&mut errors, config);
    validate_chat(&mut errors, config);
    validate_storage(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Push an error if `value` is outside `[min, max]`.
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_not_blank(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

fn validate_endpoint(errors: &mut Vec<String>, config: &WayfarerConfig) {
    let url = &config.endpoint.base_url;
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!("endpoint.base_url = {url:?} must start with http:// or https://"));
    }
    validate_range(
        errors,
        "endpoint.request_timeout_secs",
        config.endpoint.request_timeout_secs,
        1,
        300,
    );
    validate_range(
        errors,
        "endpoint.connect_timeout_secs",
        config.endpoint.connect_timeout_secs,
        1,
        300,
    );
}

fn validate_chat(errors: &mut Vec<String>, config: &WayfarerConfig) {
    validate_not_blank(errors, "chat.fallback_greeting", &config.chat.fallback_greeting);
    validate_not_blank(errors, "chat.error_reply", &config.chat.error_reply);
}

fn validate_storage(errors: &mut Vec<String>, config: &WayfarerConfig) {
    validate_not_blank(errors, "storage.token_key", &config.storage.token_key);
}
