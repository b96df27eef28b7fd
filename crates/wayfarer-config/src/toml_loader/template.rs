//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Wayfarer Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[endpoint]
base_url = "http://localhost:3000/api"
# request_timeout_secs = 30   # 1-300
# connect_timeout_secs = 10   # 1-300

[chat]
# Shown when neither history nor a greeting can be fetched.
# fallback_greeting = "Hello! How can I help you plan your next trip?"
# Appended as the reply when a message cannot be sent.
# error_reply = "Sorry, I encountered an error. Please try again later."

[storage]
# path = "/path/to/storage.json"   # defaults to the platform data dir
# token_key = "chatSessionId"

[logging]
# level = "INFO"   # DEBUG, INFO, WARNING, ERROR
"##
}
