//! Chat session and message exchange for the Wayfarer concierge widget.
//!
//! Provides:
//! - A durable session token kept in a pluggable key-value store
//! - A remote chat endpoint client (HTTP/JSON) behind a trait
//! - Conversation bootstrap from history, a greeting, or a local fallback
//! - An exchange controller that runs one message round trip at a time
//!   and never surfaces backend failures to its caller

pub mod bootstrap;
pub mod controller;
pub mod conversation;
pub mod endpoint;
pub mod identity;
pub mod settings;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;

pub use bootstrap::{Bootstrapped, Bootstrapper};
pub use controller::{ExchangeController, IgnoreReason, SubmitOutcome};
pub use endpoint::{ChatEndpoint, HttpEndpoint, HttpEndpointConfig, SendRequest, SendResponse};
pub use identity::{obtain_token, DEFAULT_TOKEN_KEY};
pub use settings::ChatSettings;
pub use storage::{FileStore, KeyValueStore, MemoryStore};

pub use wayfarer_common::{
    BootstrapSource, ConversationEvent, ConversationLog, EndpointError, EventBus, ExchangeState,
    Message, Origin, SessionToken,
};
