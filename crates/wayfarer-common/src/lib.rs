pub mod errors;
pub mod events;
pub mod id;
pub mod message;

pub use errors::{ConfigError, EndpointError, StorageError, WayfarerError};
pub use events::{BootstrapSource, ConversationEvent, EventBus, ExchangeState};
pub use id::{new_session_token, SessionToken};
pub use message::{ConversationLog, Message, Origin};

pub type Result<T> = std::result::Result<T, WayfarerError>;
