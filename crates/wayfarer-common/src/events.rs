use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::message::Message;

/// Whether the conversation accepts new user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExchangeState {
    Idle,
    /// A send is in flight; presentation shows the typing indicator.
    AwaitingReply,
}

/// Where the initial conversation log came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootstrapSource {
    History,
    Greeting,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ConversationEvent {
    Bootstrapped {
        source: BootstrapSource,
        count: usize,
    },
    MessageAppended(Message),
    StateChanged(ExchangeState),
}

pub struct EventBus {
    sender: broadcast::Sender<ConversationEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ConversationEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
