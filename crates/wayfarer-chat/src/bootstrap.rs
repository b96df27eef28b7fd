//! Conversation bootstrap.
//!
//! Populates the initial log exactly once per activation, in priority
//! order: server history, then a server greeting, then a fixed local
//! greeting. The result is never empty and never an error.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use wayfarer_common::{BootstrapSource, ConversationLog, EndpointError, Message, SessionToken};

use crate::endpoint::{call_with_timeout, ChatEndpoint};
use crate::settings::ChatSettings;

/// The initial log and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bootstrapped {
    pub log: ConversationLog,
    pub source: BootstrapSource,
}

pub struct Bootstrapper {
    endpoint: Arc<dyn ChatEndpoint>,
    fallback_greeting: String,
    call_timeout: Duration,
}

impl Bootstrapper {
    pub fn new(endpoint: Arc<dyn ChatEndpoint>, settings: &ChatSettings) -> Self {
        Self {
            endpoint,
            fallback_greeting: settings.fallback_greeting.clone(),
            call_timeout: settings.call_timeout,
        }
    }

    pub async fn bootstrap(&self, token: &SessionToken) -> Bootstrapped {
        match self.load(token).await {
            Ok(loaded) => {
                info!(
                    session = %token,
                    source = ?loaded.source,
                    count = loaded.log.len(),
                    "conversation bootstrapped"
                );
                loaded
            }
            Err(e) => {
                warn!(session = %token, error = %e, "bootstrap failed, using fallback greeting");
                self.fallback(token)
            }
        }
    }

    async fn load(&self, token: &SessionToken) -> Result<Bootstrapped, EndpointError> {
        let history = call_with_timeout(self.call_timeout, self.endpoint.fetch_history(token)).await?;
        if !history.is_empty() {
            return Ok(Bootstrapped {
                log: ConversationLog::from(history),
                source: BootstrapSource::History,
            });
        }

        let greeting = call_with_timeout(self.call_timeout, self.endpoint.fetch_greeting()).await?;
        if greeting.trim().is_empty() {
            return Err(EndpointError::Parse("empty greeting".into()));
        }

        let mut log = ConversationLog::new();
        log.push(Message::agent(token.clone(), greeting));
        Ok(Bootstrapped {
            log,
            source: BootstrapSource::Greeting,
        })
    }

    fn fallback(&self, token: &SessionToken) -> Bootstrapped {
        let mut log = ConversationLog::new();
        log.push(Message::agent(token.clone(), self.fallback_greeting.clone()));
        Bootstrapped {
            log,
            source: BootstrapSource::Fallback,
        }
    }
}
