//! Conversation activation: identity, then bootstrap, then exchanges.

use std::sync::Arc;

use tracing::info;
use wayfarer_common::{ConversationEvent, EventBus};

use crate::bootstrap::Bootstrapper;
use crate::controller::ExchangeController;
use crate::endpoint::ChatEndpoint;
use crate::identity::obtain_token;
use crate::settings::ChatSettings;
use crate::storage::KeyValueStore;

impl ExchangeController {
    /// Bring a conversation up: reuse or mint the session token, build the
    /// initial log, and return a controller in `Idle`.
    ///
    /// Subscribe to `events` before calling to observe the bootstrap.
    pub async fn activate(
        store: &dyn KeyValueStore,
        endpoint: Arc<dyn ChatEndpoint>,
        settings: &ChatSettings,
        events: Arc<EventBus>,
    ) -> Self {
        let token = obtain_token(store, &settings.token_key);
        let boot = Bootstrapper::new(Arc::clone(&endpoint), settings)
            .bootstrap(&token)
            .await;

        events.publish(ConversationEvent::Bootstrapped {
            source: boot.source,
            count: boot.log.len(),
        });
        info!(session = %token, messages = boot.log.len(), "conversation ready");

        ExchangeController::new(token, endpoint, boot.log, settings).with_event_bus(events)
    }
}
