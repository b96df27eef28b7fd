//! Per-message exchange with the remote endpoint.
//!
//! `ExchangeController` owns the conversation log and the two-state
//! machine (`Idle`, `AwaitingReply`). One exchange is in flight at a
//! time; a submit arriving while a reply is pending is dropped, not queued.

mod guard;


use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{debug, warn};
use wayfarer_common::{
    ConversationEvent, ConversationLog, EndpointError, EventBus, ExchangeState, Message, Origin,
    SessionToken,
};

use crate::endpoint::{call_with_timeout, ChatEndpoint, SendRequest, SendResponse};
use crate::settings::ChatSettings;

use guard::BusyGuard;

/// What a call to `submit` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing appended, state untouched.
    Ignored(IgnoreReason),
    /// The endpoint's reply was appended.
    Replied,
    /// The send failed and the local error reply was appended.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    EmptyInput,
    Busy,
}

pub struct ExchangeController {
    token: SessionToken,
    endpoint: Arc<dyn ChatEndpoint>,
    log: RwLock<ConversationLog>,
    /// Pending, not yet submitted user input.
    draft: RwLock<String>,
    busy: AtomicBool,
    events: Arc<EventBus>,
    error_reply: String,
    call_timeout: Duration,
}

impl ExchangeController {
    /// Start in `Idle` with a bootstrapped log.
    pub fn new(
        token: SessionToken,
        endpoint: Arc<dyn ChatEndpoint>,
        initial: ConversationLog,
        settings: &ChatSettings,
    ) -> Self {
        Self {
            token,
            endpoint,
            log: RwLock::new(initial),
            draft: RwLock::new(String::new()),
            busy: AtomicBool::new(false),
            events: Arc::new(EventBus::default()),
            error_reply: settings.error_reply.clone(),
            call_timeout: settings.call_timeout,
        }
    }

    pub fn with_event_bus(mut self, events: Arc<EventBus>) -> Self {
        self.events = events;
        self
    }

    /// Submit one user message and wait for the exchange to finish.
    ///
    /// Blank input, or input arriving while a reply is pending, is ignored.
    /// Otherwise the user message is appended immediately and kept no
    /// matter what, followed by either the agent's reply or the local
    /// error reply. Never returns an error; the controller is always back
    /// in `Idle` when this returns.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            debug!("ignoring blank submission");
            return SubmitOutcome::Ignored(IgnoreReason::EmptyInput);
        }
        let Some(_guard) = BusyGuard::acquire(&self.busy, &self.events) else {
            debug!("ignoring submission while awaiting reply");
            return SubmitOutcome::Ignored(IgnoreReason::Busy);
        };

        self.append(Message::user(self.token.clone(), text));
        self.write_draft(String::new());
        self.events
            .publish(ConversationEvent::StateChanged(ExchangeState::AwaitingReply));

        let request = SendRequest::user(self.token.clone(), text);
        let sent = call_with_timeout(self.call_timeout, self.endpoint.send_message(&request))
            .await
            .and_then(|response| self.accept_reply(response));

        match sent {
            Ok(reply) => {
                debug!(session = %self.token, "reply received");
                self.append(reply);
                SubmitOutcome::Replied
            }
            Err(e) => {
                warn!(session = %self.token, error = %e, "send failed, appending error reply");
                self.append(Message::agent(self.token.clone(), self.error_reply.clone()));
                SubmitOutcome::Failed
            }
        }
    }

    /// Submit whatever is in the draft buffer.
    pub async fn submit_draft(&self) -> SubmitOutcome {
        let text = self.draft();
        self.submit(&text).await
    }

    pub fn state(&self) -> ExchangeState {
        if self.busy.load(Ordering::Acquire) {
            ExchangeState::AwaitingReply
        } else {
            ExchangeState::Idle
        }
    }

    /// Whether presentation should show the typing indicator.
    pub fn is_typing(&self) -> bool {
        self.state() == ExchangeState::AwaitingReply
    }

    pub fn token(&self) -> &SessionToken {
        &self.token
    }

    /// Snapshot of the log.
    pub fn messages(&self) -> Vec<Message> {
        self.read_log().as_slice().to_vec()
    }

    pub fn message_count(&self) -> usize {
        self.read_log().len()
    }

    pub fn draft(&self) -> String {
        self.draft
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.write_draft(text.into());
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.events.subscribe()
    }

    /// The reply must be an agent message for this session.
    fn accept_reply(&self, response: SendResponse) -> Result<Message, EndpointError> {
        let reply = response.bot_message;
        if reply.origin != Origin::Agent {
            return Err(EndpointError::Parse(format!(
                "reply has origin {:?}, expected agent",
                reply.origin
            )));
        }
        if reply.session_token != self.token {
            return Err(EndpointError::Parse(format!(
                "reply belongs to session {}",
                reply.session_token
            )));
        }
        Ok(reply)
    }

    fn read_log(&self) -> std::sync::RwLockReadGuard<'_, ConversationLog> {
        self.log.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn append(&self, message: Message) {
        self.log
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.clone());
        self.events.publish(ConversationEvent::MessageAppended(message));
    }

    fn write_draft(&self, text: String) {
        *self.draft.write().unwrap_or_else(PoisonError::into_inner) = text;
    }
}
