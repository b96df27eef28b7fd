//! Scripted in-memory endpoint for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;
use wayfarer_common::{EndpointError, Message, SessionToken};

use crate::endpoint::{ChatEndpoint, SendRequest, SendResponse};

pub(crate) struct ScriptedEndpoint {
    greeting: Result<String, EndpointError>,
    history: Result<Vec<Message>, EndpointError>,
    /// Reply texts consumed in order; once empty, replies echo the input.
    replies: Mutex<VecDeque<Result<String, EndpointError>>>,
    /// Replaces the bot message of every send response.
    bot_message: Option<Message>,
    send_delay: Option<Duration>,
    gate: Option<Arc<Notify>>,
    greeting_calls: AtomicUsize,
    history_calls: AtomicUsize,
    sent: Mutex<Vec<SendRequest>>,
}

impl ScriptedEndpoint {
    pub(crate) fn new() -> Self {
        Self {
            greeting: Ok("Hello".into()),
            history: Ok(Vec::new()),
            replies: Mutex::new(VecDeque::new()),
            bot_message: None,
            send_delay: None,
            gate: None,
            greeting_calls: AtomicUsize::new(0),
            history_calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_greeting(mut self, result: Result<&str, EndpointError>) -> Self {
        self.greeting = result.map(String::from);
        self
    }

    pub(crate) fn with_history(mut self, result: Result<Vec<Message>, EndpointError>) -> Self {
        self.history = result;
        self
    }

    pub(crate) fn with_reply(self, result: Result<&str, EndpointError>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(result.map(String::from));
        self
    }

    pub(crate) fn with_bot_message(mut self, message: Message) -> Self {
        self.bot_message = Some(message);
        self
    }

    pub(crate) fn with_send_delay(mut self, delay: Duration) -> Self {
        self.send_delay = Some(delay);
        self
    }

    /// Hold every send until the gate is notified.
    pub(crate) fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn greeting_calls(&self) -> usize {
        self.greeting_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn sent(&self) -> Vec<SendRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatEndpoint for ScriptedEndpoint {
    async fn fetch_greeting(&self) -> Result<String, EndpointError> {
        self.greeting_calls.fetch_add(1, Ordering::SeqCst);
        self.greeting.clone()
    }

    async fn fetch_history(&self, _token: &SessionToken) -> Result<Vec<Message>, EndpointError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        self.history.clone()
    }

    async fn send_message(&self, request: &SendRequest) -> Result<SendResponse, EndpointError> {
        self.sent.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if let Some(delay) = self.send_delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self.replies.lock().unwrap().pop_front();
        let reply = match scripted {
            Some(result) => result?,
            None => format!("echo: {}", request.text),
        };
        let bot_message = self
            .bot_message
            .clone()
            .unwrap_or_else(|| Message::agent(request.session_token.clone(), reply));
        Ok(SendResponse {
            user_message: Message::user(request.session_token.clone(), request.text.clone()),
            bot_message,
        })
    }
}
