//! Remote chat endpoint.
//!
//! Three operations: fetch a greeting, fetch the history of a session,
//! and send a user message. Every call returns `Result<_, EndpointError>`;
//! callers decide how to recover.

mod api;
mod client;

#[cfg(test)]
mod tests;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wayfarer_common::{EndpointError, Message, Origin, SessionToken};

pub use client::{HttpEndpoint, HttpEndpointConfig};

#[async_trait]
pub trait ChatEndpoint: Send + Sync {
    async fn fetch_greeting(&self) -> Result<String, EndpointError>;

    /// Messages of `token`'s conversation in server order; may be empty.
    async fn fetch_history(&self, token: &SessionToken) -> Result<Vec<Message>, EndpointError>;

    async fn send_message(&self, request: &SendRequest) -> Result<SendResponse, EndpointError>;
}

/// Body of a send-message call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRequest {
    #[serde(rename = "sessionId")]
    pub session_token: SessionToken,
    pub text: String,
    #[serde(rename = "sender")]
    pub origin: Origin,
}

impl SendRequest {
    pub fn user(session_token: SessionToken, text: impl Into<String>) -> Self {
        Self {
            session_token,
            text: text.into(),
            origin: Origin::User,
        }
    }
}

/// The stored user message echoed back, and the agent's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResponse {
    pub user_message: Message,
    pub bot_message: Message,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GreetingResponse {
    pub greeting_message: String,
}

/// Run an endpoint call, turning expiry of `limit` into `EndpointError::Timeout`.
pub async fn call_with_timeout<T, F>(limit: Duration, call: F) -> Result<T, EndpointError>
where
    F: Future<Output = Result<T, EndpointError>>,
{
    tokio::time::timeout(limit, call)
        .await
        .unwrap_or(Err(EndpointError::Timeout))
}
