//! ChatEndpoint trait implementation for HttpEndpoint.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use wayfarer_common::{EndpointError, Message, SessionToken};

use super::client::{transport_error, HttpEndpoint};
use super::{ChatEndpoint, GreetingResponse, SendRequest, SendResponse};

#[async_trait]
impl ChatEndpoint for HttpEndpoint {
    async fn fetch_greeting(&self) -> Result<String, EndpointError> {
        let url = self.greeting_url();
        debug!(%url, "fetching greeting");

        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        let body: GreetingResponse = decode(response).await?;
        Ok(body.greeting_message)
    }

    async fn fetch_history(&self, token: &SessionToken) -> Result<Vec<Message>, EndpointError> {
        let url = self.history_url(token)?;
        debug!(%url, "fetching history");

        let response = self.http.get(url).send().await.map_err(transport_error)?;
        let messages: Vec<Message> = decode(response).await?;
        debug!(count = messages.len(), "history received");
        Ok(messages)
    }

    async fn send_message(&self, request: &SendRequest) -> Result<SendResponse, EndpointError> {
        let url = self.message_url();
        debug!(%url, session = %request.session_token, "sending message");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }
}

/// Check the status, then parse the body as JSON.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, EndpointError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let body = text.chars().take(200).collect::<String>();
        return Err(EndpointError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let text = response.text().await.map_err(transport_error)?;
    serde_json::from_str(&text).map_err(|e| EndpointError::Parse(e.to_string()))
}
