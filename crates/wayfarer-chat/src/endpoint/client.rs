//! HTTP endpoint client struct, URL building, and error mapping.

use std::time::Duration;

use wayfarer_common::{EndpointError, SessionToken};

/// Where the chat backend lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct HttpEndpointConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl HttpEndpointConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// JSON-over-HTTP chat endpoint.
pub struct HttpEndpoint {
    pub(crate) config: HttpEndpointConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpEndpoint {
    pub fn new(config: HttpEndpointConfig) -> Result<Self, EndpointError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| EndpointError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &HttpEndpointConfig {
        &self.config
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    pub(crate) fn greeting_url(&self) -> String {
        format!("{}/chat/greeting", self.base())
    }

    pub(crate) fn message_url(&self) -> String {
        format!("{}/chat/message", self.base())
    }

    /// History URL with the token as a single percent-encoded path segment.
    pub(crate) fn history_url(&self, token: &SessionToken) -> Result<reqwest::Url, EndpointError> {
        let mut url = reqwest::Url::parse(&format!("{}/chat/history", self.base()))
            .map_err(|e| EndpointError::Network(format!("invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| EndpointError::Network("base URL cannot carry a path".into()))?
            .push(token.as_str());
        Ok(url)
    }
}

/// Classify a reqwest failure.
pub(crate) fn transport_error(e: reqwest::Error) -> EndpointError {
    if e.is_timeout() {
        EndpointError::Timeout
    } else if e.is_decode() {
        EndpointError::Parse(e.to_string())
    } else {
        EndpointError::Network(e.to_string())
    }
}
