//! Pushbullet API sender adapter

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::application::ports::{PushSendError, PushSender};
use crate::domain::push::Push;

/// Pushbullet API base URL
const API_BASE_URL: &str = "https://api.pushbullet.com/v2";

/// Integration name and version sent with every request
const USER_AGENT: &str = concat!("pushnote / ", env!("CARGO_PKG_VERSION"));

/// Fixed request timeout; there is no retry
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Request types for the pushes endpoint

#[derive(Debug, Serialize)]
struct PushRequest<'a> {
    title: &'a str,
    body: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<&'a str>,
}

// Response types for the pushes endpoint

#[derive(Debug, Deserialize)]
struct PushReply {
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
}

/// Pushbullet push sender
pub struct PushbulletClient {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl PushbulletClient {
    /// Create a client against the public Pushbullet API
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client against a custom base URL (tests, self-hosted proxies)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            client: reqwest::Client::new(),
        }
    }

    /// Replace the fixed request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the pushes endpoint URL
    fn pushes_url(&self) -> String {
        format!("{}/pushes", self.base_url.trim_end_matches('/'))
    }

    /// Build the request body
    fn build_request(push: &Push) -> PushRequest<'_> {
        PushRequest {
            title: &push.title,
            body: &push.body,
            kind: push.kind.as_str(),
            email: push.recipient.email(),
            channel: push.recipient.channel(),
        }
    }
}

impl Default for PushbulletClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PushSender for PushbulletClient {
    async fn send(&self, token: &str, push: &Push) -> Result<(), PushSendError> {
        let url = self.pushes_url();
        let body = Self::build_request(push);

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header("Access-Token", token)
            .json(&body)
            .send()
            .await
            .map_err(|e| PushSendError::Transport(e.to_string()))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| PushSendError::Transport(e.to_string()))?;

        trace!(%status, body = %raw, "push service response");

        // The service reports failures through the error field; the HTTP
        // status only matters when the body is not even parseable.
        let reply: PushReply = match serde_json::from_str(&raw) {
            Ok(reply) => reply,
            Err(e) if status.is_success() => {
                return Err(PushSendError::Parse(e.to_string()));
            }
            Err(_) => {
                return Err(PushSendError::Rejected(format!("HTTP {}", status)));
            }
        };

        if let Some(error) = reply.error {
            return Err(PushSendError::Rejected(
                error
                    .message
                    .unwrap_or_else(|| "unspecified error".to_string()),
            ));
        }

        Ok(())
    }
}
