//! Push sender port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::push::Push;

/// Errors from delivering a push to the remote service
#[derive(Debug, Clone, Error)]
pub enum PushSendError {
    /// Connection, timeout, or other I/O failure before a response arrived
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body could not be interpreted
    #[error("Failed to parse push service response: {0}")]
    Parse(String),

    /// The service answered with an error payload
    #[error("Push rejected by service: {0}")]
    Rejected(String),
}

/// Port for delivering pushes to the remote service
#[async_trait]
pub trait PushSender: Send + Sync {
    /// Deliver a push authenticated by the given access token.
    ///
    /// # Arguments
    /// * `token` - The sending bot's access token
    /// * `push` - The payload to deliver
    ///
    /// # Returns
    /// Ok(()) when the service accepted the push
    async fn send(&self, token: &str, push: &Push) -> Result<(), PushSendError>;
}

/// Blanket implementation for boxed sender types
#[async_trait]
impl PushSender for Box<dyn PushSender> {
    async fn send(&self, token: &str, push: &Push) -> Result<(), PushSendError> {
        self.as_ref().send(token, push).await
    }
}
