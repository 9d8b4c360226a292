//! Client errors

use thiserror::Error;

/// Error returned by a `createProject` call
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API answered with a non-success status
    #[error("API responded with {status}")]
    Api { status: u16, message: Option<String> },

    /// The request never got a response
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
}

impl ClientError {
    /// Human-readable message, if the failure carries one
    pub fn message(&self) -> Option<&str> {
        let message = match self {
            ClientError::Api { message, .. } => message.as_deref(),
            ClientError::Transport { message, .. } => Some(message.as_str()),
        };
        message.filter(|m| !m.trim().is_empty())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport {
            message: err.to_string(),
            source: Some(err),
        }
    }
}
