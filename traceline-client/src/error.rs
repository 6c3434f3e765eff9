//! Error types for the client layer.

use crate::credentials::CredentialError;
use traceline_api::ErrorCategory;

/// Error produced by the HTTP adapter and resource modules.
///
/// Non-2xx responses other than 401 become [`ClientError::Api`] with the
/// status, derived category, and the backend's `detail` string. 401 is
/// handled globally (credentials cleared, login redirect signalled) and then
/// surfaced as [`ClientError::Unauthorized`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API error ({status}): {detail}")]
    Api {
        status: u16,
        category: ErrorCategory,
        detail: String,
    },
    #[error("unauthorized")]
    Unauthorized,
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Credentials(#[from] CredentialError),
}

impl ClientError {
    /// HTTP status of the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Unauthorized => Some(401),
            ClientError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
