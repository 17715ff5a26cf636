//! Error types for the completion protocol

use thiserror::Error;

/// Errors that can occur when talking to the completion service
///
/// `Cancelled` is the distinguished outcome of an aborted dispatch and is
/// expected, not a failure; callers must never fold it into the other
/// variants.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ProtocolError {
    /// Dispatch was aborted through the transport-abort token
    #[error("Request cancelled")]
    Cancelled,

    /// Authentication failed (never includes credential details)
    #[error("Authentication failed")]
    AuthFailed,

    /// Rate limited by the completion service
    #[error("Rate limited by the completion service")]
    RateLimited,

    /// Network or HTTP-level error
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body did not match the wire contract
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias for protocol operations
pub type ProtocolResult<T> = Result<T, ProtocolError>;

impl From<reqwest::Error> for ProtocolError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProtocolError::Transport("Request timeout".to_string())
        } else if err.is_decode() {
            ProtocolError::InvalidResponse(err.to_string())
        } else {
            ProtocolError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProtocolError {
    fn from(err: serde_json::Error) -> Self {
        ProtocolError::InvalidResponse(err.to_string())
    }
}
