//! Error types for text coordinate translation

use thiserror::Error;

/// Errors that can occur during offset and position translation
///
/// These are programmer errors: every offset handed to this crate is either
/// derived from the document itself or validated by the caller, so an invalid
/// one indicates a bug and fails fast rather than being recovered.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TextError {
    /// Offset is out of range or does not address a character boundary
    #[error("Invalid offset: {0}")]
    InvalidOffset(String),

    /// Position does not address a location inside the document
    #[error("Invalid position: {0}")]
    InvalidPosition(String),
}

impl TextError {
    /// Create an invalid-offset error
    pub fn invalid_offset(msg: impl Into<String>) -> Self {
        TextError::InvalidOffset(msg.into())
    }

    /// Create an invalid-position error
    pub fn invalid_position(msg: impl Into<String>) -> Self {
        TextError::InvalidPosition(msg.into())
    }
}

/// Result alias for text coordinate operations
pub type TextResult<T> = Result<T, TextError>;
