//! Error types for the completion lifecycle

use thiserror::Error;

use ghostwriter_text::TextError;

/// The only error a host editor can see from the lifecycle
///
/// Transport and protocol failures are absorbed into the status/message pair
/// and resolve as "no completions"; a coordinate-translation failure on our
/// own cursor is a programmer error and propagates.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CompletionError {
    /// Text coordinate translation failed
    #[error("Text coordinate error: {0}")]
    Text(#[from] TextError),
}

/// Result alias for completion lifecycle operations
pub type CompletionResult<T> = Result<T, CompletionError>;
