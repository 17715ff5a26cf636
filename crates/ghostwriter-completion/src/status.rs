//! Observable request status
//!
//! The progress of a completion request is a single-writer observable value:
//! a `tokio::sync::watch` channel holding the latest status/message pair. UI
//! layers subscribe instead of polling; the lifecycle is the only writer.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Progress of the most recent completion request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// No request has run yet
    #[default]
    Idle,
    /// A request is in flight
    Processing,
    /// The last request resolved, possibly with zero completions
    Success,
    /// The last request failed
    Error,
}

/// Status paired with a human-readable message for UI feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StatusUpdate {
    /// Current status
    pub status: RequestStatus,
    /// Message describing the status
    pub message: String,
}

impl StatusUpdate {
    /// Create a status update
    pub fn new(status: RequestStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Single-writer publisher for [`StatusUpdate`] values
///
/// Concurrent requests on one provider race this last-writer-wins; the
/// lifecycle documents that callers cancel stale requests rather than
/// locking here.
pub(crate) struct StatusChannel {
    tx: watch::Sender<StatusUpdate>,
}

impl StatusChannel {
    pub(crate) fn new() -> Self {
        let (tx, _rx) = watch::channel(StatusUpdate::default());
        Self { tx }
    }

    /// Publish a new value, replacing the current one
    pub(crate) fn publish(&self, update: StatusUpdate) {
        self.tx.send_replace(update);
    }

    /// Latest published value
    pub(crate) fn current(&self) -> StatusUpdate {
        self.tx.borrow().clone()
    }

    /// Subscribe to future values
    pub(crate) fn subscribe(&self) -> watch::Receiver<StatusUpdate> {
        self.tx.subscribe()
    }
}
