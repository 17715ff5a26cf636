//! Inline completion session wrapper
//!
//! Adapts the request lifecycle to the host editor's inline-completion
//! provider surface and counts how many rounds actually served completions.

use std::sync::atomic::{AtomicU64, Ordering};

use ghostwriter_text::{DocumentBuffer, Position};

use crate::cancellation::CancellationToken;
use crate::error::CompletionResult;
use crate::provider::{CompletionProvider, RenderableCompletion};
use crate::status::StatusUpdate;

/// Host-facing inline completion provider
pub struct InlineCompletionSession {
    provider: CompletionProvider,
    completions_provided: AtomicU64,
}

impl InlineCompletionSession {
    /// Wrap a lifecycle provider
    pub fn new(provider: CompletionProvider) -> Self {
        Self {
            provider,
            completions_provided: AtomicU64::new(0),
        }
    }

    /// Entry point the host editor calls on every completion trigger
    ///
    /// Increments the served counter exactly once per round that resolves
    /// with completions; cancelled and empty rounds do not count.
    pub async fn provide_inline_completions(
        &self,
        document: &dyn DocumentBuffer,
        position: Position,
        token: &CancellationToken,
    ) -> CompletionResult<Option<Vec<RenderableCompletion>>> {
        let result = self
            .provider
            .request_completions(document, position, token)
            .await?;
        if result.is_some() {
            self.completions_provided.fetch_add(1, Ordering::Relaxed);
        }
        Ok(result)
    }

    /// Resource-release hook for completions no longer displayed
    ///
    /// Explicitly does nothing: items are not pooled or reference-counted.
    pub fn free_inline_completions(&self) {}

    /// Forward the host's "accept suggestion" command to the service
    pub fn accepted_last_completion(&self, completion_id: &str) {
        self.provider.notify_accepted(completion_id);
    }

    /// Number of rounds that served completions
    pub fn completions_provided(&self) -> u64 {
        self.completions_provided.load(Ordering::Relaxed)
    }

    /// Latest status/message pair of the underlying provider
    pub fn status(&self) -> StatusUpdate {
        self.provider.status()
    }
}
