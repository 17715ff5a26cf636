//! Completion request lifecycle
//!
//! One request runs: snapshot, cursor translation, listener registration,
//! a single awaited dispatch, response projection. Every step except the
//! dispatch is synchronous, so a cancellation firing at any moment is
//! observed either by the pre-registered listeners or by the abort check
//! inside the transport.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken as AbortToken;
use tracing::{debug, warn};

use ghostwriter_protocol::{
    AcceptCompletionRequest, ByteRange, CompletionClient, DocumentInfo, EditorOptions,
    GetCompletionsRequest, Language, ProtocolError, SessionMetadata, LINE_ENDING,
};
use ghostwriter_text::{
    byte_offset_to_code_units, code_units_to_byte_offset, DocumentBuffer, DocumentSnapshot,
    Position, Range, TextDocument, TextResult,
};

use crate::cancellation::CancellationToken;
use crate::error::CompletionResult;
use crate::status::{RequestStatus, StatusChannel, StatusUpdate};

const MSG_PROCESSING: &str = "Generating completions...";
const MSG_EMPTY: &str = "No completions were generated";
const MSG_FAILURE: &str = "An error occurred while generating completions";

/// Completion projected into editor coordinates, ready for the text widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderableCompletion {
    /// Service-assigned completion id
    pub completion_id: String,
    /// Text to display and insert
    pub text: String,
    /// Span the completion replaces, in code-unit coordinates
    pub range: Range,
}

/// Orchestrates a single completion request against the remote service
///
/// Holds the session identity, the editor options forwarded on every call,
/// and the observable status pair. Does not serialize requests: callers
/// cancel a stale request before issuing the next one.
pub struct CompletionProvider {
    client: Arc<dyn CompletionClient>,
    metadata: SessionMetadata,
    editor_options: EditorOptions,
    status: StatusChannel,
}

impl CompletionProvider {
    /// Create a provider with default editor options
    pub fn new(client: Arc<dyn CompletionClient>, metadata: SessionMetadata) -> Self {
        Self::with_editor_options(client, metadata, EditorOptions::default())
    }

    /// Create a provider with explicit editor options
    pub fn with_editor_options(
        client: Arc<dyn CompletionClient>,
        metadata: SessionMetadata,
        editor_options: EditorOptions,
    ) -> Self {
        Self {
            client,
            metadata,
            editor_options,
            status: StatusChannel::new(),
        }
    }

    /// Latest status/message pair
    pub fn status(&self) -> StatusUpdate {
        self.status.current()
    }

    /// Subscribe to status updates
    pub fn subscribe_status(&self) -> watch::Receiver<StatusUpdate> {
        self.status.subscribe()
    }

    /// Request completions for the cursor position in `document`
    ///
    /// Resolves `Ok(None)` when the round produced nothing to show: the
    /// request was cancelled, the transport failed, or the service returned
    /// zero items. The only `Err` is a coordinate-translation failure on the
    /// caller's own cursor, a programmer error. A cancelled request leaves
    /// the status pair unchanged from its pre-call value.
    pub async fn request_completions(
        &self,
        document: &dyn DocumentBuffer,
        position: Position,
        token: &CancellationToken,
    ) -> CompletionResult<Option<Vec<RenderableCompletion>>> {
        let snapshot = DocumentSnapshot::capture(document);
        let cursor_code_units = document.offset_at(position)?;
        let cursor_byte_offset = code_units_to_byte_offset(snapshot.text(), cursor_code_units)?;

        // Both cancellation paths are wired before the dispatch await. Some
        // host tokens go inert after a suspension point; the dedicated abort
        // token keeps cancellation observable regardless.
        let abort = AbortToken::new();
        let host_token = token.clone();
        token.on_cancellation_requested(move || host_token.invoke_cancellation_callback());
        let dispatch_abort = abort.clone();
        token.on_cancellation_requested(move || dispatch_abort.cancel());

        let previous_status = self.status.current();
        self.status
            .publish(StatusUpdate::new(RequestStatus::Processing, MSG_PROCESSING));

        let request = GetCompletionsRequest {
            metadata: self.metadata.clone(),
            document: DocumentInfo {
                text: snapshot.text().to_string(),
                language_id: snapshot.language_id().to_string(),
                language: Language::from_editor_id(snapshot.language_id()),
                cursor_byte_offset: cursor_byte_offset as u64,
                line_ending: LINE_ENDING.to_string(),
            },
            editor_options: self.editor_options.clone(),
        };

        let response = match self.client.get_completions(&request, &abort).await {
            Ok(response) => response,
            Err(ProtocolError::Cancelled) => {
                debug!("Completion request cancelled");
                // The caller discards this round; the observable keeps no
                // trace of it.
                self.status.publish(previous_status);
                return Ok(None);
            }
            Err(e) => {
                warn!("Completion request failed: {}", e);
                self.status
                    .publish(StatusUpdate::new(RequestStatus::Error, MSG_FAILURE));
                return Ok(None);
            }
        };

        if response.completion_items.is_empty() {
            self.status
                .publish(StatusUpdate::new(RequestStatus::Success, MSG_EMPTY));
            return Ok(None);
        }

        // Back-projection runs against the entry snapshot, not the live
        // buffer, so concurrent edits cannot skew the returned ranges.
        let indexed = snapshot.to_document();
        let mut completions = Vec::with_capacity(response.completion_items.len());
        for item in response.completion_items {
            let (completion, byte_range) = match (item.completion, item.range) {
                (Some(completion), Some(range)) => (completion, range),
                _ => continue,
            };
            match project_range(snapshot.text(), &indexed, byte_range) {
                Ok(range) => completions.push(RenderableCompletion {
                    completion_id: completion.completion_id,
                    text: completion.text,
                    range,
                }),
                Err(e) => {
                    warn!(
                        "Dropping completion {} with undecodable range: {}",
                        completion.completion_id, e
                    );
                }
            }
        }

        let message = match completions.len() {
            1 => "Generated 1 completion".to_string(),
            n => format!("Generated {n} completions"),
        };
        self.status
            .publish(StatusUpdate::new(RequestStatus::Success, message));
        Ok(Some(completions))
    }

    /// Report an accepted completion to the service, fire-and-forget
    ///
    /// Failures are logged and swallowed; the status pair is untouched.
    /// Must be called from within a tokio runtime.
    pub fn notify_accepted(&self, completion_id: &str) {
        let client = Arc::clone(&self.client);
        let request = AcceptCompletionRequest {
            metadata: self.metadata.clone(),
            completion_id: completion_id.to_string(),
        };
        tokio::spawn(async move {
            if let Err(e) = client.accept_completion(&request).await {
                warn!(
                    "Acceptance notification for {} failed: {}",
                    request.completion_id, e
                );
            }
        });
    }
}

/// Translate a protocol byte range into an editor code-unit range
fn project_range(text: &str, document: &TextDocument, range: ByteRange) -> TextResult<Range> {
    let start_units = byte_offset_to_code_units(text, range.start_byte_offset as usize)?;
    let end_units = byte_offset_to_code_units(text, range.end_byte_offset as usize)?;
    Ok(Range::new(
        document.position_at(start_units)?,
        document.position_at(end_units)?,
    ))
}
