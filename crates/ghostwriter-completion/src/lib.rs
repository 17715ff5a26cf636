//! Ghostwriter Completion Engine
//!
//! The completion-request orchestration layer: given a live document buffer
//! and a cursor position, it snapshots the buffer, translates the cursor into
//! the protocol's byte coordinates, dispatches one cancellable remote call,
//! and projects the returned byte ranges back into editor positions.
//!
//! # Architecture
//!
//! 1. **Session layer**: [`InlineCompletionSession`] adapts the lifecycle to
//!    the host editor's inline-completion provider surface and counts served
//!    rounds.
//! 2. **Lifecycle layer**: [`CompletionProvider`] owns a single request from
//!    snapshot to resolution and publishes progress through an observable
//!    [`StatusUpdate`].
//! 3. **Transport layer**: `ghostwriter_protocol` carries the wire call; the
//!    lifecycle talks to it through `Arc<dyn CompletionClient>`.
//!
//! # Cancellation
//!
//! Two independent paths are wired synchronously before the single suspension
//! point: the host token's pre-bound cancellation callback, and a dedicated
//! transport-abort token. Some host editors' tokens go inert after an await;
//! correctness never depends on the host token past registration.
//!
//! # Concurrency
//!
//! The lifecycle does not serialize requests. Callers cancel stale requests
//! before issuing new ones; two in-flight requests on one provider race the
//! status pair last-writer-wins, a documented limitation rather than a locked
//! path.

pub mod cancellation;
pub mod error;
pub mod provider;
pub mod session;
pub mod status;

// Re-export public types
pub use cancellation::CancellationToken;
pub use error::{CompletionError, CompletionResult};
pub use provider::{CompletionProvider, RenderableCompletion};
pub use session::InlineCompletionSession;
pub use status::{RequestStatus, StatusUpdate};
