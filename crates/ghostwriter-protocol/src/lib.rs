//! Ghostwriter Protocol
//!
//! The fixed wire contract with the remote completion service and the HTTP
//! transport that speaks it.
//!
//! # Core Components
//!
//! ## Wire Types
//! Serde camelCase structs for the two calls the service exposes:
//! `get_completions` (document text, language, cursor byte offset, editor
//! options) and `accept_completion` (completion id). Optional response fields
//! model malformed items, which callers drop rather than treat as errors.
//!
//! ## Session Metadata
//! [`SessionMetadata`] identifies the caller on every request: ide and
//! extension name/version, the api key, and a generated session id. The
//! `Authorization` header is derived from the key and session id.
//!
//! ## Transport
//! [`CompletionClient`] is the seam the lifecycle layer dispatches through;
//! [`HttpCompletionClient`] is the reqwest implementation. Dispatch takes a
//! transport-abort token and maps an abort to the distinguished
//! [`ProtocolError::Cancelled`], which callers must tell apart from every
//! other failure.

pub mod client;
pub mod error;
pub mod language;
pub mod metadata;
pub mod wire;

// Re-export public types and traits
pub use client::{CompletionClient, HttpCompletionClient};
pub use error::{ProtocolError, ProtocolResult};
pub use language::Language;
pub use metadata::SessionMetadata;
pub use wire::{
    AcceptCompletionRequest, ByteRange, Completion, CompletionItem, DocumentInfo, EditorOptions,
    GetCompletionsRequest, GetCompletionsResponse,
};

/// Line ending reported for every outgoing document payload
pub const LINE_ENDING: &str = "\n";
