//! Ghostwriter Text Coordinates
//!
//! Pure text mathematics shared by the completion pipeline: conversion between
//! the editor's UTF-16 code-unit offsets and the UTF-8 byte offsets the remote
//! protocol speaks, plus the position/range value types and the document
//! buffer abstraction the lifecycle layer snapshots.
//!
//! # Core Components
//!
//! ## Offset Codec
//! [`code_units_to_byte_offset`] and [`byte_offset_to_code_units`] are pure,
//! deterministic, and exact inverses for every valid input. Offsets landing
//! inside a surrogate pair or off a UTF-8 character boundary are programmer
//! errors and fail fast.
//!
//! ## Coordinate Types
//! [`Position`] is a zero-based line/character pair where `character` counts
//! UTF-16 code units; [`Range`] is an ordered pair of positions.
//!
//! ## Document Adapter
//! [`DocumentBuffer`] exposes live-buffer reads; [`TextDocument`] is the owned
//! line-indexed implementation. [`DocumentSnapshot`] is the immutable capture
//! the request lifecycle takes at entry so later edits cannot alter an
//! in-flight request.

pub mod document;
pub mod error;
pub mod offset;
pub mod position;

// Re-export public types and functions
pub use document::{DocumentBuffer, DocumentSnapshot, TextDocument};
pub use error::{TextError, TextResult};
pub use offset::{byte_offset_to_code_units, code_unit_len, code_units_to_byte_offset};
pub use position::{Position, Range};
