//! Coordinate value types for editor positions and spans

use serde::{Deserialize, Serialize};

/// Position in a document
///
/// Zero-based. `character` counts UTF-16 code units from the line start, the
/// editor's native indexing unit. Ordering is line-major, so the derived
/// comparison matches document order.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub struct Position {
    /// Line number (0-based)
    pub line: u32,
    /// Character position within the line, in UTF-16 code units (0-based)
    pub character: u32,
}

impl Position {
    /// Create a new position
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Span between two positions
///
/// Invariant: `start <= end` in document order. The constructor normalizes
/// reversed pairs rather than rejecting them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Range {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Range {
    /// Create a new range, swapping the endpoints if they arrive reversed
    pub fn new(start: Position, end: Position) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Whether the range spans no text
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
