//! Document buffer abstraction and line-indexed text document
//!
//! [`DocumentBuffer`] is the seam between the completion pipeline and the
//! host editor's text buffer: it always reflects the live buffer at call
//! time. Snapshot discipline belongs to the request lifecycle, which captures
//! a [`DocumentSnapshot`] at entry so later edits cannot alter an in-flight
//! request.

use crate::error::{TextError, TextResult};
use crate::position::Position;

/// Read access to a live text buffer
///
/// Offsets are UTF-16 code units, matching [`Position::character`].
pub trait DocumentBuffer {
    /// Current full text of the buffer
    fn text(&self) -> &str;

    /// Editor language identifier, e.g. "rust" or "typescript"
    fn language_id(&self) -> &str;

    /// Code-unit offset of a position
    fn offset_at(&self, position: Position) -> TextResult<usize>;

    /// Position of a code-unit offset
    fn position_at(&self, offset: usize) -> TextResult<Position>;
}

/// Owned text document with a precomputed line index
///
/// The index stores the code-unit offset of each line start ('\n'
/// terminators) so position lookups are a binary search plus arithmetic.
#[derive(Debug, Clone)]
pub struct TextDocument {
    text: String,
    language_id: String,
    /// Code-unit offset of the start of each line (0-indexed)
    line_starts: Vec<usize>,
    /// Total length in code units
    len_code_units: usize,
}

impl TextDocument {
    /// Create a document from text and an editor language identifier
    pub fn new(text: impl Into<String>, language_id: impl Into<String>) -> Self {
        let text = text.into();
        let (line_starts, len_code_units) = index_lines(&text);
        Self {
            text,
            language_id: language_id.into(),
            line_starts,
            len_code_units,
        }
    }

    /// Replace the buffer contents and rebuild the line index
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let (line_starts, len_code_units) = index_lines(&self.text);
        self.line_starts = line_starts;
        self.len_code_units = len_code_units;
    }

    /// Length of the document in code units
    pub fn len_code_units(&self) -> usize {
        self.len_code_units
    }

    /// End of a line in code units, excluding its terminator
    fn line_end(&self, line: usize) -> usize {
        match self.line_starts.get(line + 1) {
            Some(&next_start) => next_start - 1,
            None => self.len_code_units,
        }
    }
}

impl DocumentBuffer for TextDocument {
    fn text(&self) -> &str {
        &self.text
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn offset_at(&self, position: Position) -> TextResult<usize> {
        let line = position.line as usize;
        let Some(&line_start) = self.line_starts.get(line) else {
            return Err(TextError::invalid_position(format!(
                "line {} is outside the document ({} lines)",
                position.line,
                self.line_starts.len()
            )));
        };
        // Characters beyond the line content clamp to the line end, the
        // editor convention for end-of-line cursors.
        let line_len = self.line_end(line) - line_start;
        let character = (position.character as usize).min(line_len);
        Ok(line_start + character)
    }

    fn position_at(&self, offset: usize) -> TextResult<Position> {
        if offset > self.len_code_units {
            return Err(TextError::invalid_offset(format!(
                "code unit offset {offset} exceeds document length {}",
                self.len_code_units
            )));
        }
        // An offset addressing a line terminator belongs to that line.
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        Ok(Position::new(
            line as u32,
            (offset - self.line_starts[line]) as u32,
        ))
    }
}

/// Immutable capture of a buffer's text and language at a point in time
///
/// Taken by the request lifecycle at entry; later mutations to the live
/// buffer do not affect the snapshot, including response back-projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    text: String,
    language_id: String,
}

impl DocumentSnapshot {
    /// Capture the buffer's current text and language
    pub fn capture(buffer: &dyn DocumentBuffer) -> Self {
        Self {
            text: buffer.text().to_string(),
            language_id: buffer.language_id().to_string(),
        }
    }

    /// Captured text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Captured language identifier
    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    /// Build a line-indexed document over the captured text
    pub fn to_document(&self) -> TextDocument {
        TextDocument::new(self.text.clone(), self.language_id.clone())
    }
}

fn index_lines(text: &str) -> (Vec<usize>, usize) {
    let mut line_starts = vec![0];
    let mut code_units = 0usize;
    for ch in text.chars() {
        code_units += ch.len_utf16();
        if ch == '\n' {
            line_starts.push(code_units);
        }
    }
    (line_starts, code_units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_offsets() {
        let doc = TextDocument::new("hello", "plaintext");
        assert_eq!(doc.offset_at(Position::new(0, 0)).unwrap(), 0);
        assert_eq!(doc.offset_at(Position::new(0, 5)).unwrap(), 5);
        assert_eq!(doc.position_at(0).unwrap(), Position::new(0, 0));
        assert_eq!(doc.position_at(5).unwrap(), Position::new(0, 5));
    }

    #[test]
    fn test_multiple_lines() {
        let doc = TextDocument::new("hello\nworld\n", "plaintext");
        assert_eq!(doc.offset_at(Position::new(1, 0)).unwrap(), 6);
        assert_eq!(doc.offset_at(Position::new(1, 5)).unwrap(), 11);
        assert_eq!(doc.position_at(6).unwrap(), Position::new(1, 0));
        assert_eq!(doc.position_at(11).unwrap(), Position::new(1, 5));
        // The final '\n' opens an empty trailing line.
        assert_eq!(doc.position_at(12).unwrap(), Position::new(2, 0));
    }

    #[test]
    fn test_offset_of_line_terminator_belongs_to_its_line() {
        let doc = TextDocument::new("ab\ncd", "plaintext");
        assert_eq!(doc.position_at(2).unwrap(), Position::new(0, 2));
        assert_eq!(doc.position_at(3).unwrap(), Position::new(1, 0));
    }

    #[test]
    fn test_character_clamps_to_line_end() {
        let doc = TextDocument::new("ab\ncd", "plaintext");
        assert_eq!(doc.offset_at(Position::new(0, 99)).unwrap(), 2);
        assert_eq!(doc.offset_at(Position::new(1, 99)).unwrap(), 5);
    }

    #[test]
    fn test_line_out_of_range_is_an_error() {
        let doc = TextDocument::new("ab\ncd", "plaintext");
        assert!(doc.offset_at(Position::new(2, 0)).is_err());
    }

    #[test]
    fn test_offset_past_end_is_an_error() {
        let doc = TextDocument::new("abc", "plaintext");
        assert!(doc.position_at(4).is_err());
    }

    #[test]
    fn test_code_unit_line_index_with_astral_characters() {
        // '😀' is 2 code units; the second line starts at 4, not 3.
        let doc = TextDocument::new("😀\nab", "plaintext");
        assert_eq!(doc.offset_at(Position::new(1, 0)).unwrap(), 3);
        assert_eq!(doc.position_at(3).unwrap(), Position::new(1, 0));
        assert_eq!(doc.offset_at(Position::new(0, 99)).unwrap(), 2);
    }

    #[test]
    fn test_set_text_reindexes() {
        let mut doc = TextDocument::new("one line", "plaintext");
        doc.set_text("two\nlines");
        assert_eq!(doc.offset_at(Position::new(1, 0)).unwrap(), 4);
        assert_eq!(doc.len_code_units(), 9);
    }

    #[test]
    fn test_snapshot_is_immune_to_later_edits() {
        let mut doc = TextDocument::new("original", "rust");
        let snapshot = DocumentSnapshot::capture(&doc);
        doc.set_text("mutated");
        assert_eq!(snapshot.text(), "original");
        assert_eq!(snapshot.language_id(), "rust");
        assert_eq!(snapshot.to_document().len_code_units(), 8);
    }
}
