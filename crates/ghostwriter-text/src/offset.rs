//! Offset codec: UTF-16 code units <-> UTF-8 byte offsets
//!
//! The editor addresses text in UTF-16 code units; the remote protocol
//! addresses the same text in UTF-8 bytes. Characters outside the Basic
//! Multilingual Plane occupy two code units but a single 4-byte UTF-8
//! sequence, so the conversion walks characters and maps each pair as a unit.
//! Linear scans are fine here: the codec runs at most twice per request plus
//! once per returned completion item, not per keystroke.

use crate::error::{TextError, TextResult};

/// Length of `text` in UTF-16 code units
pub fn code_unit_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Convert a UTF-16 code-unit offset into a UTF-8 byte offset
///
/// Errors when the offset exceeds the text length in code units or lands
/// inside a surrogate pair.
pub fn code_units_to_byte_offset(text: &str, code_unit_offset: usize) -> TextResult<usize> {
    let mut code_units = 0usize;
    for (byte_offset, ch) in text.char_indices() {
        if code_units == code_unit_offset {
            return Ok(byte_offset);
        }
        code_units += ch.len_utf16();
        if code_units > code_unit_offset {
            return Err(TextError::invalid_offset(format!(
                "code unit offset {code_unit_offset} splits a surrogate pair"
            )));
        }
    }

    if code_units == code_unit_offset {
        Ok(text.len())
    } else {
        Err(TextError::invalid_offset(format!(
            "code unit offset {code_unit_offset} exceeds text length {code_units}"
        )))
    }
}

/// Convert a UTF-8 byte offset into a UTF-16 code-unit offset
///
/// Errors when the offset exceeds the text length in bytes or does not
/// address a character boundary. Exact inverse of
/// [`code_units_to_byte_offset`] for every valid input.
pub fn byte_offset_to_code_units(text: &str, byte_offset: usize) -> TextResult<usize> {
    if byte_offset > text.len() {
        return Err(TextError::invalid_offset(format!(
            "byte offset {byte_offset} exceeds text length {}",
            text.len()
        )));
    }
    if !text.is_char_boundary(byte_offset) {
        return Err(TextError::invalid_offset(format!(
            "byte offset {byte_offset} is not on a character boundary"
        )));
    }
    Ok(code_unit_len(&text[..byte_offset]))
}
