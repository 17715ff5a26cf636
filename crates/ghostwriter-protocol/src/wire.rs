//! Wire types for the completion service
//!
//! The contract is fixed: JSON bodies with camelCase field names. Response
//! item fields that may be missing in practice are modeled as `Option` plus
//! `#[serde(default)]` so a malformed item deserializes instead of failing
//! the whole response; dropping such items is the caller's decision.

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::metadata::SessionMetadata;

/// Editor appearance knobs forwarded with every request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    /// Width of a tab stop in columns
    pub tab_width: u32,
    /// Whether the editor inserts spaces for tabs
    pub insert_spaces: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            tab_width: 4,
            insert_spaces: true,
        }
    }
}

/// Document payload of a completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    /// Full document text
    pub text: String,
    /// Raw editor language identifier
    pub language_id: String,
    /// Protocol language tag derived from the editor id
    pub language: Language,
    /// Cursor position in UTF-8 bytes, derived via the offset codec
    pub cursor_byte_offset: u64,
    /// Line ending convention of the text
    pub line_ending: String,
}

/// Request body for `get_completions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCompletionsRequest {
    /// Session identity
    pub metadata: SessionMetadata,
    /// Document snapshot and cursor
    pub document: DocumentInfo,
    /// Editor appearance knobs
    pub editor_options: EditorOptions,
}

/// Byte span of a completion inside the request document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteRange {
    /// Start of the span in UTF-8 bytes (inclusive)
    pub start_byte_offset: u64,
    /// End of the span in UTF-8 bytes (exclusive)
    pub end_byte_offset: u64,
}

/// Suggested completion text and its identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    /// Text to insert
    pub text: String,
    /// Service-assigned id, echoed back on acceptance
    pub completion_id: String,
}

/// One item of a completion response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    /// Completion payload; absent in malformed items
    #[serde(default)]
    pub completion: Option<Completion>,
    /// Byte span the completion replaces; absent in malformed items
    #[serde(default)]
    pub range: Option<ByteRange>,
}

/// Response body of `get_completions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetCompletionsResponse {
    /// Suggested completions; may be empty
    #[serde(default)]
    pub completion_items: Vec<CompletionItem>,
}

/// Request body for `accept_completion`; the response body is ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptCompletionRequest {
    /// Session identity
    pub metadata: SessionMetadata,
    /// Id of the accepted completion
    pub completion_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GetCompletionsRequest {
            metadata: SessionMetadata::new("editor", "1.0", "ghostwriter", "0.1", "key"),
            document: DocumentInfo {
                text: "fn main() {}".to_string(),
                language_id: "rust".to_string(),
                language: Language::Rust,
                cursor_byte_offset: 11,
                line_ending: "\n".to_string(),
            },
            editor_options: EditorOptions::default(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["document"]["cursorByteOffset"], 11);
        assert_eq!(json["document"]["languageId"], "rust");
        assert_eq!(json["document"]["lineEnding"], "\n");
        assert_eq!(json["editorOptions"]["tabWidth"], 4);
        assert_eq!(json["editorOptions"]["insertSpaces"], true);
    }

    #[test]
    fn test_response_with_missing_fields_deserializes() {
        let json = r#"{
            "completionItems": [
                {"completion": {"text": "x", "completionId": "c1"},
                 "range": {"startByteOffset": 0, "endByteOffset": 1}},
                {"completion": {"text": "y", "completionId": "c2"}},
                {"range": {"startByteOffset": 2, "endByteOffset": 3}},
                {}
            ]
        }"#;

        let response: GetCompletionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.completion_items.len(), 4);
        assert!(response.completion_items[0].completion.is_some());
        assert!(response.completion_items[0].range.is_some());
        assert!(response.completion_items[1].range.is_none());
        assert!(response.completion_items[2].completion.is_none());
        assert!(response.completion_items[3].completion.is_none());
    }

    #[test]
    fn test_empty_response_body_deserializes() {
        let response: GetCompletionsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.completion_items.is_empty());
    }

    #[test]
    fn test_default_editor_options() {
        let options = EditorOptions::default();
        assert_eq!(options.tab_width, 4);
        assert!(options.insert_spaces);
    }
}
