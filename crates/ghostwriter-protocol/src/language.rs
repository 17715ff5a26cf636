//! Protocol language identifiers
//!
//! The service wants its own language tag alongside the raw editor language
//! id; unknown editor ids map to `Unspecified` rather than failing the
//! request.

use serde::{Deserialize, Serialize};

/// Languages the completion service models explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Rust programming language
    Rust,
    /// TypeScript programming language
    TypeScript,
    /// JavaScript programming language
    JavaScript,
    /// Python programming language
    Python,
    /// Go programming language
    Go,
    /// Java programming language
    Java,
    /// Kotlin programming language
    Kotlin,
    /// Dart programming language
    Dart,
    /// Any language the protocol does not model
    Unspecified,
}

impl Language {
    /// Map an editor language identifier to a protocol language
    ///
    /// Unknown identifiers map to `Language::Unspecified`.
    pub fn from_editor_id(id: &str) -> Self {
        match id.to_lowercase().as_str() {
            "rust" => Language::Rust,
            "typescript" | "typescriptreact" => Language::TypeScript,
            "javascript" | "javascriptreact" => Language::JavaScript,
            "python" => Language::Python,
            "go" => Language::Go,
            "java" => Language::Java,
            "kotlin" => Language::Kotlin,
            "dart" => Language::Dart,
            _ => Language::Unspecified,
        }
    }

    /// String identifier for this language
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Rust => "rust",
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Go => "go",
            Language::Java => "java",
            Language::Kotlin => "kotlin",
            Language::Dart => "dart",
            Language::Unspecified => "unspecified",
        }
    }
}
