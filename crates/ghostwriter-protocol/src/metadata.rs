//! Session metadata attached to every remote call

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifying information carried on every request to the completion service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetadata {
    /// Name of the host editor
    pub ide_name: String,
    /// Version of the host editor
    pub ide_version: String,
    /// Name of the embedding extension
    pub extension_name: String,
    /// Version of the embedding extension
    pub extension_version: String,
    /// API key passed through from the host; never generated here
    pub api_key: String,
    /// Generated once per session
    pub session_id: String,
}

impl SessionMetadata {
    /// Create session metadata with a fresh session id
    pub fn new(
        ide_name: impl Into<String>,
        ide_version: impl Into<String>,
        extension_name: impl Into<String>,
        extension_version: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            ide_name: ide_name.into(),
            ide_version: ide_version.into(),
            extension_name: extension_name.into(),
            extension_version: extension_version.into(),
            api_key: api_key.into(),
            session_id: Uuid::new_v4().to_string(),
        }
    }

    /// Authorization header value for the completion service
    pub fn auth_header(&self) -> String {
        format!("Basic {}-{}", self.api_key, self.session_id)
    }
}
