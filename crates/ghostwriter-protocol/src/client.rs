//! HTTP transport for the completion service
//!
//! Dispatch races the HTTP round trip against a transport-abort token owned
//! by the caller. The token is independent of any host-editor cancellation
//! primitive, so an abort is observable no matter what state the host token
//! is in after a suspension point.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::error::{ProtocolError, ProtocolResult};
use crate::wire::{AcceptCompletionRequest, GetCompletionsRequest, GetCompletionsResponse};

/// Transport seam for the completion service
///
/// Consumed as `Arc<dyn CompletionClient>` by the lifecycle layer; tests
/// substitute stubs.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Request completions, racing the round trip against `abort`
    ///
    /// An abort resolves to `ProtocolError::Cancelled`, the distinguished
    /// variant callers must keep apart from real failures.
    async fn get_completions(
        &self,
        request: &GetCompletionsRequest,
        abort: &CancellationToken,
    ) -> ProtocolResult<GetCompletionsResponse>;

    /// Report an accepted completion; the response body is ignored
    async fn accept_completion(&self, request: &AcceptCompletionRequest) -> ProtocolResult<()>;
}

/// reqwest-backed implementation of [`CompletionClient`]
pub struct HttpCompletionClient {
    client: Arc<Client>,
    base_url: String,
}

impl HttpCompletionClient {
    /// Create a new client for the given service base URL
    pub fn new(base_url: String) -> Result<Self, ProtocolError> {
        Self::with_client(Arc::new(Client::new()), base_url)
    }

    /// Create a new client with a request timeout
    ///
    /// The core enforces no timeouts of its own; this is the transport
    /// channel's policy knob.
    pub fn with_timeout(base_url: String, timeout: Duration) -> Result<Self, ProtocolError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProtocolError::Config(e.to_string()))?;
        Self::with_client(Arc::new(client), base_url)
    }

    /// Create a new client with a custom HTTP client
    pub fn with_client(client: Arc<Client>, base_url: String) -> Result<Self, ProtocolError> {
        if base_url.is_empty() {
            return Err(ProtocolError::Config(
                "Completion service base URL is required".to_string(),
            ));
        }

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn map_error_status(status: reqwest::StatusCode) -> ProtocolError {
        match status.as_u16() {
            401 => ProtocolError::AuthFailed,
            429 => ProtocolError::RateLimited,
            _ => ProtocolError::Transport(format!("Completion service error: {status}")),
        }
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn get_completions(
        &self,
        request: &GetCompletionsRequest,
        abort: &CancellationToken,
    ) -> ProtocolResult<GetCompletionsResponse> {
        let url = format!("{}/get_completions", self.base_url);
        debug!("Dispatching completion request to {}", url);

        let round_trip = async {
            let response = self
                .client
                .post(&url)
                .header("Authorization", request.metadata.auth_header())
                .header("Content-Type", "application/json")
                .json(request)
                .send()
                .await
                .map_err(ProtocolError::from)?;

            let status = response.status();
            if !status.is_success() {
                let error_text = response.text().await.unwrap_or_default();
                error!("Completion service error ({}): {}", status, error_text);
                return Err(Self::map_error_status(status));
            }

            let parsed: GetCompletionsResponse = response.json().await?;
            Ok(parsed)
        };

        tokio::select! {
            biased;
            _ = abort.cancelled() => {
                debug!("Completion dispatch aborted");
                Err(ProtocolError::Cancelled)
            }
            result = round_trip => result,
        }
    }

    async fn accept_completion(&self, request: &AcceptCompletionRequest) -> ProtocolResult<()> {
        let url = format!("{}/accept_completion", self.base_url);
        debug!(
            "Reporting accepted completion {} to {}",
            request.completion_id, url
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", request.metadata.auth_header())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(ProtocolError::from)?;

        let status = response.status();
        if !status.is_success() {
            error!("Acceptance report failed with status {}", status);
            return Err(Self::map_error_status(status));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::SessionMetadata;
    use crate::wire::{DocumentInfo, EditorOptions};
    use crate::Language;

    fn request() -> GetCompletionsRequest {
        GetCompletionsRequest {
            metadata: SessionMetadata::new("editor", "1.0", "ghostwriter", "0.1", "key"),
            document: DocumentInfo {
                text: "fn ".to_string(),
                language_id: "rust".to_string(),
                language: Language::Rust,
                cursor_byte_offset: 3,
                line_ending: "\n".to_string(),
            },
            editor_options: EditorOptions::default(),
        }
    }

    #[test]
    fn test_client_creation_empty_base_url() {
        let client = HttpCompletionClient::new(String::new());
        match client {
            Err(e) => assert!(e.to_string().contains("base URL is required")),
            Ok(_) => panic!("Expected error for empty base URL"),
        }
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = HttpCompletionClient::new("http://localhost:8080/".to_string()).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_pre_fired_abort_resolves_cancelled() {
        let client = HttpCompletionClient::new("http://localhost:1".to_string()).unwrap();
        let abort = CancellationToken::new();
        abort.cancel();

        let result = client.get_completions(&request(), &abort).await;
        assert_eq!(result.unwrap_err(), ProtocolError::Cancelled);
    }

    #[tokio::test]
    async fn test_http_error_statuses_are_classified() {
        let mut server = mockito::Server::new_async().await;
        let abort = CancellationToken::new();
        let client = HttpCompletionClient::new(server.url()).unwrap();

        let unauthorized = server
            .mock("POST", "/get_completions")
            .with_status(401)
            .create_async()
            .await;
        let result = client.get_completions(&request(), &abort).await;
        assert_eq!(result.unwrap_err(), ProtocolError::AuthFailed);
        unauthorized.remove_async().await;

        let throttled = server
            .mock("POST", "/get_completions")
            .with_status(429)
            .create_async()
            .await;
        let result = client.get_completions(&request(), &abort).await;
        assert_eq!(result.unwrap_err(), ProtocolError::RateLimited);
        throttled.remove_async().await;

        let _failed = server
            .mock("POST", "/get_completions")
            .with_status(500)
            .create_async()
            .await;
        let result = client.get_completions(&request(), &abort).await;
        assert!(matches!(result, Err(ProtocolError::Transport(_))));
    }
}
