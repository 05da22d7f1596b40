//! Upstream completion backend abstraction

mod openai_client;

use async_trait::async_trait;

pub use openai_client::OpenAiClient;

use crate::api::{ChatCompletionRequest, ChatCompletionResponse};

/// Errors surfaced by a completion backend.
///
/// The variants carry only what the handler needs to pick a client-facing
/// message; upstream error bodies never cross this boundary.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The upstream rejected the credential.
    #[error("upstream rejected the API key")]
    Unauthorized,

    /// Any other non-success upstream status.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// Network failure or an undecodable response body.
    #[error("{0}")]
    Transport(String),
}

/// A completion backend the proxy can call.
///
/// The handler depends only on this trait, so tests substitute a stub without
/// a network dependency.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a single completion request. The proxy never retries.
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
        api_key: &str,
    ) -> Result<ChatCompletionResponse, CompletionError>;
}
