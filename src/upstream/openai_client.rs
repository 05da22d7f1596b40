//! reqwest-backed client for the OpenAI chat-completions endpoint

use async_trait::async_trait;
use reqwest::{header, StatusCode};

use super::{CompletionClient, CompletionError};
use crate::api::{ChatCompletionRequest, ChatCompletionResponse};

/// Calls the chat-completions endpoint of an OpenAI-compatible provider.
pub struct OpenAiClient {
    http_client: reqwest::Client,
    completions_url: String,
}

impl OpenAiClient {
    /// Build a client against a provider base URL (no trailing slash).
    pub fn new(http_client: reqwest::Client, base_url: &str) -> Self {
        Self {
            http_client,
            completions_url: format!("{}/v1/chat/completions", base_url),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
        api_key: &str,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        tracing::debug!(
            url = %self.completions_url,
            model = %request.model,
            "Sending completion request upstream"
        );

        let response = self
            .http_client
            .post(&self.completions_url)
            .header(header::AUTHORIZATION, format!("Bearer {}", api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = %status, "Upstream response status");

        if !status.is_success() {
            // Log the body server-side only; the client sees a status code at most
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                error_body = %error_body,
                "Upstream returned error response"
            );

            if status == StatusCode::UNAUTHORIZED {
                return Err(CompletionError::Unauthorized);
            }
            return Err(CompletionError::Status(status.as_u16()));
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))
    }
}
