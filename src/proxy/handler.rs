//! Request/response handler for the humanize proxy
//!
//! One handler covers the whole inbound contract: pre-flight, method
//! dispatch, input validation, credential lookup, the single upstream call,
//! and normalization of every outcome into the client-facing JSON shapes.

use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{HeaderValue, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::server::ProxyState;
use crate::api::{ErrorResponse, HumanizeRequest, HumanizeResponse};
use crate::prompt;
use crate::upstream::CompletionError;

/// Fixed client-facing messages.
const MSG_INPUT_REQUIRED: &str = "Input text is required";
const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed";
const MSG_KEY_NOT_CONFIGURED: &str = "OpenAI API key not configured";
const MSG_INVALID_KEY: &str = "Invalid API key configuration";
const MSG_HUMANIZE_FAILED: &str = "Failed to humanize content";

/// Inbound body cap; humanize inputs are short text blocks.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Attach the permissive CORS headers a browser-hosted client on a foreign
/// origin needs. Applied to every response, not only when the request carries
/// an `Origin` header.
fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        "access-control-allow-origin",
        HeaderValue::from_static("*"),
    );
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("Content-Type"),
    );
    response
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let payload = ErrorResponse {
        error: message.into(),
    };
    with_cors((status, Json(payload)).into_response())
}

/// Entry point for every route: dispatch on method, then humanize.
pub async fn humanize_route(State(state): State<ProxyState>, req: Request<Body>) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    tracing::debug!(method = %method, path = %path, "Processing request");

    match method {
        // Pre-flight short-circuits with an empty success
        Method::OPTIONS => with_cors(StatusCode::OK.into_response()),
        Method::POST => handle_humanize(&state, req).await,
        _ => error_response(StatusCode::METHOD_NOT_ALLOWED, MSG_METHOD_NOT_ALLOWED),
    }
}

/// Handle a POST humanize request.
async fn handle_humanize(state: &ProxyState, req: Request<Body>) -> Response {
    let body_bytes = match to_bytes(req.into_body(), MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read request body");
            return error_response(StatusCode::BAD_REQUEST, MSG_INPUT_REQUIRED);
        }
    };

    // A body that is not a JSON object carrying inputText behaves exactly
    // like a missing field
    let humanize_request: HumanizeRequest =
        serde_json::from_slice(&body_bytes).unwrap_or_default();

    let input_text = match humanize_request.trimmed_text() {
        Some(text) => text.to_string(),
        None => return error_response(StatusCode::BAD_REQUEST, MSG_INPUT_REQUIRED),
    };

    // Resolved per request so the credential is never baked into state
    let api_key = match state.config.upstream.resolve_api_key() {
        Some(key) => key,
        None => {
            tracing::error!("No upstream API key in config or environment");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_KEY_NOT_CONFIGURED);
        }
    };

    tracing::info!(input_len = input_text.len(), "Sending rewrite request upstream");

    let completion_request = prompt::build_completion_request(&input_text);

    let completion = match state
        .completion_client
        .complete(&completion_request, &api_key)
        .await
    {
        Ok(response) => response,
        Err(CompletionError::Unauthorized) => {
            // Generic message only; never confirm the key itself was the problem
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_INVALID_KEY);
        }
        Err(CompletionError::Status(status)) => {
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("OpenAI API error: {}", status),
            );
        }
        Err(CompletionError::Transport(message)) => {
            let message = if message.is_empty() {
                MSG_HUMANIZE_FAILED.to_string()
            } else {
                message
            };
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, message);
        }
    };

    // An upstream success without content degrades to an empty rewrite
    let humanized_text = completion
        .first_choice_content()
        .unwrap_or_default()
        .to_string();

    tracing::info!(output_len = humanized_text.len(), "Rewrite complete");

    with_cors((StatusCode::OK, Json(HumanizeResponse { humanized_text })).into_response())
}
