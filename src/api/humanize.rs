//! Client-facing request/response shapes for the humanize endpoint

use serde::{Deserialize, Serialize};

/// Inbound humanize request body.
///
/// `input_text` is optional at the serde level so that a missing field and a
/// blank one fail validation the same way.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HumanizeRequest {
    #[serde(rename = "inputText", default)]
    pub input_text: Option<String>,
}

impl HumanizeRequest {
    /// Returns the trimmed input text, or `None` when the field is missing,
    /// empty, or whitespace-only.
    pub fn trimmed_text(&self) -> Option<&str> {
        self.input_text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Successful rewrite payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HumanizeResponse {
    #[serde(rename = "humanizedText")]
    pub humanized_text: String,
}

/// Failure payload shared by every error path.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
