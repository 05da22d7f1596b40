//! Fixed prompt and generation parameters for the rewrite request
//!
//! Configuration data rather than logic: the handler never branches on any of
//! these values, so future parameterization only touches this module.

use crate::api::{ChatCompletionRequest, Message};

/// Model used for every rewrite.
pub const MODEL: &str = "gpt-4o-mini";

/// Sampling temperature. High enough that repeated calls with the same input
/// produce different rewrites.
pub const TEMPERATURE: f32 = 0.8;

/// Upper bound on generated tokens.
pub const MAX_TOKENS: u32 = 2000;

/// System instruction: the style guide the model rewrites under.
pub const SYSTEM_PROMPT: &str = "You are an expert content humanizer. Your task is to transform AI-generated text into natural, human-like content while preserving the original meaning and key information. \n\nGuidelines:\n- Add natural conversational elements and human touches\n- Vary sentence structure and length\n- Include subtle imperfections that humans naturally have\n- Use more casual, relatable language where appropriate\n- Add personal touches like \"I think\", \"in my experience\", etc.\n- Make the tone warmer and more engaging\n- Use more easy english words\n- Ensure the content sounds like it was written by a real person\n- Maintain the core message and facts\n- Don't make it overly casual if the original was formal - just more human";

/// Lead-in prepended to the user's text.
pub const USER_LEAD_IN: &str = "Please humanize this AI-generated content:\n\n";

/// Build the two-message completion request for an already-trimmed input.
pub fn build_completion_request(input_text: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: MODEL.to_string(),
        messages: vec![
            Message {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            Message {
                role: "user".to_string(),
                content: format!("{}{}", USER_LEAD_IN, input_text),
            },
        ],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}
