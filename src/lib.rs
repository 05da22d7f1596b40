//! humanize-proxy: HTTP proxy for rewriting AI-generated text
//!
//! Features:
//! - Single `POST` endpoint that forwards text to the OpenAI chat-completions
//!   API with a fixed "humanizer" instruction
//! - Normalized success/error shapes for a browser-hosted client
//! - Permissive CORS on every response, pre-flight included
//! - Upstream call behind a trait so tests run against a stub

pub mod api;
pub mod config;
pub mod prompt;
pub mod proxy;
pub mod upstream;

pub use config::AppConfig;
pub use proxy::run_server;
