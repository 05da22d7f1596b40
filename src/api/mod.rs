//! Wire types: the client-facing humanize shapes and the upstream
//! chat-completion subset

mod humanize;
mod openai;

pub use humanize::*;
pub use openai::*;
