//! LLM Provider Strategy Pattern
//!
//! Narrow contract between the decision loop and whatever completion
//! service backs it. Implementations (OpenAI-compatible APIs, local
//! inference servers) live in the runtime crate; the loop depends on
//! this interface alone and never sees transport or auth details.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::Message;

/// Configuration for LLM generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model identifier (e.g., "gpt-3.5-turbo")
    pub model: String,

    /// Sampling temperature. Pinned at zero so repeated runs with the
    /// same memory make materially similar decisions.
    #[serde(default)]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_max_tokens() -> u32 {
    1024
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".into(),
            temperature: 0.0,
            max_tokens: default_max_tokens(),
        }
    }
}

/// Response from an LLM completion
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Completion {
    /// The generated text (first choice's message content)
    pub content: String,

    /// Model that generated this response
    pub model: String,

    /// Token usage statistics (if the provider reports them)
    pub usage: Option<TokenUsage>,
}

/// Token usage statistics
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Strategy trait for LLM providers
///
/// A provider turns a fully-formed list of turns into raw text. No
/// parsing, no retries; failures propagate to the caller untouched.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion from messages
    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion>;

    /// Check if the provider is available and configured correctly
    async fn health_check(&self) -> Result<bool>;
}
