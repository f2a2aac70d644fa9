//! # agent-runtime
//!
//! Gateway providers for the research agent.
//!
//! ## Providers
//!
//! - **OpenAI** (default): hosted chat-completion services speaking the
//!   OpenAI wire format, including compatible self-hosted gateways.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agent_runtime::OpenAiProvider;
//!
//! let provider = OpenAiProvider::from_env()?;
//! let agent = AgentBuilder::new()
//!     .provider(Arc::new(provider))
//!     .build()?;
//! ```

#[cfg(feature = "openai")]
pub mod openai;

#[cfg(feature = "openai")]
pub use openai::{OpenAiConfig, OpenAiProvider};

// Re-export core types for convenience
pub use agent_core::{
    Agent, AgentBuilder, AgentError, LlmProvider, Message, Result, Role, Tool, ToolRegistry,
};
