//! # agent-core
//!
//! Decision loop, run memory, and tool dispatch for a minimal
//! research agent.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Decision Loop (Agent)                    │
//! │  ┌────────────┐  ┌────────────┐  ┌────────────────────────┐  │
//! │  │  Response  │  │    Tool    │  │     LlmProvider        │  │
//! │  │ Classifier │──│  Registry  │──│     (Strategy)         │  │
//! │  └────────────┘  └────────────┘  └────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `LlmProvider` trait keeps the model backend swappable without
//! touching the loop, and `decision::classify` keeps the response
//! grammar swappable the same way. Each pass appends to an append-only
//! run memory that is replayed verbatim into the next prompt.

pub mod decision;
pub mod error;
pub mod memory;
pub mod message;
pub mod provider;
pub mod reasoning;
pub mod tool;

pub use decision::Decision;
pub use error::{AgentError, Result};
pub use memory::Memory;
pub use message::{Message, Role};
pub use provider::{Completion, GenerationOptions, LlmProvider};
pub use reasoning::{Agent, AgentBuilder, AgentConfig, RunOutcome, RunReport};
pub use tool::{Tool, ToolRegistry};
