//! # arxiv-search
//!
//! arXiv paper search capability for the research agent.
//!
//! The index itself is an external collaborator; everything here
//! depends only on its shape (keyword in, bounded list of labeled
//! records out) behind the [`client::ArxivClient`] trait, so tests and
//! offline runs swap in the mock without touching the tool.

pub mod client;
pub mod error;
pub mod model;
pub mod tool;

pub use client::{ArxivClient, ArxivConfig, HttpArxivClient, MockArxivClient};
pub use error::{ArxivError, Result};
pub use model::Paper;
pub use tool::SearchArxivTool;
