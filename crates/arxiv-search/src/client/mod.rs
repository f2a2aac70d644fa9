//! Index Clients
//!
//! Abstraction over the scholarly-paper index plus its implementations.

mod http;
mod mock;

pub use http::{ArxivConfig, HttpArxivClient};
pub use mock::MockArxivClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::Paper;

/// Index client trait (Strategy pattern)
///
/// Implement this for each paper index the agent should reach.
#[async_trait]
pub trait ArxivClient: Send + Sync {
    /// Search the index by keyword, returning at most `max_results`
    /// records in index relevance order.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<Paper>>;

    /// Client name for logs
    fn name(&self) -> &str;
}
