//! Search Tool
//!
//! Wraps the index client as a capability the model can request by
//! name. The observation text carries at most three labeled records.

use std::sync::Arc;

use agent_core::error::Result as CoreResult;
use agent_core::tool::Tool;
use async_trait::async_trait;

use crate::client::ArxivClient;
use crate::model::Paper;

/// How many papers a single search may return.
pub const MAX_RESULTS: usize = 3;

/// Tool exposing paper search to the model
pub struct SearchArxivTool {
    client: Arc<dyn ArxivClient>,
}

impl SearchArxivTool {
    pub fn new(client: Arc<dyn ArxivClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for SearchArxivTool {
    fn name(&self) -> &str {
        "searchArxiv"
    }

    fn description(&self) -> &str {
        "You can use this tool to search for scientific papers on Arxiv. \
         The response will have title, author, published date, and summary."
    }

    fn parameter_hint(&self) -> &str {
        "search key word"
    }

    async fn invoke(&self, parameter: &str) -> CoreResult<String> {
        tracing::debug!(index = %self.client.name(), query = %parameter, "searching papers");
        let papers = self.client.search(parameter, MAX_RESULTS).await?;

        if papers.is_empty() {
            return Ok("No results found.".to_string());
        }

        Ok(papers
            .iter()
            .map(Paper::render)
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}
