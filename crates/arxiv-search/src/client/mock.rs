//! Mock Index Client
//!
//! For tests and offline runs. Returns canned papers regardless of the
//! query so the loop can be exercised without network access.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use super::ArxivClient;
use crate::error::Result;
use crate::model::Paper;

/// Mock index client with canned results
pub struct MockArxivClient;

impl Default for MockArxivClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockArxivClient {
    pub fn new() -> Self {
        Self
    }

    fn canned() -> Vec<Paper> {
        vec![
            Paper {
                title: "ReAct: Synergizing Reasoning and Acting in Language Models".into(),
                published: Utc.with_ymd_and_hms(2022, 10, 6, 17, 5, 24).unwrap(),
                authors: vec![
                    "Shunyu Yao".into(),
                    "Jeffrey Zhao".into(),
                    "Dian Yu".into(),
                ],
                summary: "Explores interleaving reasoning traces with task-specific actions \
                          so language models can plan, act, and adjust."
                    .into(),
            },
            Paper {
                title: "Chain-of-Thought Prompting Elicits Reasoning in Large Language Models"
                    .into(),
                published: Utc.with_ymd_and_hms(2022, 1, 28, 0, 0, 0).unwrap(),
                authors: vec!["Jason Wei".into(), "Xuezhi Wang".into()],
                summary: "Shows that generating intermediate reasoning steps improves \
                          performance on arithmetic and symbolic reasoning tasks."
                    .into(),
            },
            Paper {
                title: "Toolformer: Language Models Can Teach Themselves to Use Tools".into(),
                published: Utc.with_ymd_and_hms(2023, 2, 9, 16, 49, 57).unwrap(),
                authors: vec!["Timo Schick".into(), "Jane Dwivedi-Yu".into()],
                summary: "Trains models to decide which APIs to call, when to call them, \
                          and how to incorporate the results."
                    .into(),
            },
        ]
    }
}

#[async_trait]
impl ArxivClient for MockArxivClient {
    async fn search(&self, _query: &str, max_results: usize) -> Result<Vec<Paper>> {
        let mut papers = Self::canned();
        papers.truncate(max_results);
        Ok(papers)
    }

    fn name(&self) -> &str {
        "MockArxiv"
    }
}
