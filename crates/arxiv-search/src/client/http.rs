//! arXiv Atom API Client

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::ArxivClient;
use crate::error::{ArxivError, Result};
use crate::model::Paper;

const DEFAULT_ENDPOINT: &str = "http://export.arxiv.org/api/query";

/// arXiv API configuration
#[derive(Clone, Debug)]
pub struct ArxivConfig {
    /// Query endpoint
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ArxivConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_secs: 30,
        }
    }
}

/// Client for the public arXiv Atom API
pub struct HttpArxivClient {
    client: reqwest::Client,
    config: ArxivConfig,
}

impl HttpArxivClient {
    /// Create with default endpoint settings
    pub fn new() -> Result<Self> {
        Self::from_config(ArxivConfig::default())
    }

    /// Create from configuration
    pub fn from_config(config: ArxivConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }
}

/// Atom feed wire types, limited to the fields the tool consumes
#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(default, rename = "entry")]
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    title: String,
    published: String,
    #[serde(default, rename = "author")]
    authors: Vec<Author>,
    summary: String,
}

#[derive(Debug, Deserialize)]
struct Author {
    name: String,
}

/// Feed text hard-wraps long lines; fold whitespace runs back to spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_feed(xml: &str, max_results: usize) -> Result<Vec<Paper>> {
    let feed: Feed = quick_xml::de::from_str(xml)?;

    feed.entries
        .into_iter()
        .take(max_results)
        .map(|entry| {
            let published = DateTime::parse_from_rfc3339(&entry.published)
                .map_err(|_| ArxivError::EntryDate(entry.published.clone()))?
                .with_timezone(&Utc);

            Ok(Paper {
                title: collapse_whitespace(&entry.title),
                published,
                authors: entry.authors.into_iter().map(|a| a.name).collect(),
                summary: collapse_whitespace(&entry.summary),
            })
        })
        .collect()
}

#[async_trait]
impl ArxivClient for HttpArxivClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<Paper>> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("search_query", format!("all:{}", query)),
                ("start", "0".to_string()),
                ("max_results", max_results.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArxivError::Status(status));
        }

        let body = response.text().await?;
        parse_feed(&body, max_results)
    }

    fn name(&self) -> &str {
        "arxiv.org"
    }
}
