//! Error Types for arXiv Search

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArxivError>;

#[derive(Error, Debug)]
pub enum ArxivError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Index returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed feed: {0}")]
    Feed(#[from] quick_xml::DeError),

    #[error("Malformed entry date '{0}'")]
    EntryDate(String),
}

impl From<ArxivError> for agent_core::AgentError {
    fn from(err: ArxivError) -> Self {
        agent_core::AgentError::ToolExecution(err.to_string())
    }
}
