//! Paper Records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single paper returned by the index
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title
    pub title: String,

    /// Publication timestamp
    pub published: DateTime<Utc>,

    /// Author names in listing order
    pub authors: Vec<String>,

    /// Abstract text
    pub summary: String,
}

impl Paper {
    /// Render the record as labeled lines for an observation.
    ///
    /// The date is day precision; the model has no use for the time.
    pub fn render(&self) -> String {
        format!(
            "title: {}\npublished_date: {}\nauthors: {}\nsummary: {}",
            self.title,
            self.published.format("%Y-%m-%d"),
            self.authors.join(", "),
            self.summary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_labels_every_field() {
        let paper = Paper {
            title: "ReAct: Synergizing Reasoning and Acting in Language Models".into(),
            published: Utc.with_ymd_and_hms(2022, 10, 6, 17, 30, 0).unwrap(),
            authors: vec!["Shunyu Yao".into(), "Jeffrey Zhao".into()],
            summary: "Language models can interleave reasoning traces with actions.".into(),
        };

        let rendered = paper.render();
        assert!(rendered.starts_with("title: ReAct:"));
        assert!(rendered.contains("published_date: 2022-10-06"));
        assert!(rendered.contains("authors: Shunyu Yao, Jeffrey Zhao"));
        assert!(rendered.contains("summary: Language models"));
    }
}
