//! News article input and sentiment output records
//!
//! The fetch layer hands over [`Article`]s; the analyzer only ever sees the
//! text assembled by [`compose_analysis_text`]. Results leave as
//! [`SentimentRow`]s keyed by the persisted article id.

use crate::analysis::result::{ConsensusResult, Method, SentimentLabel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Marker appended to truncated content
pub const TRUNCATION_MARKER: &str = "...";

/// A fetched news article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Headline
    pub title: String,

    /// Summary, if the source provides one
    #[serde(default)]
    pub description: Option<String>,

    /// Body text (often truncated by the news API)
    #[serde(default)]
    pub content: Option<String>,

    /// Canonical URL, used for deduplication
    pub url: String,

    /// Publisher name
    pub source: String,

    /// Publication time
    pub published_at: DateTime<Utc>,

    /// Company name (or `sector:<name>`) the fetch was made for
    pub company_search_term: String,

    /// Byline
    #[serde(default)]
    pub author: Option<String>,
}

/// Build the text the analyzer scores for an article
///
/// The title is included twice to weight it, then the description, then the
/// content cut to `content_char_limit` characters with [`TRUNCATION_MARKER`]
/// appended when longer. Missing or empty parts are skipped.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use finsent::io::article::{compose_analysis_text, Article};
///
/// let article = Article {
///     title: "Acme beats estimates".to_string(),
///     description: Some("Quarterly results".to_string()),
///     content: Some("abcdef".to_string()),
///     url: "https://news.example.com/acme".to_string(),
///     source: "Wire".to_string(),
///     published_at: Utc::now(),
///     company_search_term: "Acme".to_string(),
///     author: None,
/// };
///
/// assert_eq!(
///     compose_analysis_text(&article, 3),
///     "Acme beats estimates Acme beats estimates Quarterly results abc..."
/// );
/// ```
pub fn compose_analysis_text(article: &Article, content_char_limit: usize) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(4);

    if !article.title.is_empty() {
        parts.push(article.title.clone());
        parts.push(article.title.clone());
    }

    if let Some(description) = article.description.as_deref().filter(|d| !d.is_empty()) {
        parts.push(description.to_string());
    }

    if let Some(content) = article.content.as_deref().filter(|c| !c.is_empty()) {
        if content.chars().count() > content_char_limit {
            let mut truncated: String = content.chars().take(content_char_limit).collect();
            truncated.push_str(TRUNCATION_MARKER);
            parts.push(truncated);
        } else {
            parts.push(content.to_string());
        }
    }

    parts.join(" ")
}

/// Drop articles whose URL was already seen; articles without a URL are dropped
pub fn dedup_by_url(articles: Vec<Article>) -> Vec<Article> {
    let before = articles.len();
    let mut seen = HashSet::new();
    let unique: Vec<Article> = articles
        .into_iter()
        .filter(|article| !article.url.is_empty() && seen.insert(article.url.clone()))
        .collect();

    if unique.len() < before {
        log::debug!("Removed {} duplicate articles", before - unique.len());
    }
    unique
}

/// Sentiment row handed to the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRow {
    /// Persisted article id
    pub article_id: i64,
    /// Final score in [-1, 1]
    pub sentiment_score: f64,
    /// Final confidence in [0, 1]
    pub confidence: f64,
    /// Final label
    pub sentiment_label: SentimentLabel,
    /// Top-level method tag (`combined` for normal results)
    pub processing_method: Method,
}

impl SentimentRow {
    /// Row for one analyzed article
    pub fn from_result(article_id: i64, result: &ConsensusResult) -> Self {
        Self {
            article_id,
            sentiment_score: result.score,
            confidence: result.confidence,
            sentiment_label: result.label,
            processing_method: result.method,
        }
    }
}
