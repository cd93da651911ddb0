//! Sentiment feature extraction modules
//!
//! This module contains the three independent scorers and their common seam:
//! - Polarity (polarity/subjectivity lexicon model)
//! - Valence (rule-based compound valence model)
//! - Keyword (financial lexicon counter)
//! - Key phrase extraction

pub mod keyword;
pub mod phrases;
pub mod polarity;
pub mod valence;

use crate::analysis::result::{Method, MethodResult};
use crate::error::Result;

/// A stateless sentiment strategy over normalized text
///
/// Implementations must be pure: the same text always yields the same result.
/// Errors are absorbed by the analyzer into a neutral, zero-confidence result
/// for [`SentimentScorer::method`].
pub trait SentimentScorer: Send + Sync {
    /// Method tag this scorer produces
    fn method(&self) -> Method;

    /// Score normalized text
    fn score(&self, text: &str) -> Result<MethodResult>;
}
