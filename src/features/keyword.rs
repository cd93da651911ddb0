//! Financial keyword scorer
//!
//! Counts exact matches against fixed positive and negative financial
//! lexicons among the alphabetic, non-stop-word tokens of the text.
//!
//! - score = (positive - negative) / total
//! - label: `> 0.2` positive, `< -0.2` negative, else neutral
//! - confidence = min(total / 10, 1.0)
//!
//! Zero hits produce the neutral, zero-confidence sentinel: the method has
//! nothing to say about the text.

use super::SentimentScorer;
use crate::analysis::result::{Method, MethodDetails, MethodResult, SentimentLabel};
use crate::error::Result;
use crate::preprocessing::tokenizer::content_words;

/// Positive financial terms
///
/// "up" is absent on purpose: it is a stop-word and would never be counted.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "profit", "growth", "increase", "gain", "rise", "bull", "bullish", "surge", "rally",
    "outperform", "beat", "exceed", "strong", "robust", "solid", "record", "milestone",
    "breakthrough", "success",
];

/// Negative financial terms
///
/// "down" is absent on purpose: it is a stop-word and would never be counted.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "loss", "decline", "fall", "drop", "bear", "bearish", "crash", "plunge", "underperform",
    "miss", "weak", "poor", "disappointing", "struggle", "concern", "risk", "uncertainty",
];

/// Lexicon hit counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeywordCounts {
    /// Positive hits
    pub positive: usize,
    /// Negative hits
    pub negative: usize,
}

impl KeywordCounts {
    /// Sum of both
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }
}

/// Count lexicon hits in normalized text
pub fn count_keywords(text: &str) -> KeywordCounts {
    let mut counts = KeywordCounts::default();
    for word in content_words(text) {
        if POSITIVE_KEYWORDS.contains(&word.as_str()) {
            counts.positive += 1;
        } else if NEGATIVE_KEYWORDS.contains(&word.as_str()) {
            counts.negative += 1;
        }
    }
    counts
}

/// Keyword scorer
#[derive(Debug, Clone)]
pub struct KeywordScorer {
    threshold: f64,
    saturation: usize,
}

impl KeywordScorer {
    /// Create a scorer
    ///
    /// # Arguments
    ///
    /// * `threshold` - Strict label threshold
    /// * `saturation` - Hit count at which confidence reaches 1.0 (must be > 0)
    pub fn new(threshold: f64, saturation: usize) -> Self {
        Self {
            threshold,
            saturation: saturation.max(1),
        }
    }
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new(0.2, 10)
    }
}

impl SentimentScorer for KeywordScorer {
    fn method(&self) -> Method {
        Method::Keyword
    }

    fn score(&self, text: &str) -> Result<MethodResult> {
        let counts = count_keywords(text);
        let total = counts.total();

        if total == 0 {
            log::debug!("Keyword: no lexicon hits");
            return Ok(MethodResult::neutral(Method::Keyword));
        }

        let score = (counts.positive as f64 - counts.negative as f64) / total as f64;
        let confidence = (total as f64 / self.saturation as f64).min(1.0);

        log::debug!(
            "Keyword: {:.3} ({} positive, {} negative)",
            score,
            counts.positive,
            counts.negative
        );

        Ok(MethodResult {
            method: Method::Keyword,
            score: Some(score),
            confidence,
            label: SentimentLabel::from_score_strict(score, self.threshold),
            details: MethodDetails::Keyword {
                positive_hits: counts.positive,
                negative_hits: counts.negative,
                total_hits: total,
            },
        })
    }
}
