//! # finsent
//!
//! A sentiment engine for financial news, scoring each text with three
//! independent lexical methods and merging them into one confidence-weighted
//! consensus.
//!
//! ## Features
//!
//! - **Polarity**: lexicon polarity/subjectivity model; confidence is objectivity
//! - **Valence**: rule-based compound valence with negation, boosters and emphasis
//! - **Keywords**: financial keyword counter with volume-scaled confidence
//! - **Consensus**: weighted score/confidence and weighted majority label vote
//! - **Batch**: parallel analysis with per-item failure isolation
//!
//! ## Quick Start
//!
//! ```
//! use finsent::{analyze_text, Method, SentimentLabel};
//!
//! let result = analyze_text("Missed earnings, weak outlook, significant risk");
//!
//! println!("Score: {:.2} (confidence: {:.2})", result.score, result.confidence);
//! assert_eq!(result.label, SentimentLabel::Negative);
//! assert_eq!(result.method, Method::Combined);
//! ```
//!
//! ## Architecture
//!
//! The analysis pipeline follows this flow:
//!
//! ```text
//! Text → Normalization → { Polarity, Valence, Keyword } → Consensus → Output
//! ```
//!
//! Every stage is a pure function of its input. Lexicons and compiled
//! patterns are immutable statics built on first use.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod preprocessing;

use once_cell::sync::Lazy;

// Re-export main types
pub use analysis::confidence::{assess_consensus, ConsensusAssessment, ConsensusFlag};
pub use analysis::result::{
    ConsensusResult, LabelVotes, Method, MethodDetails, MethodResult, SentimentLabel,
};
pub use analyzer::{BatchEntry, SentimentAnalyzer};
pub use config::{AnalysisConfig, ConsensusWeights};
pub use error::SentimentError;
pub use features::SentimentScorer;
pub use io::article::{Article, SentimentRow};
pub use io::company::{CompanyMatcher, TrackedCompany};

static DEFAULT_ANALYZER: Lazy<SentimentAnalyzer> = Lazy::new(SentimentAnalyzer::default);

/// Main analysis function
///
/// Scores text with the default configuration. The shared analyzer is built
/// once, on first call.
///
/// # Arguments
///
/// * `text` - Raw text (article title, description and content)
///
/// # Returns
///
/// `ConsensusResult` with final score, confidence, label and the per-method
/// results. Never fails: degenerate input yields a neutral, zero-confidence
/// result.
///
/// # Example
///
/// ```
/// use finsent::{analyze_text, SentimentLabel};
///
/// let result = analyze_text("");
/// assert_eq!(result.label, SentimentLabel::Neutral);
/// assert_eq!(result.confidence, 0.0);
/// ```
pub fn analyze_text(text: &str) -> ConsensusResult {
    DEFAULT_ANALYZER.analyze(text)
}

/// Analyze many texts in parallel with the default configuration
///
/// Output entry `i` belongs to input `i`.
pub fn analyze_batch<S>(texts: &[S]) -> Vec<BatchEntry>
where
    S: AsRef<str> + Sync,
{
    DEFAULT_ANALYZER.analyze_batch(texts)
}
