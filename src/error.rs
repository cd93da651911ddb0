//! Error types for the sentiment engine

use crate::analysis::result::Method;

/// Errors that can occur while configuring or running sentiment analysis
///
/// Scoring itself never surfaces these to callers of
/// [`SentimentAnalyzer::analyze`](crate::SentimentAnalyzer::analyze): scorer
/// errors are absorbed into a neutral, zero-confidence result for that method.
#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    /// Invalid configuration parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A scorer's underlying model failed
    #[error("{method} model failed: {message}")]
    Model {
        /// Scorer that failed
        method: Method,
        /// Failure description
        message: String,
    },

    /// Numerical error (NaN, infinity, out-of-range output)
    #[error("Numerical error: {0}")]
    Numerical(String),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SentimentError>;

/// Reject non-finite values produced by a scorer
pub(crate) fn ensure_finite(method: Method, name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SentimentError::Numerical(format!(
            "{} produced non-finite {}: {}",
            method, name, value
        )))
    }
}
