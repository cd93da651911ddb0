//! Sentiment analysis pipeline
//!
//! Raw text → degenerate-input check → normalization → scorers → consensus.
//!
//! Nothing here fails: scorer errors become a neutral, zero-confidence result
//! for that method, and a panic while analyzing one batch item becomes a
//! neutral result tagged [`Method::Error`] for that item only.

use crate::analysis::consensus::combine;
use crate::analysis::result::{ConsensusResult, Method, MethodResult};
use crate::config::AnalysisConfig;
use crate::error::{Result, SentimentError};
use crate::features::keyword::KeywordScorer;
use crate::features::polarity::PolarityScorer;
use crate::features::valence::ValenceScorer;
use crate::features::SentimentScorer;
use crate::io::article::{compose_analysis_text, Article};
use crate::preprocessing::normalization::normalize_text;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// One entry of a batch analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Position of the text in the input
    pub index: usize,

    /// Analysis result (neutral and tagged `error` if analysis failed)
    pub result: ConsensusResult,

    /// Failure description, if analysis failed
    pub error: Option<String>,
}

/// Sentiment analyzer combining the polarity, valence and keyword scorers
pub struct SentimentAnalyzer {
    config: AnalysisConfig,
    scorers: Vec<Box<dyn SentimentScorer>>,
}

impl fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let methods: Vec<Method> = self.scorers.iter().map(|s| s.method()).collect();
        f.debug_struct("SentimentAnalyzer")
            .field("config", &self.config)
            .field("scorers", &methods)
            .finish()
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::build(AnalysisConfig::default())
    }
}

impl SentimentAnalyzer {
    /// Create an analyzer with the built-in scorers
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: AnalysisConfig) -> Self {
        let scorers: Vec<Box<dyn SentimentScorer>> = vec![
            Box::new(PolarityScorer::new(config.polarity_threshold)),
            Box::new(ValenceScorer::new(config.valence_threshold)),
            Box::new(KeywordScorer::new(
                config.keyword_threshold,
                config.keyword_saturation,
            )),
        ];
        Self { config, scorers }
    }

    /// Replace the scorer producing the same method tag, or add it
    ///
    /// Only methods with a consensus weight affect the final result.
    pub fn with_scorer(mut self, scorer: impl SentimentScorer + 'static) -> Self {
        let method = scorer.method();
        match self.scorers.iter().position(|s| s.method() == method) {
            Some(i) => self.scorers[i] = Box::new(scorer),
            None => self.scorers.push(Box::new(scorer)),
        }
        self
    }

    /// Active configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze one text
    ///
    /// Empty or whitespace-only text returns the neutral, zero-confidence
    /// result tagged [`Method::Unknown`] without running any scorer.
    ///
    /// # Example
    ///
    /// ```
    /// use finsent::{SentimentAnalyzer, SentimentLabel};
    ///
    /// let analyzer = SentimentAnalyzer::default();
    /// let result = analyzer.analyze("Record profits and strong growth, investors optimistic");
    /// assert_eq!(result.label, SentimentLabel::Positive);
    /// ```
    pub fn analyze(&self, text: &str) -> ConsensusResult {
        if text.trim().is_empty() {
            log::debug!("Empty text; skipping sentiment scorers");
            return ConsensusResult::neutral(Method::Unknown);
        }

        let normalized = normalize_text(text);
        let results: Vec<MethodResult> = self
            .scorers
            .iter()
            .map(|scorer| self.run_scorer(scorer.as_ref(), &normalized))
            .collect();

        combine(&results, &self.config.weights)
    }

    /// Analyze an article's assembled text
    pub fn analyze_article(&self, article: &Article) -> ConsensusResult {
        let text = compose_analysis_text(article, self.config.content_char_limit);
        self.analyze(&text)
    }

    /// Analyze many texts in parallel
    ///
    /// Entry `i` always belongs to `texts[i]`. A panic while analyzing one
    /// text is contained to that entry.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<BatchEntry>
    where
        S: AsRef<str> + Sync,
    {
        log::debug!("Analyzing batch of {} texts", texts.len());

        texts
            .par_iter()
            .enumerate()
            .map(|(index, text)| {
                match panic::catch_unwind(AssertUnwindSafe(|| self.analyze(text.as_ref()))) {
                    Ok(result) => BatchEntry {
                        index,
                        result,
                        error: None,
                    },
                    Err(payload) => {
                        let message = panic_message(payload.as_ref());
                        log::error!("Error analyzing text {}: {}", index, message);
                        BatchEntry {
                            index,
                            result: ConsensusResult::neutral(Method::Error),
                            error: Some(message),
                        }
                    }
                }
            })
            .collect()
    }

    fn run_scorer(&self, scorer: &dyn SentimentScorer, text: &str) -> MethodResult {
        let method = scorer.method();
        match scorer.score(text).and_then(|result| check_result(method, result)) {
            Ok(result) => result,
            Err(err) => {
                log::error!("{} analysis error: {}", method, err);
                MethodResult::neutral(method)
            }
        }
    }
}

/// Enforce the result invariants on scorer output
fn check_result(method: Method, result: MethodResult) -> Result<MethodResult> {
    if result.method != method {
        return Err(SentimentError::Model {
            method,
            message: format!("result tagged {}", result.method),
        });
    }
    if let Some(score) = result.score {
        if !(-1.0..=1.0).contains(&score) {
            return Err(SentimentError::Numerical(format!(
                "{} score {} outside [-1, 1]",
                method, score
            )));
        }
    }
    if !(0.0..=1.0).contains(&result.confidence) {
        return Err(SentimentError::Numerical(format!(
            "{} confidence {} outside [0, 1]",
            method, result.confidence
        )));
    }
    Ok(result)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "analysis panicked".to_string()
    }
}
