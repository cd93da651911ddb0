//! Polarity scorer
//!
//! General-purpose lexical sentiment model producing a continuous polarity in
//! [-1, 1] and a subjectivity measure in [0, 1].
//!
//! # Algorithm
//!
//! Per clause, every lexicon word contributes its `(polarity, subjectivity)`:
//! 1. A directly preceding intensifier scales both values
//! 2. A negation within the two preceding tokens multiplies polarity by -0.5
//!
//! Polarity and subjectivity are the means over all contributions. Text without
//! sentiment words is read as fully objective and neutral (0.0, 0.0).
//!
//! Confidence is objectivity: `1 - subjectivity`.

pub mod lexicon;

use super::SentimentScorer;
use crate::analysis::result::{Method, MethodDetails, MethodResult, SentimentLabel};
use crate::error::{ensure_finite, Result};
use crate::preprocessing::tokenizer::{split_clauses, tokenize};

/// Polarity applied to a negated sentiment word
const NEGATION_FACTOR: f64 = -0.5;

/// How many tokens back a negation still applies
const NEGATION_WINDOW: usize = 2;

/// Raw model output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScores {
    /// Mean polarity in [-1, 1]
    pub polarity: f64,
    /// Mean subjectivity in [0, 1]
    pub subjectivity: f64,
    /// Number of sentiment words that contributed
    pub matched: usize,
}

/// Compute polarity and subjectivity for normalized text
pub fn measure(text: &str) -> PolarityScores {
    let mut polarities = Vec::new();
    let mut subjectivities = Vec::new();

    for clause in split_clauses(text) {
        let tokens = tokenize(clause);
        for (i, token) in tokens.iter().enumerate() {
            let Some((mut polarity, mut subjectivity)) = lexicon::lookup(token) else {
                continue;
            };

            if let Some(multiplier) = i
                .checked_sub(1)
                .and_then(|prev| lexicon::intensity(&tokens[prev]))
            {
                polarity *= multiplier;
                subjectivity *= multiplier;
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| lexicon::is_negation(t)) {
                polarity *= NEGATION_FACTOR;
            }

            polarities.push(polarity);
            subjectivities.push(subjectivity);
        }
    }

    if polarities.is_empty() {
        return PolarityScores {
            polarity: 0.0,
            subjectivity: 0.0,
            matched: 0,
        };
    }

    let n = polarities.len() as f64;
    PolarityScores {
        polarity: (polarities.iter().sum::<f64>() / n).clamp(-1.0, 1.0),
        subjectivity: (subjectivities.iter().sum::<f64>() / n).clamp(0.0, 1.0),
        matched: polarities.len(),
    }
}

/// Polarity scorer
#[derive(Debug, Clone)]
pub struct PolarityScorer {
    threshold: f64,
}

impl PolarityScorer {
    /// Create a scorer with a strict label threshold (`> t` positive, `< -t` negative)
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for PolarityScorer {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl SentimentScorer for PolarityScorer {
    fn method(&self) -> Method {
        Method::Polarity
    }

    fn score(&self, text: &str) -> Result<MethodResult> {
        let scores = measure(text);
        let polarity = ensure_finite(Method::Polarity, "polarity", scores.polarity)?;
        let subjectivity = ensure_finite(Method::Polarity, "subjectivity", scores.subjectivity)?;

        log::debug!(
            "Polarity: {:.3} (subjectivity {:.3}, {} words)",
            polarity,
            subjectivity,
            scores.matched
        );

        Ok(MethodResult {
            method: Method::Polarity,
            score: Some(polarity),
            confidence: 1.0 - subjectivity,
            label: SentimentLabel::from_score_strict(polarity, self.threshold),
            details: MethodDetails::Polarity { subjectivity },
        })
    }
}
