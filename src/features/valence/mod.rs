//! Valence scorer
//!
//! Rule-based valence model producing a compound score in [-1, 1] plus the
//! positive/neutral/negative proportions of the text.
//!
//! # Rules
//!
//! For each token (case preserved for emphasis detection):
//! - Lexicon valence, 0.0 for unknown words; modifier words score 0.0 themselves
//! - ALL-CAPS sentiment words in mixed-case text gain [`lexicon::CAPS_INCREMENT`]
//! - Boosters/dampeners within three tokens before add ±0.293 (scaled 1.0, 0.95, 0.9 by distance)
//! - Negations within three tokens before multiply by [`lexicon::NEGATION_SCALAR`]
//! - A contrastive "but" halves everything before it and scales everything after by 1.5
//!
//! The summed valence is amplified by `!` (up to four) and repeated `?`, then
//! squashed with `s / sqrt(s² + 15)`.

pub mod lexicon;

use super::SentimentScorer;
use crate::analysis::result::{Method, MethodDetails, MethodResult, SentimentLabel};
use crate::error::{ensure_finite, Result};

/// Normalization constant for the compound squash
const ALPHA: f64 = 15.0;

/// Emphasis per exclamation mark
const EXCLAMATION_BOOST: f64 = 0.292;

/// Exclamation marks counted at most
const MAX_EXCLAMATIONS: usize = 4;

/// Emphasis per question mark when two or three are present
const QUESTION_BOOST: f64 = 0.18;

/// Emphasis cap for four or more question marks
const MAX_QUESTION_BOOST: f64 = 0.96;

/// Modifier decay by distance (1, 2, 3 tokens before)
const DISTANCE_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

/// Raw model output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValenceScores {
    /// Compound score in [-1, 1]
    pub compound: f64,
    /// Positive proportion
    pub pos: f64,
    /// Neutral proportion
    pub neu: f64,
    /// Negative proportion
    pub neg: f64,
}

impl ValenceScores {
    const ZERO: ValenceScores = ValenceScores {
        compound: 0.0,
        pos: 0.0,
        neu: 0.0,
        neg: 0.0,
    };
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

/// Strip surrounding punctuation; tokens shorter than two characters are dropped
fn tokens(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| token.chars().count() > 1)
        .collect()
}

/// Booster/dampener contribution of `modifier` toward `valence`
fn modifier_boost(modifier: &str, valence: f64, caps_differ: bool) -> f64 {
    let Some(base) = lexicon::boost(&modifier.to_lowercase()) else {
        return 0.0;
    };
    let mut scalar = if valence < 0.0 { -base } else { base };
    if caps_differ && is_all_caps(modifier) {
        if valence > 0.0 {
            scalar += lexicon::CAPS_INCREMENT;
        } else {
            scalar -= lexicon::CAPS_INCREMENT;
        }
    }
    scalar
}

fn token_valences(words: &[&str]) -> Vec<f64> {
    let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let caps_count = words.iter().filter(|w| is_all_caps(w)).count();
    let caps_differ = caps_count > 0 && caps_count < words.len();

    let mut valences = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        let lower = &lowered[i];
        if lexicon::boost(lower).is_some() {
            valences.push(0.0);
            continue;
        }

        let mut valence = lexicon::valence(lower).unwrap_or(0.0);
        if valence != 0.0 {
            if caps_differ && is_all_caps(word) {
                valence += lexicon::CAPS_INCREMENT * valence.signum();
            }

            for (distance, decay) in DISTANCE_DECAY.iter().enumerate() {
                let Some(j) = i.checked_sub(distance + 1) else {
                    break;
                };
                if lexicon::valence(&lowered[j]).is_some() {
                    continue;
                }
                valence += modifier_boost(words[j], valence, caps_differ) * decay;
                if lexicon::is_negation(&lowered[j]) {
                    valence *= lexicon::NEGATION_SCALAR;
                }
            }
        }
        valences.push(valence);
    }

    if let Some(but) = lowered.iter().position(|w| w == "but") {
        for (i, valence) in valences.iter_mut().enumerate() {
            if i < but {
                *valence *= 0.5;
            } else if i > but {
                *valence *= 1.5;
            }
        }
    }

    valences
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_boost = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_BOOST,
        _ => MAX_QUESTION_BOOST,
    };
    exclamations as f64 * EXCLAMATION_BOOST + question_boost
}

/// Compute compound valence and class proportions for normalized text
pub fn measure(text: &str) -> ValenceScores {
    let words = tokens(text);
    if words.is_empty() {
        return ValenceScores::ZERO;
    }

    let valences = token_valences(&words);
    let emphasis = punctuation_emphasis(text);

    let mut sum: f64 = valences.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &v in &valences {
        if v > 0.0 {
            pos_sum += v + 1.0;
        } else if v < 0.0 {
            neg_sum += v - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    ValenceScores {
        compound: round_to(compound, 4),
        pos: round_to((pos_sum / total).abs(), 3),
        neu: round_to((neu_count / total).abs(), 3),
        neg: round_to((neg_sum / total).abs(), 3),
    }
}

/// Valence scorer
#[derive(Debug, Clone)]
pub struct ValenceScorer {
    threshold: f64,
}

impl ValenceScorer {
    /// Create a scorer with an inclusive label threshold (`>= t` positive, `<= -t` negative)
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for ValenceScorer {
    fn default() -> Self {
        Self::new(0.05)
    }
}

impl SentimentScorer for ValenceScorer {
    fn method(&self) -> Method {
        Method::Valence
    }

    fn score(&self, text: &str) -> Result<MethodResult> {
        let scores = measure(text);
        let compound = ensure_finite(Method::Valence, "compound", scores.compound)?;
        let pos = ensure_finite(Method::Valence, "pos", scores.pos)?;
        let neu = ensure_finite(Method::Valence, "neu", scores.neu)?;
        let neg = ensure_finite(Method::Valence, "neg", scores.neg)?;

        log::debug!(
            "Valence: compound {:.4} (pos {:.3}, neu {:.3}, neg {:.3})",
            compound,
            pos,
            neu,
            neg
        );

        Ok(MethodResult {
            method: Method::Valence,
            score: Some(compound),
            confidence: pos.max(neu).max(neg).clamp(0.0, 1.0),
            label: SentimentLabel::from_score_inclusive(compound, self.threshold),
            details: MethodDetails::Valence { pos, neu, neg },
        })
    }
}
