//! Consensus combination
//!
//! Merges per-method results with fixed weights:
//! - score = Σ(w·score) / Σw
//! - confidence = Σ(w·confidence) / Σw
//! - label = weighted vote over each method's own label
//!
//! Only results whose method carries a weight and whose score is present take
//! part. The label is voted, never recomputed from the merged score, so a
//! result can carry a positive score with a neutral label.
//!
//! Vote ties are broken in the fixed order positive, negative, neutral.

use super::result::{ConsensusResult, LabelVotes, Method, MethodResult};
use crate::config::ConsensusWeights;
use std::collections::BTreeMap;

/// Combine scorer outputs into one consensus
///
/// # Arguments
///
/// * `results` - Per-method results (normally polarity, valence, keyword)
/// * `weights` - Combiner weights
///
/// # Returns
///
/// `ConsensusResult` tagged `combined`. When no result is active the neutral,
/// zero-confidence sentinel tagged `combined` is returned instead.
///
/// # Example
///
/// ```
/// use finsent::analysis::consensus::combine;
/// use finsent::{ConsensusWeights, Method, MethodDetails, MethodResult, SentimentLabel};
///
/// let vote = |method, score, label| MethodResult {
///     method,
///     score: Some(score),
///     confidence: 0.5,
///     label,
///     details: MethodDetails::None,
/// };
/// let result = combine(
///     &[
///         vote(Method::Polarity, 0.5, SentimentLabel::Positive),
///         vote(Method::Valence, 0.5, SentimentLabel::Positive),
///         vote(Method::Keyword, -1.0, SentimentLabel::Negative),
///     ],
///     &ConsensusWeights::default(),
/// );
/// assert_eq!(result.label, SentimentLabel::Positive);
/// assert!((result.score - 0.2).abs() < 1e-12);
/// ```
pub fn combine(results: &[MethodResult], weights: &ConsensusWeights) -> ConsensusResult {
    let mut score_sum = 0.0;
    let mut confidence_sum = 0.0;
    let mut total_weight = 0.0;
    let mut votes = LabelVotes::default();

    for result in results {
        let (Some(weight), Some(score)) = (weights.for_method(result.method), result.score) else {
            continue;
        };
        score_sum += weight * score;
        confidence_sum += weight * result.confidence;
        total_weight += weight;
        votes.add(result.label, weight);
    }

    let methods: BTreeMap<Method, MethodResult> = results
        .iter()
        .map(|result| (result.method, result.clone()))
        .collect();

    if total_weight <= 0.0 {
        log::warn!("No active sentiment methods; returning neutral consensus");
        return ConsensusResult {
            methods,
            ..ConsensusResult::neutral(Method::Combined)
        };
    }

    let label = votes.winner();
    let score = (score_sum / total_weight).clamp(-1.0, 1.0);
    let confidence = (confidence_sum / total_weight).clamp(0.0, 1.0);

    log::debug!(
        "Consensus: {} (score {:.3}, confidence {:.3}, votes +{:.2}/-{:.2}/={:.2})",
        label,
        score,
        confidence,
        votes.positive,
        votes.negative,
        votes.neutral
    );

    ConsensusResult {
        method: Method::Combined,
        score,
        confidence,
        label,
        votes,
        methods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::result::{MethodDetails, SentimentLabel};

    fn result(method: Method, score: f64, confidence: f64, label: SentimentLabel) -> MethodResult {
        MethodResult {
            method,
            score: Some(score),
            confidence,
            label,
            details: MethodDetails::None,
        }
    }

    #[test]
    fn test_weighted_score_and_confidence() {
        let results = [
            result(Method::Polarity, 0.5, 0.6, SentimentLabel::Positive),
            result(Method::Valence, 0.8, 0.9, SentimentLabel::Positive),
            result(Method::Keyword, -1.0, 0.3, SentimentLabel::Negative),
        ];
        let combined = combine(&results, &ConsensusWeights::default());

        let expected_score = (0.4 * 0.5 + 0.4 * 0.8 + 0.2 * -1.0) / (0.4 + 0.4 + 0.2);
        let expected_confidence = (0.4 * 0.6 + 0.4 * 0.9 + 0.2 * 0.3) / (0.4 + 0.4 + 0.2);
        assert!((combined.score - expected_score).abs() < 1e-12);
        assert!((combined.confidence - expected_confidence).abs() < 1e-12);
        assert_eq!(combined.method, Method::Combined);
        assert_eq!(combined.label, SentimentLabel::Positive);
        assert!((combined.votes.positive - 0.8).abs() < 1e-12);
        assert!((combined.votes.negative - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_inactive_method_excluded_from_denominator() {
        let results = [
            result(Method::Polarity, 0.5, 1.0, SentimentLabel::Positive),
            MethodResult::inactive(Method::Valence),
            result(Method::Keyword, -0.5, 0.5, SentimentLabel::Negative),
        ];
        let combined = combine(&results, &ConsensusWeights::default());

        let expected = (0.4 * 0.5 + 0.2 * -0.5) / 0.6;
        assert!((combined.score - expected).abs() < 1e-12);
        assert_eq!(combined.label, SentimentLabel::Positive);
        // Inactive results are still reported
        assert_eq!(combined.methods.len(), 3);
    }

    #[test]
    fn test_all_inactive_returns_combined_sentinel() {
        let results = [
            MethodResult::inactive(Method::Polarity),
            MethodResult::inactive(Method::Valence),
            MethodResult::inactive(Method::Keyword),
        ];
        let combined = combine(&results, &ConsensusWeights::default());
        assert_eq!(combined.method, Method::Combined);
        assert_eq!(combined.score, 0.0);
        assert_eq!(combined.confidence, 0.0);
        assert_eq!(combined.label, SentimentLabel::Neutral);

        let combined = combine(&[], &ConsensusWeights::default());
        assert_eq!(combined.label, SentimentLabel::Neutral);
        assert!(combined.methods.is_empty());
    }

    #[test]
    fn test_label_is_voted_not_recomputed() {
        // Merged score is clearly positive, but two of three methods vote neutral
        let results = [
            result(Method::Polarity, 0.09, 0.5, SentimentLabel::Neutral),
            result(Method::Valence, 0.04, 0.5, SentimentLabel::Neutral),
            result(Method::Keyword, 1.0, 0.1, SentimentLabel::Positive),
        ];
        let combined = combine(&results, &ConsensusWeights::default());
        assert!(combined.score > 0.2);
        assert_eq!(combined.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_tie_prefers_positive_then_negative() {
        let results = [
            result(Method::Polarity, 0.5, 0.5, SentimentLabel::Negative),
            result(Method::Valence, 0.5, 0.5, SentimentLabel::Positive),
            MethodResult::inactive(Method::Keyword),
        ];
        let combined = combine(&results, &ConsensusWeights::default());
        assert_eq!(combined.label, SentimentLabel::Positive);

        let results = [
            result(Method::Polarity, 0.0, 0.5, SentimentLabel::Neutral),
            result(Method::Valence, -0.5, 0.5, SentimentLabel::Negative),
        ];
        let combined = combine(&results, &ConsensusWeights::default());
        assert_eq!(combined.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_unweighted_methods_ignored() {
        let results = [
            result(Method::Combined, 1.0, 1.0, SentimentLabel::Positive),
            result(Method::Keyword, -1.0, 0.4, SentimentLabel::Negative),
        ];
        let combined = combine(&results, &ConsensusWeights::default());
        assert_eq!(combined.score, -1.0);
        assert_eq!(combined.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ConsensusWeights {
            polarity: 0.0,
            valence: 1.0,
            keyword: 0.0,
        };
        let results = [
            result(Method::Polarity, 1.0, 1.0, SentimentLabel::Positive),
            result(Method::Valence, -0.3, 0.7, SentimentLabel::Negative),
            result(Method::Keyword, 1.0, 1.0, SentimentLabel::Positive),
        ];
        let combined = combine(&results, &weights);
        assert!((combined.score - -0.3).abs() < 1e-12);
        assert_eq!(combined.label, SentimentLabel::Negative);
    }
}
