//! Consensus assessment
//!
//! Summarizes how trustworthy a [`ConsensusResult`] is. The consensus itself
//! already carries a weighted confidence; this module adds how strongly the
//! methods agreed and flags specific weaknesses.
//!
//! # Flags
//!
//! 1. **MethodDisagreement**: an active method voted for a different label
//! 2. **NoKeywordSignal**: the financial keyword counter found no lexicon terms
//! 3. **HighSubjectivity**: the polarity model rated the text as opinion-laden
//! 4. **LowConfidence**: final confidence below the configured floor
//! 5. **NoSignal**: sentinel result, no scorer output at all
//!
//! # Example
//!
//! ```
//! use finsent::{assess_consensus, AnalysisConfig, ConsensusFlag, SentimentAnalyzer};
//!
//! let analyzer = SentimentAnalyzer::default();
//! let result = analyzer.analyze("");
//! let assessment = assess_consensus(&result, &AnalysisConfig::default());
//!
//! assert!(assessment.flags.contains(&ConsensusFlag::NoSignal));
//! assert_eq!(assessment.agreement, 0.0);
//! ```

use super::result::{ConsensusResult, Method, MethodDetails};
use crate::config::AnalysisConfig;
use serde::{Deserialize, Serialize};

/// Assessment flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsensusFlag {
    /// Active methods voted for different labels
    MethodDisagreement,
    /// Keyword counter found no lexicon terms
    NoKeywordSignal,
    /// Polarity subjectivity above the configured ceiling
    HighSubjectivity,
    /// Final confidence below the configured floor
    LowConfidence,
    /// Sentinel result without scorer output
    NoSignal,
}

/// Consensus quality summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusAssessment {
    /// Share of vote weight behind the final label (0.0-1.0)
    pub agreement: f64,

    /// Number of methods that took part in the vote
    pub active_methods: usize,

    /// Specific issues
    pub flags: Vec<ConsensusFlag>,
}

/// Assess a consensus result
pub fn assess_consensus(result: &ConsensusResult, config: &AnalysisConfig) -> ConsensusAssessment {
    let mut flags = Vec::new();

    if result.is_sentinel() {
        flags.push(ConsensusFlag::NoSignal);
        flags.push(ConsensusFlag::LowConfidence);
        return ConsensusAssessment {
            agreement: 0.0,
            active_methods: 0,
            flags,
        };
    }

    let active: Vec<_> = result
        .methods
        .values()
        .filter(|m| m.is_active() && config.weights.for_method(m.method).is_some())
        .collect();

    let total_votes = result.votes.total();
    let agreement = if total_votes > 0.0 {
        (result.votes.get(result.label) / total_votes).clamp(0.0, 1.0)
    } else {
        0.0
    };

    if active.iter().any(|m| m.label != result.label) {
        flags.push(ConsensusFlag::MethodDisagreement);
    }

    match result.method_result(Method::Keyword).map(|m| &m.details) {
        Some(MethodDetails::Keyword { total_hits, .. }) if *total_hits > 0 => {}
        _ => flags.push(ConsensusFlag::NoKeywordSignal),
    }

    if let Some(MethodDetails::Polarity { subjectivity }) =
        result.method_result(Method::Polarity).map(|m| &m.details)
    {
        if *subjectivity > config.high_subjectivity {
            flags.push(ConsensusFlag::HighSubjectivity);
        }
    }

    if result.confidence < config.low_confidence {
        flags.push(ConsensusFlag::LowConfidence);
    }

    log::debug!(
        "Consensus assessment: agreement {:.2}, {} active, flags {:?}",
        agreement,
        active.len(),
        flags
    );

    ConsensusAssessment {
        agreement,
        active_methods: active.len(),
        flags,
    }
}
