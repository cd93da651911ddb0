//! Analysis result types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Tag identifying who produced a result
///
/// The first three variants are the scorers. The remaining variants only
/// appear as the top-level tag of a [`ConsensusResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// General-purpose polarity/subjectivity model
    Polarity,
    /// Rule-based valence model
    Valence,
    /// Financial keyword counter
    Keyword,
    /// Weighted consensus of the scorers
    Combined,
    /// Degenerate (empty) input, no scorer ran
    Unknown,
    /// Analysis of this item failed outright
    Error,
}

impl Method {
    /// The three scorers in pipeline order
    pub const SCORERS: [Method; 3] = [Method::Polarity, Method::Valence, Method::Keyword];

    /// Stable lowercase name, as stored downstream
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Polarity => "polarity",
            Method::Valence => "valence",
            Method::Keyword => "keyword",
            Method::Combined => "combined",
            Method::Unknown => "unknown",
            Method::Error => "error",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    /// Positive sentiment
    Positive,
    /// Negative sentiment
    Negative,
    /// Neither
    Neutral,
}

impl SentimentLabel {
    /// Vote tie-break order: the first label reaching the maximum wins
    pub const VOTE_ORDER: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Label with strict bounds: `score > t` positive, `score < -t` negative
    ///
    /// # Example
    ///
    /// ```
    /// use finsent::SentimentLabel;
    ///
    /// assert_eq!(SentimentLabel::from_score_strict(0.1, 0.1), SentimentLabel::Neutral);
    /// assert_eq!(SentimentLabel::from_score_strict(0.11, 0.1), SentimentLabel::Positive);
    /// ```
    pub fn from_score_strict(score: f64, threshold: f64) -> Self {
        if score > threshold {
            SentimentLabel::Positive
        } else if score < -threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Label with inclusive bounds: `score >= t` positive, `score <= -t` negative
    ///
    /// # Example
    ///
    /// ```
    /// use finsent::SentimentLabel;
    ///
    /// assert_eq!(SentimentLabel::from_score_inclusive(0.05, 0.05), SentimentLabel::Positive);
    /// assert_eq!(SentimentLabel::from_score_inclusive(-0.04, 0.05), SentimentLabel::Neutral);
    /// ```
    pub fn from_score_inclusive(score: f64, threshold: f64) -> Self {
        if score >= threshold {
            SentimentLabel::Positive
        } else if score <= -threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method-specific diagnostic fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MethodDetails {
    /// No extra fields (sentinel results)
    None,
    /// Polarity model output
    Polarity {
        /// Subjectivity in [0, 1]
        subjectivity: f64,
    },
    /// Valence model output
    Valence {
        /// Positive proportion
        pos: f64,
        /// Neutral proportion
        neu: f64,
        /// Negative proportion
        neg: f64,
    },
    /// Keyword counter output
    Keyword {
        /// Positive lexicon hits
        positive_hits: usize,
        /// Negative lexicon hits
        negative_hits: usize,
        /// Sum of both
        total_hits: usize,
    },
}

/// Output of a single scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodResult {
    /// Producing method
    pub method: Method,

    /// Score in [-1, 1]; `None` marks an inactive method the combiner skips
    pub score: Option<f64>,

    /// Confidence in [0, 1]
    pub confidence: f64,

    /// Label from this method's own thresholds
    pub label: SentimentLabel,

    /// Extra fields
    pub details: MethodDetails,
}

impl MethodResult {
    /// Neutral, zero-confidence result tagged with `method`
    ///
    /// Used for absorbed failures and for "nothing to say" outcomes.
    pub fn neutral(method: Method) -> Self {
        Self {
            method,
            score: Some(0.0),
            confidence: 0.0,
            label: SentimentLabel::Neutral,
            details: MethodDetails::None,
        }
    }

    /// Result with no score, ignored by the combiner
    pub fn inactive(method: Method) -> Self {
        Self {
            score: None,
            ..Self::neutral(method)
        }
    }

    /// Whether the combiner will count this result
    pub fn is_active(&self) -> bool {
        self.score.is_some()
    }
}

/// Accumulated vote weight per label
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelVotes {
    /// Weight voting positive
    pub positive: f64,
    /// Weight voting negative
    pub negative: f64,
    /// Weight voting neutral
    pub neutral: f64,
}

impl LabelVotes {
    /// Add `weight` to `label`'s tally
    pub fn add(&mut self, label: SentimentLabel, weight: f64) {
        match label {
            SentimentLabel::Positive => self.positive += weight,
            SentimentLabel::Negative => self.negative += weight,
            SentimentLabel::Neutral => self.neutral += weight,
        }
    }

    /// Tally for `label`
    pub fn get(&self, label: SentimentLabel) -> f64 {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    /// Sum of all tallies
    pub fn total(&self) -> f64 {
        self.positive + self.negative + self.neutral
    }

    /// Label with the highest tally
    ///
    /// Ties go to the label that comes first in [`SentimentLabel::VOTE_ORDER`]
    /// (positive, then negative, then neutral). All-zero votes yield positive,
    /// so callers must handle the empty case before asking.
    pub fn winner(&self) -> SentimentLabel {
        let mut best = SentimentLabel::VOTE_ORDER[0];
        for label in SentimentLabel::VOTE_ORDER.iter().skip(1) {
            if self.get(*label) > self.get(best) {
                best = *label;
            }
        }
        best
    }
}

/// Complete analysis result for one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusResult {
    /// Top-level tag: `combined` for normal results
    pub method: Method,

    /// Final score in [-1, 1]
    pub score: f64,

    /// Final confidence in [0, 1]
    pub confidence: f64,

    /// Final label (weighted vote of the per-method labels)
    pub label: SentimentLabel,

    /// Vote tallies behind `label`
    pub votes: LabelVotes,

    /// Per-method results, verbatim
    pub methods: BTreeMap<Method, MethodResult>,
}

impl ConsensusResult {
    /// Neutral, zero-confidence result with no method results
    pub fn neutral(method: Method) -> Self {
        Self {
            method,
            score: 0.0,
            confidence: 0.0,
            label: SentimentLabel::Neutral,
            votes: LabelVotes::default(),
            methods: BTreeMap::new(),
        }
    }

    /// Result of one scorer, if present
    pub fn method_result(&self, method: Method) -> Option<&MethodResult> {
        self.methods.get(&method)
    }

    /// Whether this is a sentinel carrying no scorer output
    pub fn is_sentinel(&self) -> bool {
        self.methods.is_empty()
    }
}
