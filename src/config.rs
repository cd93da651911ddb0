//! Configuration parameters for sentiment analysis

use crate::analysis::result::Method;
use crate::error::{Result, SentimentError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-method weights used by the consensus combiner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusWeights {
    /// Polarity model weight (default: 0.4)
    pub polarity: f64,
    /// Valence model weight (default: 0.4)
    pub valence: f64,
    /// Keyword counter weight (default: 0.2)
    pub keyword: f64,
}

impl Default for ConsensusWeights {
    fn default() -> Self {
        Self {
            polarity: 0.4,
            valence: 0.4,
            keyword: 0.2,
        }
    }
}

impl ConsensusWeights {
    /// Weight for a scorer; `None` for methods that never vote
    pub fn for_method(&self, method: Method) -> Option<f64> {
        match method {
            Method::Polarity => Some(self.polarity),
            Method::Valence => Some(self.valence),
            Method::Keyword => Some(self.keyword),
            Method::Combined | Method::Unknown | Method::Error => None,
        }
    }

    fn validate(&self) -> Result<()> {
        for (name, weight) in [
            ("polarity", self.polarity),
            ("valence", self.valence),
            ("keyword", self.keyword),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SentimentError::InvalidConfig(format!(
                    "{} weight must be a finite non-negative number, got {}",
                    name, weight
                )));
            }
        }
        if self.polarity + self.valence + self.keyword <= 0.0 {
            return Err(SentimentError::InvalidConfig(
                "consensus weights must sum to a positive total".to_string(),
            ));
        }
        Ok(())
    }
}

/// Analysis configuration parameters
///
/// Every field has a default, so a JSON file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    // Consensus
    /// Combiner weights (default: 0.4 / 0.4 / 0.2)
    pub weights: ConsensusWeights,

    // Labelling
    /// Polarity label threshold, strict (default: 0.1)
    pub polarity_threshold: f64,

    /// Valence label threshold, inclusive (default: 0.05)
    pub valence_threshold: f64,

    /// Keyword label threshold, strict (default: 0.2)
    pub keyword_threshold: f64,

    /// Keyword hits at which keyword confidence saturates at 1.0 (default: 10)
    pub keyword_saturation: usize,

    // Article text assembly
    /// Maximum article content characters before truncation (default: 2000)
    pub content_char_limit: usize,

    // Assessment
    /// Subjectivity above which the polarity output is flagged (default: 0.7)
    pub high_subjectivity: f64,

    /// Final confidence below which a result is flagged (default: 0.3)
    pub low_confidence: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            weights: ConsensusWeights::default(),
            polarity_threshold: 0.1,
            valence_threshold: 0.05,
            keyword_threshold: 0.2,
            keyword_saturation: 10,
            content_char_limit: 2000,
            high_subjectivity: 0.7,
            low_confidence: 0.3,
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a JSON configuration
    ///
    /// # Example
    ///
    /// ```
    /// use finsent::AnalysisConfig;
    ///
    /// let config = AnalysisConfig::from_json_str(r#"{ "weights": { "keyword": 0.5 } }"#)?;
    /// assert_eq!(config.weights.keyword, 0.5);
    /// assert_eq!(config.weights.polarity, 0.4);
    /// # Ok::<(), finsent::SentimentError>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading analysis config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check that all parameters are usable
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;

        for (name, value) in [
            ("polarity_threshold", self.polarity_threshold),
            ("valence_threshold", self.valence_threshold),
            ("keyword_threshold", self.keyword_threshold),
            ("high_subjectivity", self.high_subjectivity),
            ("low_confidence", self.low_confidence),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SentimentError::InvalidConfig(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.keyword_saturation == 0 {
            return Err(SentimentError::InvalidConfig(
                "keyword_saturation must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.weights.for_method(Method::Keyword), Some(0.2));
        assert_eq!(config.weights.for_method(Method::Combined), None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AnalysisConfig::from_json_str(r#"{ "keyword_saturation": 5 }"#).unwrap();
        assert_eq!(config.keyword_saturation, 5);
        assert_eq!(config.polarity_threshold, 0.1);
        assert_eq!(config.weights, ConsensusWeights::default());
    }

    #[test]
    fn test_rejects_zero_weights() {
        let err = AnalysisConfig::from_json_str(
            r#"{ "weights": { "polarity": 0.0, "valence": 0.0, "keyword": 0.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, SentimentError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_negative_weight_and_bad_saturation() {
        let mut config = AnalysisConfig::default();
        config.weights.valence = -0.1;
        assert!(config.validate().is_err());

        let config = AnalysisConfig {
            keyword_saturation: 0,
            ..AnalysisConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = AnalysisConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, SentimentError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AnalysisConfig::from_json_file("/nonexistent/finsent.json").unwrap_err();
        assert!(matches!(err, SentimentError::Io(_)));
    }
}
