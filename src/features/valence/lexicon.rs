//! Valence lexicon and modifier tables
//!
//! Valences are on the [-4, 4] scale of human-rated sentiment lexicons.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Boost added per booster word
pub const BOOSTER_INCREMENT: f64 = 0.293;

/// Boost subtracted per dampener word
pub const DAMPENER_DECREMENT: f64 = -0.293;

/// Emphasis added to an ALL-CAPS sentiment word in mixed-case text
pub const CAPS_INCREMENT: f64 = 0.733;

/// Multiplier applied to negated valence
pub const NEGATION_SCALAR: f64 = -0.74;

const VALENCES: &[(&str, f64)] = &[
    // Positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("outstanding", 3.0),
    ("impressive", 3.0),
    ("best", 3.2),
    ("better", 1.9),
    ("positive", 2.6),
    ("strong", 2.3),
    ("stronger", 2.1),
    ("strength", 2.2),
    ("robust", 1.5),
    ("solid", 1.2),
    ("stable", 1.2),
    ("healthy", 1.7),
    ("secure", 1.4),
    ("optimistic", 1.3),
    ("optimism", 2.5),
    ("confident", 2.2),
    ("confidence", 2.3),
    ("upbeat", 1.9),
    ("gain", 2.4),
    ("gains", 1.8),
    ("growth", 1.6),
    ("grow", 2.1),
    ("growing", 1.6),
    ("profit", 1.9),
    ("profits", 1.9),
    ("profitable", 1.9),
    ("success", 2.7),
    ("successful", 2.8),
    ("win", 2.8),
    ("wins", 2.7),
    ("winning", 2.4),
    ("benefit", 2.0),
    ("benefits", 1.6),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improvement", 2.0),
    ("boost", 1.7),
    ("boosted", 1.5),
    ("recovery", 1.4),
    ("rebound", 1.0),
    ("upgrade", 1.5),
    ("outperform", 1.5),
    ("exceeded", 1.4),
    ("soared", 1.8),
    ("opportunity", 1.8),
    ("promising", 2.4),
    ("innovative", 1.8),
    ("efficient", 1.8),
    ("happy", 2.7),
    ("pleased", 1.9),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("love", 3.2),
    ("thrive", 2.0),
    ("bullish", 1.2),
    // Negative
    ("bad", -2.5),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("worst", -3.1),
    ("worse", -2.1),
    ("poor", -2.1),
    ("weak", -1.9),
    ("weaker", -1.9),
    ("weakness", -1.8),
    ("negative", -2.7),
    ("loss", -1.3),
    ("losses", -1.7),
    ("lose", -1.7),
    ("losing", -1.6),
    ("lost", -1.3),
    ("decline", -1.1),
    ("declined", -1.0),
    ("declining", -1.2),
    ("drop", -1.1),
    ("dropped", -1.0),
    ("fell", -1.2),
    ("crash", -1.7),
    ("crashed", -1.8),
    ("plunged", -1.8),
    ("slump", -1.5),
    ("tumbled", -1.2),
    ("collapse", -2.2),
    ("risk", -1.1),
    ("risks", -1.1),
    ("risky", -0.8),
    ("fear", -2.2),
    ("fears", -1.8),
    ("worry", -1.9),
    ("worried", -1.2),
    ("worries", -1.8),
    ("concern", -1.2),
    ("concerns", -1.0),
    ("uncertainty", -1.4),
    ("uncertain", -1.2),
    ("volatile", -1.0),
    ("miss", -0.6),
    ("missed", -1.2),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("crisis", -3.1),
    ("debt", -1.5),
    ("bankrupt", -2.6),
    ("bankruptcy", -2.6),
    ("fraud", -2.8),
    ("scandal", -1.9),
    ("lawsuit", -1.0),
    ("penalty", -1.5),
    ("disappointing", -2.2),
    ("disappointed", -1.9),
    ("disappointment", -2.3),
    ("pessimistic", -1.5),
    ("bearish", -1.2),
    ("downgrade", -1.2),
    ("layoffs", -1.5),
    ("struggle", -1.3),
    ("struggling", -1.8),
    ("trouble", -1.7),
    ("problem", -1.7),
    ("problems", -1.7),
    ("hurt", -2.4),
    ("damage", -2.2),
    ("warning", -1.4),
    ("threat", -2.4),
    ("recession", -1.8),
    ("slowdown", -1.3),
    ("underperform", -1.2),
    ("hate", -2.7),
    ("sad", -2.1),
];

const BOOSTERS: &[&str] = &[
    "absolutely", "amazingly", "completely", "considerably", "decidedly", "deeply",
    "enormously", "entirely", "especially", "exceptionally", "extremely", "fully", "greatly",
    "highly", "hugely", "incredibly", "intensely", "more", "most", "particularly", "purely",
    "quite", "really", "remarkably", "so", "substantially", "significantly", "sharply",
    "thoroughly", "totally", "tremendously", "unbelievably", "unusually", "utterly", "very",
];

const DAMPENERS: &[&str] = &[
    "almost", "barely", "hardly", "less", "little", "marginally", "occasionally", "partly",
    "scarcely", "slightly", "somewhat",
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "wasnt", "werent",
    "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

static VALENCE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| VALENCES.iter().copied().collect());

static BOOSTER_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| BOOSTERS.iter().copied().collect());

static DAMPENER_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| DAMPENERS.iter().copied().collect());

static NEGATION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NEGATIONS.iter().copied().collect());

/// Valence of a lowercase word
pub fn valence(word: &str) -> Option<f64> {
    VALENCE.get(word).copied()
}

/// Unsigned boost for a lowercase modifier word
///
/// Positive for boosters, negative for dampeners.
pub fn boost(word: &str) -> Option<f64> {
    if BOOSTER_SET.contains(word) {
        Some(BOOSTER_INCREMENT)
    } else if DAMPENER_SET.contains(word) {
        Some(DAMPENER_DECREMENT)
    } else {
        None
    }
}

/// Whether a lowercase word negates what follows
pub fn is_negation(word: &str) -> bool {
    NEGATION_SET.contains(word) || word.contains("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valences_in_range() {
        for &(word, v) in VALENCES {
            assert!((-4.0..=4.0).contains(&v) && v != 0.0, "{} has bad valence {}", word, v);
        }
    }

    #[test]
    fn test_modifier_tables_do_not_overlap_lexicon() {
        for word in BOOSTERS.iter().chain(DAMPENERS).chain(NEGATIONS) {
            assert!(valence(word).is_none(), "{} is both modifier and sentiment word", word);
        }
    }

    #[test]
    fn test_boost_sign() {
        assert_eq!(boost("very"), Some(BOOSTER_INCREMENT));
        assert_eq!(boost("slightly"), Some(DAMPENER_DECREMENT));
        assert_eq!(boost("quarter"), None);
    }
}
