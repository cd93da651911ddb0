//! Polarity/subjectivity lexicon
//!
//! Each entry is `(word, polarity, subjectivity)` with polarity in [-1, 1] and
//! subjectivity in [0, 1]. Words that only modify their neighbour live in the
//! intensifier table instead.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Sentiment-bearing words
const ENTRIES: &[(&str, f64, f64)] = &[
    // General evaluative adjectives
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("outstanding", 0.5, 0.75),
    ("impressive", 1.0, 1.0),
    ("remarkable", 0.75, 0.75),
    ("exceptional", 0.667, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("happy", 0.8, 1.0),
    ("pleased", 0.5, 0.5),
    ("positive", 0.227, 0.545),
    ("favorable", 0.4, 0.6),
    ("successful", 0.75, 0.95),
    ("promising", 0.35, 0.65),
    ("bad", -0.7, 0.667),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("poor", -0.4, 0.6),
    ("negative", -0.3, 0.4),
    ("unfavorable", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.75, 0.75),
    ("unfortunate", -0.5, 1.0),
    ("difficult", -0.5, 1.0),
    ("wrong", -0.5, 0.9),
    // Market and earnings vocabulary
    ("strong", 0.433, 0.733),
    ("stronger", 0.433, 0.733),
    ("robust", 0.4, 0.5),
    ("solid", 0.2, 0.4),
    ("healthy", 0.5, 0.5),
    ("stable", 0.2, 0.4),
    ("optimistic", 0.4, 0.6),
    ("confident", 0.5, 0.65),
    ("bullish", 0.5, 0.6),
    ("upbeat", 0.5, 0.6),
    ("profitable", 0.5, 0.5),
    ("lucrative", 0.6, 0.6),
    ("innovative", 0.5, 0.75),
    ("efficient", 0.3, 0.4),
    ("record", 0.25, 0.3),
    ("significant", 0.375, 0.875),
    ("high", 0.16, 0.54),
    ("higher", 0.25, 0.5),
    ("weak", -0.375, 0.625),
    ("weaker", -0.375, 0.625),
    ("soft", -0.1, 0.3),
    ("fragile", -0.4, 0.6),
    ("unstable", -0.4, 0.6),
    ("volatile", -0.2, 0.5),
    ("pessimistic", -0.4, 0.6),
    ("bearish", -0.5, 0.6),
    ("gloomy", -0.5, 0.7),
    ("bleak", -0.6, 0.7),
    ("uncertain", -0.2, 0.6),
    ("risky", -0.3, 0.6),
    ("costly", -0.3, 0.5),
    ("sluggish", -0.4, 0.6),
    ("troubled", -0.5, 0.7),
    ("bankrupt", -0.6, 0.6),
    ("fraudulent", -0.7, 0.8),
    ("low", 0.0, 0.3),
    ("lower", -0.1, 0.3),
];

/// Words that scale the next sentiment word
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("really", 1.2),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("particularly", 1.2),
    ("especially", 1.2),
    ("remarkably", 1.3),
    ("exceptionally", 1.4),
    ("quite", 1.1),
    ("so", 1.2),
    ("too", 1.2),
    ("fairly", 0.9),
    ("somewhat", 0.8),
    ("slightly", 0.6),
    ("barely", 0.5),
];

/// Words that flip the polarity of a following sentiment word
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "cannot", "without", "dont", "doesnt", "didnt",
    "isnt", "wasnt", "arent", "werent", "cant", "couldnt", "wont", "wouldnt", "shouldnt",
    "hasnt", "havent", "hadnt",
];

static POLARITY: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
        .collect()
});

static INTENSITY: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| INTENSIFIERS.iter().copied().collect());

/// `(polarity, subjectivity)` for a lowercase word
pub fn lookup(word: &str) -> Option<(f64, f64)> {
    POLARITY.get(word).copied()
}

/// Intensity multiplier for a lowercase modifier word
pub fn intensity(word: &str) -> Option<f64> {
    INTENSITY.get(word).copied()
}

/// Whether a lowercase word negates what follows
pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}
