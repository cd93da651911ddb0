//! Key phrase extraction
//!
//! Candidate phrases are maximal runs of content words (alphabetic, not
//! stop-words) inside a clause. Runs of two to four words are kept, in
//! first-seen order, without duplicates.

use crate::preprocessing::normalization::normalize_text;
use crate::preprocessing::tokenizer::{is_stop_word, split_clauses, tokenize};
use std::collections::HashSet;

/// Shortest phrase kept, in words
const MIN_PHRASE_WORDS: usize = 2;

/// Longest phrase kept, in words
const MAX_PHRASE_WORDS: usize = 4;

fn is_content_word(token: &str) -> bool {
    token.chars().all(char::is_alphabetic) && !is_stop_word(token)
}

/// Extract up to `limit` key phrases from raw text
///
/// # Example
///
/// ```
/// use finsent::features::phrases::extract_key_phrases;
///
/// let phrases = extract_key_phrases("Apple reported record revenue and strong iPhone demand.", 5);
/// assert_eq!(phrases, vec!["apple reported record revenue", "strong iphone demand"]);
/// ```
pub fn extract_key_phrases(text: &str, limit: usize) -> Vec<String> {
    let normalized = normalize_text(text);
    let mut seen = HashSet::new();
    let mut phrases = Vec::new();

    let mut flush = |run: &mut Vec<String>, phrases: &mut Vec<String>| {
        if (MIN_PHRASE_WORDS..=MAX_PHRASE_WORDS).contains(&run.len()) {
            let phrase = run.join(" ");
            if seen.insert(phrase.clone()) {
                phrases.push(phrase);
            }
        }
        run.clear();
    };

    for clause in split_clauses(&normalized) {
        let mut run: Vec<String> = Vec::new();
        for token in tokenize(clause) {
            if is_content_word(&token) {
                run.push(token);
            } else {
                flush(&mut run, &mut phrases);
            }
        }
        flush(&mut run, &mut phrases);
    }

    log::debug!("Extracted {} candidate key phrases", phrases.len());
    phrases.truncate(limit);
    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_split_at_stop_words_and_punctuation() {
        let phrases = extract_key_phrases("Tesla shares fell; Model X demand weakened in Europe", 10);
        assert_eq!(phrases, vec!["tesla shares fell", "model x demand weakened"]);
    }

    #[test]
    fn test_single_words_and_long_runs_dropped() {
        let phrases = extract_key_phrases("Growth. Record strong quarterly revenue growth continued", 10);
        assert!(phrases.is_empty());
    }

    #[test]
    fn test_deduplicates_and_limits() {
        let phrases = extract_key_phrases(
            "cloud revenue rose. Cloud revenue rose. chip sales slowed. ad spend recovered",
            2,
        );
        assert_eq!(phrases, vec!["cloud revenue rose", "chip sales slowed"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_key_phrases("", 5).is_empty());
        assert!(extract_key_phrases("   ", 5).is_empty());
    }
}
