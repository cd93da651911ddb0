//! Word tokenization and stop-word filtering

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// English stop-words (the standard NLTK list)
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Clause separators kept by the normalizer
const CLAUSE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Check a lowercase word against the stop-word list
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Lowercase word tokens, split at whitespace and clause punctuation
///
/// Hyphenated words stay whole; lone hyphens are dropped.
///
/// # Example
///
/// ```
/// use finsent::preprocessing::tokenizer::tokenize;
///
/// assert_eq!(tokenize("Profits rose, co-founder said!"), vec!["profits", "rose", "co-founder", "said"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || CLAUSE_PUNCTUATION.contains(&c))
        .filter(|token| !token.is_empty() && *token != "-")
        .map(|token| token.to_lowercase())
        .collect()
}

/// Purely alphabetic, non-stop-word tokens
///
/// The vocabulary the keyword counter and phrase extractor work on.
pub fn content_words(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| token.chars().all(char::is_alphabetic))
        .filter(|token| !is_stop_word(token))
        .collect()
}

/// Split text into clauses at clause punctuation
pub fn split_clauses(text: &str) -> Vec<&str> {
    text.split(|c: char| CLAUSE_PUNCTUATION.contains(&c))
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("Record PROFITS; strong growth."),
            vec!["record", "profits", "strong", "growth"]
        );
        assert!(tokenize("").is_empty());
        assert!(tokenize(" - , ").is_empty());
    }

    #[test]
    fn test_content_words_drop_stop_words_and_numbers() {
        assert_eq!(
            content_words("The company beat estimates by 12 percent in Q3"),
            vec!["company", "beat", "estimates", "percent"]
        );
    }

    #[test]
    fn test_up_and_down_are_stop_words() {
        assert!(is_stop_word("up"));
        assert!(is_stop_word("down"));
        assert!(content_words("shares up, bonds down").contains(&"shares".to_string()));
        assert_eq!(content_words("shares up, bonds down").len(), 2);
    }

    #[test]
    fn test_hyphenated_words_are_not_alphabetic() {
        assert!(content_words("year-over-year gains").iter().all(|w| w == "gains"));
    }

    #[test]
    fn test_split_clauses() {
        assert_eq!(
            split_clauses("Revenue rose. Margins fell, sharply!"),
            vec!["Revenue rose", "Margins fell", "sharply"]
        );
    }
}
