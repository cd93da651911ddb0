//! Text normalization
//!
//! Prepares raw article text for the scorers:
//! - Removes URLs and email addresses
//! - Collapses whitespace runs to single spaces
//! - Drops every character except word characters, whitespace and `. , ! ? ; : -`
//!
//! # Example
//!
//! ```
//! use finsent::preprocessing::normalization::normalize_text;
//!
//! let clean = normalize_text("Shares   soar!! See https://example.com/x or mail ir@acme.com ($$$)");
//! assert_eq!(clean, "Shares soar!! See or mail");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*(),]|%[0-9a-fA-F]{2})+")
        .expect("URL pattern is valid")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern is valid")
});

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static NON_SEMANTIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s.,!?;:-]").expect("punctuation pattern is valid"));

/// Normalize raw text for scoring
///
/// Never fails; empty input yields empty output. Symbols are stripped before
/// whitespace is collapsed, so the output never holds two consecutive spaces.
pub fn normalize_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let original_len = text.len();
    let text = URL_RE.replace_all(text, "");
    let text = EMAIL_RE.replace_all(&text, "");
    let text = NON_SEMANTIC_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");

    let cleaned = text.trim().to_string();
    log::debug!("Normalized text: {} -> {} bytes", original_len, cleaned.len());
    cleaned
}
