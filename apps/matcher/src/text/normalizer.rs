//! Turns raw document text into the filtered token sequence
//! every other part of the engine counts.
//!
//! Pipeline:
//! 1. lowercase the whole input
//! 2. delete ASCII punctuation (``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``), no space inserted
//! 3. split on whitespace
//! 4. drop stopwords, tokens of 2 chars or fewer, and tokens containing a digit

use crate::text::stopwords::StopWords;

/// Tokens this short or shorter are dropped.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Normalizes `text` into surviving tokens, in source order.
pub fn normalize(text: &str, stopwords: &StopWords) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| keep_token(token, stopwords))
        .map(str::to_string)
        .collect()
}

// Any Unicode numeric char rejects a token, vulgar fractions and roman
// numerals included, which is broader than a decimal-digit check.
fn keep_token(token: &str, stopwords: &StopWords) -> bool {
    token.chars().count() > MIN_TOKEN_CHARS
        && !token.chars().any(char::is_numeric)
        && !stopwords.contains(token)
}
