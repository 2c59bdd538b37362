//! Stopword sets: the baseline English list plus optional caller-supplied extras.
//!
//! A `StopWords` value is frozen once built: there is no insertion API, so a
//! store that owns one always filters with the same set.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::errors::MatchError;

/// Standard English stopword list (179 words).
const ENGLISH: &[&str] = &[
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

static ENGLISH_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| ENGLISH.iter().map(|w| w.to_string()).collect());

/// Immutable set of words removed during normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty set. Only the length and digit filters apply.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Baseline English list.
    pub fn english() -> Self {
        Self {
            words: ENGLISH_SET.clone(),
        }
    }

    /// Baseline list merged with `extra` (lowercased, trimmed, blanks skipped).
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stopwords = Self::english();
        stopwords.merge(extra);
        stopwords
    }

    /// Baseline list plus, if given, one word per line from `path`.
    pub fn load(path: Option<&Path>) -> Result<Self, MatchError> {
        let Some(path) = path else {
            return Ok(Self::english());
        };
        let contents = fs::read_to_string(path).map_err(|e| {
            MatchError::Ingestion(format!(
                "failed to read stopword file {}: {e}",
                path.display()
            ))
        })?;
        Ok(Self::with_extra(contents.lines()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn merge<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in extra {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() {
                self.words.insert(word);
            }
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    /// A set made of exactly these words, without the baseline list.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut stopwords = Self::empty();
        stopwords.merge(iter);
        stopwords
    }
}
