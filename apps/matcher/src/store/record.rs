use std::cmp::Ordering;
use std::collections::HashMap;

/// Term counts for one ingested document.
///
/// Built once from a token sequence and never mutated; re-ingesting a label
/// replaces the whole record. `numwords` always equals the sum of the
/// `wordcount` values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRecord {
    pub wordcount: HashMap<String, u32>,
    pub numwords: usize,
}

impl DocumentRecord {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut wordcount: HashMap<String, u32> = HashMap::new();
        let mut numwords = 0;
        for token in tokens {
            *wordcount.entry(token.into()).or_insert(0) += 1;
            numwords += 1;
        }
        Self {
            wordcount,
            numwords,
        }
    }

    /// Number of distinct terms.
    pub fn unique_words(&self) -> usize {
        self.wordcount.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numwords == 0
    }

    pub fn contains(&self, term: &str) -> bool {
        self.wordcount.contains_key(term)
    }

    /// Occurrences of `term`, 0 if absent.
    pub fn count(&self, term: &str) -> u32 {
        self.wordcount.get(term).copied().unwrap_or(0)
    }

    /// The `n` most frequent terms, highest count first.
    /// Equal counts are ordered by term, ascending, so the result is stable
    /// across runs regardless of hash order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self
            .wordcount
            .iter()
            .map(|(term, &count)| (term.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| by_frequency(a.1, a.0, b.1, b.0));
        ranked.truncate(n);
        ranked
    }
}

/// Frequency descending, then term ascending.
pub(crate) fn by_frequency(count_a: u32, term_a: &str, count_b: u32, term_b: &str) -> Ordering {
    count_b.cmp(&count_a).then_with(|| term_a.cmp(term_b))
}
