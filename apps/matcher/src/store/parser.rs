//! Pluggable source-to-tokens step used by
//! `DocumentStore::ingest_with`.
//!
//! Default: `DefaultParser` (read source, then `normalize`).
//! Custom parsers receive the store's stopwords and return the token
//! sequence; the store does the counting, so every parser yields a record
//! whose counts sum to its `numwords`.

use crate::errors::MatchError;
use crate::text::{normalize, read_source, SourceKind, StopWords};

/// Implement this to change how a source becomes tokens without touching
/// the store or scorer.
pub trait DocumentParser: Send + Sync {
    fn parse(
        &self,
        input: &str,
        kind: SourceKind,
        stopwords: &StopWords,
    ) -> Result<Vec<String>, MatchError>;
}

/// Reads the source (text, file, or PDF) and runs the standard normalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultParser;

impl DocumentParser for DefaultParser {
    fn parse(
        &self,
        input: &str,
        kind: SourceKind,
        stopwords: &StopWords,
    ) -> Result<Vec<String>, MatchError> {
        let text = read_source(input, kind)?;
        Ok(normalize(&text, stopwords))
    }
}
