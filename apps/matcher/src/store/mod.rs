//! Labeled term-count records shared by the similarity
//! engine and match scorer.
//!
//! Records are immutable `Arc` snapshots. `ingest` parses outside the lock
//! and swaps the finished record in under the write lock, so concurrent
//! readers see either the previous record or the new one, never a partial
//! one. Writes to the map are serialized by the `RwLock`.

pub mod parser;
pub mod record;

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::MatcherConfig;
use crate::errors::MatchError;
use crate::text::{SourceKind, StopWords};

pub use parser::{DefaultParser, DocumentParser};
pub use record::DocumentRecord;

/// How many terms `document_stats` reports.
pub const STATS_TOP_WORDS: usize = 10;

/// Summary of one stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub total_words: usize,
    pub unique_words: usize,
    pub top_words: Vec<(String, u32)>,
}

#[derive(Debug)]
pub struct DocumentStore {
    stopwords: StopWords,
    documents: RwLock<HashMap<String, Arc<DocumentRecord>>>,
}

impl DocumentStore {
    /// Creates an empty store that filters with `stopwords` for its lifetime.
    pub fn new(stopwords: StopWords) -> Self {
        info!(stopwords = stopwords.len(), "document store initialized");
        Self {
            stopwords,
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Baseline English stopwords plus the configured stopword file, if any.
    pub fn from_config(config: &MatcherConfig) -> Result<Self, MatchError> {
        let stopwords = StopWords::load(config.stopwords_file.as_deref())?;
        Ok(Self::new(stopwords))
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Normalizes `input` and stores its counts under `label`, replacing any
    /// earlier record with that label.
    pub fn ingest(&self, label: &str, input: &str, kind: SourceKind) -> Result<(), MatchError> {
        self.ingest_with(label, input, kind, &DefaultParser)
    }

    /// Same as `ingest`, with a caller-supplied parser.
    pub fn ingest_with(
        &self,
        label: &str,
        input: &str,
        kind: SourceKind,
        parser: &dyn DocumentParser,
    ) -> Result<(), MatchError> {
        let tokens = parser.parse(input, kind, &self.stopwords)?;
        let record = DocumentRecord::from_tokens(tokens);
        info!(
            label,
            ?kind,
            numwords = record.numwords,
            unique_words = record.unique_words(),
            "document ingested"
        );
        self.write().insert(label.to_string(), Arc::new(record));
        Ok(())
    }

    /// Ingests a file, choosing text or PDF extraction by extension.
    /// The label defaults to the path itself.
    pub fn ingest_file(&self, path: &Path, label: Option<&str>) -> Result<String, MatchError> {
        let path_str = path.to_str().ok_or_else(|| {
            MatchError::Ingestion(format!("path is not valid UTF-8: {}", path.display()))
        })?;
        let label = label.unwrap_or(path_str).to_string();
        self.ingest(&label, path_str, SourceKind::for_path(path))?;
        Ok(label)
    }

    /// Snapshot of the record stored under `label`.
    pub fn get(&self, label: &str) -> Result<Arc<DocumentRecord>, MatchError> {
        self.read()
            .get(label)
            .cloned()
            .ok_or_else(|| MatchError::label_not_found(label))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.read().contains_key(label)
    }

    /// Removes a record, returning it if it was present.
    pub fn remove(&self, label: &str) -> Option<Arc<DocumentRecord>> {
        self.write().remove(label)
    }

    /// All stored labels, sorted.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.read().keys().cloned().collect();
        labels.sort();
        labels
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// The `n` most frequent terms of a document (ties by term, ascending).
    pub fn top_words(&self, label: &str, n: usize) -> Result<Vec<(String, u32)>, MatchError> {
        let record = self.get(label)?;
        Ok(owned(record.most_common(n)))
    }

    pub fn document_stats(&self, label: &str) -> Result<DocumentStats, MatchError> {
        let record = self.get(label)?;
        Ok(DocumentStats {
            total_words: record.numwords,
            unique_words: record.unique_words(),
            top_words: owned(record.most_common(STATS_TOP_WORDS)),
        })
    }

    // Records are swapped in whole, so a poisoned lock still guards a
    // consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<DocumentRecord>>> {
        self.documents.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<DocumentRecord>>> {
        self.documents.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn owned(terms: Vec<(&str, u32)>) -> Vec<(String, u32)> {
    terms
        .into_iter()
        .map(|(term, count)| (term.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::thread;

    /// One token per whitespace run, no filtering.
    struct WhitespaceParser;

    impl DocumentParser for WhitespaceParser {
        fn parse(
            &self,
            input: &str,
            _kind: SourceKind,
            _stopwords: &StopWords,
        ) -> Result<Vec<String>, MatchError> {
            Ok(input.split_whitespace().map(String::from).collect())
        }
    }

    fn english_store() -> DocumentStore {
        DocumentStore::new(StopWords::english())
    }

    #[test]
    fn test_ingest_raw_text_builds_record() {
        let store = DocumentStore::new(StopWords::empty());
        store
            .ingest("resume", "python sql python", SourceKind::RawText)
            .unwrap();

        let record = store.get("resume").unwrap();
        assert_eq!(record.count("python"), 2);
        assert_eq!(record.count("sql"), 1);
        assert_eq!(record.numwords, 3);
    }

    #[test]
    fn test_get_unknown_label_is_not_found() {
        let store = english_store();
        let err = store.get("job").unwrap_err();
        assert!(matches!(err, MatchError::NotFound(_)));
    }

    #[test]
    fn test_top_words_unknown_label_is_not_found() {
        let store = english_store();
        assert!(matches!(
            store.top_words("never-ingested", 10),
            Err(MatchError::NotFound(_))
        ));
    }

    #[test]
    fn test_reingest_is_idempotent() {
        let store = english_store();
        let text = "Built data pipelines in Python and Spark; Python daily.";
        store.ingest("resume", text, SourceKind::RawText).unwrap();
        let first = store.get("resume").unwrap();
        store.ingest("resume", text, SourceKind::RawText).unwrap();
        let second = store.get("resume").unwrap();

        assert_eq!(first.wordcount, second.wordcount);
        assert_eq!(first.numwords, second.numwords);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_reingest_overwrites() {
        let store = english_store();
        store.ingest("doc", "python python", SourceKind::RawText).unwrap();
        store.ingest("doc", "kubernetes", SourceKind::RawText).unwrap();

        let record = store.get("doc").unwrap();
        assert!(!record.contains("python"));
        assert_eq!(record.count("kubernetes"), 1);
        assert_eq!(record.numwords, 1);
    }

    #[test]
    fn test_sum_of_counts_equals_numwords_for_every_document() {
        let store = english_store();
        store
            .ingest(
                "job",
                "We are seeking a Software Engineer with experience in Python, JavaScript, \
                 and React. Experience with databases like PostgreSQL is a plus.",
                SourceKind::RawText,
            )
            .unwrap();
        store
            .ingest("resume", "React developer; Python, Python, Django.", SourceKind::RawText)
            .unwrap();

        for label in store.labels() {
            let record = store.get(&label).unwrap();
            let sum: u32 = record.wordcount.values().sum();
            assert_eq!(sum as usize, record.numwords, "label {label}");
        }
    }

    #[test]
    fn test_ingest_with_custom_parser_keeps_invariant() {
        let store = english_store();
        store
            .ingest_with("raw", "the the a Rust", SourceKind::RawText, &WhitespaceParser)
            .unwrap();

        let record = store.get("raw").unwrap();
        assert_eq!(record.count("the"), 2);
        assert_eq!(record.numwords, 4);
        let sum: u32 = record.wordcount.values().sum();
        assert_eq!(sum as usize, record.numwords);
    }

    #[test]
    fn test_ingest_file_defaults_label_to_path() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Rust engineer, distributed systems").unwrap();

        let store = english_store();
        let label = store.ingest_file(file.path(), None).unwrap();
        assert_eq!(label, file.path().to_str().unwrap());
        assert_eq!(store.get(&label).unwrap().count("rust"), 1);
    }

    #[test]
    fn test_ingest_file_with_explicit_label() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Rust engineer").unwrap();

        let store = english_store();
        let label = store.ingest_file(file.path(), Some("resume")).unwrap();
        assert_eq!(label, "resume");
        assert!(store.contains("resume"));
    }

    #[test]
    fn test_failed_ingestion_leaves_previous_record() {
        let store = english_store();
        store.ingest("resume", "python", SourceKind::RawText).unwrap();
        let err = store
            .ingest("resume", "/nonexistent/resume.txt", SourceKind::FilePath)
            .unwrap_err();

        assert!(matches!(err, MatchError::Ingestion(_)));
        assert_eq!(store.get("resume").unwrap().count("python"), 1);
    }

    #[test]
    fn test_document_stats() {
        let store = english_store();
        store
            .ingest("resume", "python sql python tableau python sql", SourceKind::RawText)
            .unwrap();

        let stats = store.document_stats("resume").unwrap();
        assert_eq!(stats.total_words, 6);
        assert_eq!(stats.unique_words, 3);
        assert_eq!(
            stats.top_words,
            vec![
                ("python".to_string(), 3),
                ("sql".to_string(), 2),
                ("tableau".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_from_config_merges_stopword_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "engineer").unwrap();
        let config = MatcherConfig {
            stopwords_file: Some(file.path().to_path_buf()),
            ..MatcherConfig::default()
        };

        let store = DocumentStore::from_config(&config).unwrap();
        store.ingest("job", "Rust engineer", SourceKind::RawText).unwrap();
        let record = store.get("job").unwrap();
        assert!(!record.contains("engineer"));
        assert!(record.contains("rust"));
    }

    #[test]
    fn test_remove_and_labels() {
        let store = english_store();
        store.ingest("job", "rust", SourceKind::RawText).unwrap();
        store.ingest("cv", "rust", SourceKind::RawText).unwrap();
        assert_eq!(store.labels(), vec!["cv".to_string(), "job".to_string()]);

        assert!(store.remove("cv").is_some());
        assert!(store.remove("cv").is_none());
        assert_eq!(store.labels(), vec!["job".to_string()]);
    }

    #[test]
    fn test_concurrent_reads_see_complete_records() {
        let store = english_store();
        store
            .ingest("job", "rust tokio serde rust", SourceKind::RawText)
            .unwrap();

        thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..100 {
                        let record = store.get("job").unwrap();
                        let sum: u32 = record.wordcount.values().sum();
                        assert_eq!(sum as usize, record.numwords);
                    }
                });
            }
            s.spawn(|| {
                for i in 0..50 {
                    let text = "rust ".repeat(i + 1);
                    store.ingest("other", &text, SourceKind::RawText).unwrap();
                }
            });
        });

        assert_eq!(store.get("other").unwrap().numwords, 50);
    }
}
