//! Resume / job-description matching engine.
//!
//! Documents are normalized into term counts, stored under caller-chosen
//! labels, and compared pairwise with cosine similarity, Jaccard similarity,
//! and keyword coverage. The scorer folds the three into a weighted 0–100
//! score with a match level, plus the job terms the resume shares or lacks.
//!
//! ```no_run
//! use resume_matcher::{DocumentStore, MatchScorer, SourceKind, StopWords};
//!
//! let store = DocumentStore::new(StopWords::english());
//! store.ingest("resume", "resume.pdf", SourceKind::FilePathPdf)?;
//! store.ingest("job", "Senior Python engineer, SQL and Airflow", SourceKind::RawText)?;
//!
//! let result = MatchScorer::new(&store).score("resume", "job", None)?;
//! println!("{} ({:.2})", result.match_level, result.total_score);
//! # Ok::<(), resume_matcher::MatchError>(())
//! ```

pub mod config;
pub mod errors;
pub mod scoring;
pub mod similarity;
pub mod store;
pub mod text;

pub use config::MatcherConfig;
pub use errors::MatchError;
pub use scoring::{
    MatchLevel, MatchReport, MatchResult, MatchScorer, MatchWeights, MissingKeyword,
    SharedKeyword,
};
pub use store::{DocumentParser, DocumentRecord, DocumentStats, DocumentStore};
pub use text::{normalize, SourceKind, StopWords};
