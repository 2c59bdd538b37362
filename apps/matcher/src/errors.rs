use thiserror::Error;

/// Engine-level error type.
/// Every fallible library operation returns `Result<T, MatchError>`.
#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    /// A document label was requested that the store has never ingested.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Reading a text file, PDF, or stopword file failed.
    #[error("Ingestion error: {0}")]
    Ingestion(String),
}

impl MatchError {
    pub(crate) fn label_not_found(label: &str) -> Self {
        tracing::warn!(label, "document label not found");
        MatchError::NotFound(format!("label '{label}' not found in loaded documents"))
    }
}
