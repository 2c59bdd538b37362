//! Text acquisition. The only place the engine touches the filesystem.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::MatchError;

/// How the `input` string passed to ingestion should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// `input` is the document text itself.
    RawText,
    /// `input` is a path to a UTF-8 text file.
    FilePath,
    /// `input` is a path to a PDF.
    FilePathPdf,
}

impl SourceKind {
    /// `FilePathPdf` for a `.pdf` extension (any case), `FilePath` otherwise.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => SourceKind::FilePathPdf,
            _ => SourceKind::FilePath,
        }
    }
}

/// Returns the full document text for `input`.
pub fn read_source(input: &str, kind: SourceKind) -> Result<String, MatchError> {
    match kind {
        SourceKind::RawText => Ok(input.to_string()),
        SourceKind::FilePath => read_text_file(Path::new(input)),
        SourceKind::FilePathPdf => read_pdf(Path::new(input)),
    }
}

/// Reads a whole file as UTF-8 text.
pub fn read_text_file(path: &Path) -> Result<String, MatchError> {
    fs::read_to_string(path)
        .map_err(|e| MatchError::Ingestion(format!("failed to read {}: {e}", path.display())))
}

/// Extracts a PDF's text page by page and joins the pages in order.
/// A failure anywhere in the document fails the whole document.
pub fn read_pdf(path: &Path) -> Result<String, MatchError> {
    let pages = pdf_extract::extract_text_by_pages(path).map_err(|e| {
        MatchError::Ingestion(format!("failed to extract text from {}: {e}", path.display()))
    })?;
    debug!(path = %path.display(), pages = pages.len(), "extracted pdf text");
    Ok(join_pages(&pages))
}

/// Pages are separated by a newline so the last word of one page never
/// merges with the first word of the next.
fn join_pages(pages: &[String]) -> String {
    pages.join("\n")
}
