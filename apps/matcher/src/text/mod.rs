pub mod normalizer;
pub mod source;
pub mod stopwords;

pub use normalizer::normalize;
pub use source::{read_source, SourceKind};
pub use stopwords::StopWords;
