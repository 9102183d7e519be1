//! Error types for concord.

use thiserror::Error;

/// Top-level error type for corpus loading and query processing.
#[derive(Debug, Error)]
pub enum ConcordError {
    /// Attribute name outside `word`, `c5`, `lemma`, `pos`.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A query with zero clauses.
    #[error("empty query")]
    EmptyQuery,

    /// Malformed query text.
    #[error("query syntax error: {0}")]
    Syntax(String),

    /// Value string absent from the corpus (strict compilation only).
    #[error("value not in corpus: {0:?}")]
    UnknownValue(String),

    /// Corpus file violates the expected row format.
    #[error("corpus integrity error: {0}")]
    CorpusIntegrity(String),

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for concord operations.
pub type Result<T> = std::result::Result<T, ConcordError>;
