//! Error types for the glossary engine

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GlossaryError>;

#[derive(Debug, Error)]
pub enum GlossaryError {
    /// The source document produced no term/definition pairs. This is a
    /// configuration or input error, not a transient failure.
    #[error("no glossary entries found; check the source document layout")]
    EmptyCorpus,

    /// A persisted corpus artifact is missing at engine start
    #[error("missing corpus artifact: {0} (run glossary-build first)")]
    MissingArtifacts(PathBuf),

    /// The entry list and vector index were loaded but disagree
    #[error("corpus artifacts disagree: {entries} entries vs {vectors} vectors")]
    CorruptArtifacts { entries: usize, vectors: usize },

    /// A vector did not match the index dimension
    #[error("embedding dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Embedding collaborator failure (propagated, never swallowed)
    #[error("embedding request failed: {0}")]
    Embedding(String),

    /// Web search collaborator failure (propagated, never swallowed)
    #[error("web search failed: {0}")]
    WebSearch(String),

    /// Text extraction from the source document failed
    #[error("text extraction failed: {0}")]
    Extraction(String),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
