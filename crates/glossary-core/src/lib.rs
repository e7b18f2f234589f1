//! Glossary Core - Cascading query resolution over a glossary corpus
//!
//! This crate provides:
//! - Term/definition extraction from glossary-style documents
//! - A flat inner-product vector index with JSON persistence
//! - Exact and partial lookup tables derived from the corpus
//! - The tiered resolution engine (exact -> partial -> semantic -> web)
//! - Collaborator traits for embedding, web search, and summarization
//!
//! The engine resolves a query through increasingly expensive tiers and
//! stops at the first one that produces an answer. The corpus builder is
//! the offline counterpart that turns a source PDF into the persisted
//! entry list and vector index the engine searches.

pub mod config;
pub mod corpus;
pub mod embedding;
pub mod engine;
pub mod entry;
pub mod error;
pub mod extract;
pub mod index;
pub mod lookup;
pub mod query;
pub mod summarize;
pub mod websearch;

// Re-export commonly used types
pub use config::{EngineConfig, PartialMatch};
pub use corpus::{Corpus, CorpusBuilder};
pub use embedding::{normalize_l2, Embedder, HttpEmbedder};
pub use engine::{Engine, QueryResult, Source};
pub use entry::GlossaryEntry;
pub use error::{GlossaryError, Result};
pub use index::FlatIndex;
pub use lookup::LookupTable;
pub use summarize::{SentenceSummarizer, Summarizer};
pub use websearch::{DuckDuckGo, WebHit, WebSearch};
