//! Tiered query resolution engine
//!
//! Resolution cascades through four tiers, first success wins:
//! 1. Exact lookup of the normalized query
//! 2. Partial lookup (first corpus-order key contained in the query)
//! 3. Semantic nearest-neighbor search, gated by a similarity threshold
//! 4. Web search with truncation summarization
//!
//! Tiers 1-2 see the normalized query; tiers 3-4 see the original, since
//! the embedding model and web search benefit from natural phrasing.
//! The engine is constructed once from persisted artifacts and is
//! read-only afterward, so concurrent callers can share it freely.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::{EngineConfig, PartialMatch};
use crate::corpus::{self, Corpus};
use crate::embedding::{normalize_l2, Embedder};
use crate::error::Result;
use crate::index::FlatIndex;
use crate::lookup::LookupTable;
use crate::query;
use crate::summarize::{SentenceSummarizer, Summarizer};
use crate::websearch::WebSearch;

/// Minimum meaningful query length in characters
const MIN_QUERY_CHARS: usize = 3;

const CLARIFY_MESSAGE: &str = "Could you please clarify your question with a few more words?";
const NO_SUMMARY_MESSAGE: &str = "No concise summary available.";

/// Which tier produced the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    /// Answered from the glossary corpus (exact, partial, or semantic)
    #[serde(rename = "PDF")]
    Pdf,
    /// Answered from a live web search
    Web,
    /// No answer; `text` carries a clarification or apology message
    None,
}

/// The engine's output contract for one (sub-)query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub source: Source,
    /// Matched term; present only when `source` is `Pdf`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Answer body, or a clarification/apology message
    pub text: String,
    /// Source URL; present only when `source` is `Web`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl QueryResult {
    fn pdf(term: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: Source::Pdf,
            term: Some(term.into()),
            text: text.into(),
            link: None,
        }
    }

    fn web(text: String, link: String) -> Self {
        Self {
            source: Source::Web,
            term: None,
            text,
            link: Some(link),
        }
    }

    fn clarification() -> Self {
        Self {
            source: Source::None,
            term: None,
            text: CLARIFY_MESSAGE.to_string(),
            link: None,
        }
    }

    fn not_found(query: &str) -> Self {
        Self {
            source: Source::None,
            term: None,
            text: format!("Sorry, I couldn't find information for \u{201c}{query}.\u{201d}"),
            link: None,
        }
    }
}

/// Query resolution engine over an immutable corpus.
///
/// Holds the corpus, index, and derived lookup table as fields instead
/// of process-wide state, so tests and deployments can run multiple
/// independently configured engines.
pub struct Engine {
    corpus: Corpus,
    index: FlatIndex,
    lookup: LookupTable,
    embedder: Arc<dyn Embedder>,
    web: Arc<dyn WebSearch>,
    summarizer: Box<dyn Summarizer>,
    config: EngineConfig,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("corpus", &self.corpus)
            .field("index", &self.index)
            .field("lookup", &self.lookup)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Load the engine from persisted artifacts in `config.data_dir`.
    ///
    /// Fails fast if either artifact is missing; there is no
    /// partial-state recovery.
    pub fn load(
        config: EngineConfig,
        embedder: Arc<dyn Embedder>,
        web: Arc<dyn WebSearch>,
    ) -> Result<Self> {
        let (corpus, index) = corpus::load_artifacts(&config.data_dir)?;
        Ok(Self::from_parts(corpus, index, embedder, web, config))
    }

    /// Assemble an engine from in-memory parts (pre-persistence builds,
    /// tests)
    pub fn from_parts(
        corpus: Corpus,
        index: FlatIndex,
        embedder: Arc<dyn Embedder>,
        web: Arc<dyn WebSearch>,
        config: EngineConfig,
    ) -> Self {
        let lookup = LookupTable::from_entries(&corpus.entries);
        tracing::debug!(
            "engine ready: {} entries, {} lookup keys",
            corpus.len(),
            lookup.len()
        );
        Self {
            corpus,
            index,
            lookup,
            embedder,
            web,
            summarizer: Box::new(SentenceSummarizer),
            config,
        }
    }

    /// Swap in a different summarization strategy
    pub fn with_summarizer(mut self, summarizer: Box<dyn Summarizer>) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// Resolve one query through the tier cascade.
    ///
    /// Collaborator failures (embedding endpoint, web search) propagate
    /// as errors; "no match" is expressed through [`Source::None`], not
    /// through errors.
    pub async fn resolve(&self, query: &str) -> Result<QueryResult> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Ok(QueryResult::clarification());
        }

        let normalized = query::normalize(query);

        // Tier 1: exact match
        if let Some(definition) = self.lookup.get(&normalized) {
            tracing::debug!(query, "exact match");
            return Ok(QueryResult::pdf(normalized, definition));
        }

        // Tier 2: partial match
        let partial = match self.config.partial_match {
            PartialMatch::First => self.lookup.first_substring_of(&normalized),
            PartialMatch::Longest => self.lookup.longest_substring_of(&normalized),
        };
        if let Some((key, definition)) = partial {
            tracing::debug!(query, key, "partial match");
            return Ok(QueryResult::pdf(key, definition));
        }

        // Tier 3: semantic search over the original query
        let mut vector = self.embedder.embed(query).await?;
        normalize_l2(&mut vector);
        let neighbors = self.index.search(&vector, self.config.semantic_top_k)?;
        if let Some(&(score, position)) = neighbors.first() {
            if score >= self.config.semantic_threshold {
                let entry = &self.corpus.entries[position];
                tracing::debug!(query, score, term = %entry.term, "semantic match");
                return Ok(QueryResult::pdf(&entry.term, &entry.definition));
            }
            tracing::debug!(query, score, "semantic score below threshold");
        }

        // Tier 4: web fallback
        let hits = self.web.search(query, self.config.web_results).await?;
        let first = match hits.first() {
            Some(first) => first,
            None => return Ok(QueryResult::not_found(query)),
        };

        let summary = self
            .summarizer
            .summarize(&first.body, self.config.summary_sentences);
        let text = if summary.is_empty() {
            NO_SUMMARY_MESSAGE.to_string()
        } else {
            summary
        };
        Ok(QueryResult::web(text, first.href.clone()))
    }

    /// Resolve a possibly compound query.
    ///
    /// Compound queries are split into sub-queries resolved
    /// independently, in fragment order. A plain query yields a single
    /// element; the sequence is never empty.
    pub async fn resolve_all(&self, query: &str) -> Result<Vec<(String, QueryResult)>> {
        let fragments = query::split_compound(query);
        let mut results = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            let result = self.resolve(&fragment).await?;
            results.push((fragment, result));
        }
        Ok(results)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
