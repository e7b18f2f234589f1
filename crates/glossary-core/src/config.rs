//! Engine configuration
//!
//! Defaults match the cascade's documented behavior; everything is
//! overridable through environment variables for deployment.

use std::path::PathBuf;

use crate::error::{GlossaryError, Result};

/// Partial-match strategy for the second cascade tier.
///
/// The default returns the first lookup key (in corpus order) found as
/// a substring of the query, not the longest or most specific one.
/// That order dependence is deliberate and covered by tests; `Longest`
/// is offered as an opt-in alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartialMatch {
    First,
    Longest,
}

/// Configuration for the query resolution engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Directory holding the persisted entries and vector index
    pub data_dir: PathBuf,
    /// OpenAI-compatible embeddings endpoint URL
    pub embed_url: String,
    /// Embedding model name sent to the endpoint
    pub embed_model: String,
    /// Minimum similarity score the semantic tier accepts (inclusive)
    pub semantic_threshold: f32,
    /// Nearest neighbors requested from the index
    pub semantic_top_k: usize,
    /// Results requested from the web-search collaborator
    pub web_results: usize,
    /// Sentences kept by the web summary truncation
    pub summary_sentences: usize,
    /// Partial-match strategy for tier 2
    pub partial_match: PartialMatch,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./glossary-data"),
            embed_url: "http://localhost:8080/v1/embeddings".to_string(),
            embed_model: "sentence-transformers/all-MiniLM-L6-v2".to_string(),
            semantic_threshold: 0.65,
            semantic_top_k: 3,
            web_results: 3,
            summary_sentences: 3,
            partial_match: PartialMatch::First,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables:
    /// - `GLOSSARY_DATA_DIR`: artifact directory
    /// - `GLOSSARY_EMBED_URL`: embeddings endpoint
    /// - `GLOSSARY_EMBED_MODEL`: embedding model name
    /// - `GLOSSARY_SEMANTIC_THRESHOLD`: acceptance bar, 0.0-1.0
    /// - `GLOSSARY_PARTIAL_MATCH`: "first" or "longest"
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("GLOSSARY_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(url) = std::env::var("GLOSSARY_EMBED_URL") {
            config.embed_url = url;
        }
        if let Ok(model) = std::env::var("GLOSSARY_EMBED_MODEL") {
            config.embed_model = model;
        }
        if let Ok(raw) = std::env::var("GLOSSARY_SEMANTIC_THRESHOLD") {
            config.semantic_threshold = raw.parse().map_err(|_| {
                GlossaryError::Config(format!("invalid semantic threshold: {raw}"))
            })?;
        }
        if let Ok(raw) = std::env::var("GLOSSARY_PARTIAL_MATCH") {
            config.partial_match = match raw.to_lowercase().as_str() {
                "first" => PartialMatch::First,
                "longest" => PartialMatch::Longest,
                _ => {
                    return Err(GlossaryError::Config(format!(
                        "unknown partial-match strategy: {raw}"
                    )))
                }
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cascade_parameters() {
        let config = EngineConfig::default();
        assert_eq!(config.semantic_threshold, 0.65);
        assert_eq!(config.semantic_top_k, 3);
        assert_eq!(config.web_results, 3);
        assert_eq!(config.summary_sentences, 3);
        assert_eq!(config.partial_match, PartialMatch::First);
    }
}
