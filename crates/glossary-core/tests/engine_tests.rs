//! Integration tests for the tier cascade, using synthetic embedding
//! and web-search collaborators.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::Arc;

use glossary_core::corpus::{self, Corpus};
use glossary_core::{
    CorpusBuilder, Embedder, Engine, EngineConfig, FlatIndex, GlossaryEntry, GlossaryError,
    PartialMatch, QueryResult, Result, Source, WebHit, WebSearch,
};

/// Embedder that returns fixed vectors for known texts and a zero
/// vector (semantic score 0) for everything else
struct TableEmbedder {
    dimension: usize,
    table: HashMap<String, Vec<f32>>,
}

impl TableEmbedder {
    fn empty(dimension: usize) -> Self {
        Self {
            dimension,
            table: HashMap::new(),
        }
    }

    fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.table.insert(text.to_string(), vector);
        self
    }
}

#[async_trait]
impl Embedder for TableEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self
            .table
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![0.0; self.dimension]))
    }
}

/// Web search returning a fixed hit list
struct StaticWeb {
    hits: Vec<WebHit>,
}

impl StaticWeb {
    fn none() -> Self {
        Self { hits: Vec::new() }
    }

    fn one(body: &str, href: &str) -> Self {
        Self {
            hits: vec![WebHit {
                body: body.to_string(),
                href: href.to_string(),
            }],
        }
    }
}

#[async_trait]
impl WebSearch for StaticWeb {
    async fn search(&self, _keywords: &str, max_results: usize) -> Result<Vec<WebHit>> {
        Ok(self.hits.iter().take(max_results).cloned().collect())
    }
}

/// Web search that always fails, for error-propagation tests
struct FailingWeb;

#[async_trait]
impl WebSearch for FailingWeb {
    async fn search(&self, _keywords: &str, _max_results: usize) -> Result<Vec<WebHit>> {
        Err(GlossaryError::WebSearch("connection refused".to_string()))
    }
}

fn entry(term: &str, definition: &str) -> GlossaryEntry {
    GlossaryEntry {
        term: term.to_string(),
        definition: definition.to_string(),
    }
}

fn glossary() -> Vec<GlossaryEntry> {
    vec![
        entry("Asset", "Anything of value owned by a fund."),
        entry("Net Asset Value (NAV)", "Value of assets minus liabilities."),
        entry("Inflation", "A general rise in prices over time."),
        entry("Deflation", "A general fall in prices over time."),
    ]
}

fn engine(
    entries: Vec<GlossaryEntry>,
    vectors: Vec<Vec<f32>>,
    embedder: TableEmbedder,
    web: impl WebSearch + 'static,
) -> Engine {
    Engine::from_parts(
        Corpus { entries },
        FlatIndex::build(vectors).unwrap(),
        Arc::new(embedder),
        Arc::new(web),
        EngineConfig::default(),
    )
}

fn zero_vectors(count: usize, dimension: usize) -> Vec<Vec<f32>> {
    vec![vec![0.0; dimension]; count]
}

#[tokio::test]
async fn short_queries_get_a_clarification() {
    let engine = engine(
        glossary(),
        zero_vectors(4, 2),
        TableEmbedder::empty(2),
        StaticWeb::none(),
    );

    for query in ["", " ", "hi", "  a  "] {
        let result = engine.resolve(query).await.unwrap();
        assert_eq!(result.source, Source::None);
        assert!(result.text.contains("clarify"));
    }
}

#[tokio::test]
async fn exact_match_is_case_insensitive_and_suffix_tolerant() {
    let engine = engine(
        glossary(),
        zero_vectors(4, 2),
        TableEmbedder::empty(2),
        StaticWeb::none(),
    );

    for query in ["Net Asset Value (NAV)", "net asset value"] {
        let result = engine.resolve(query).await.unwrap();
        assert_eq!(result.source, Source::Pdf);
        assert_eq!(result.text, "Value of assets minus liabilities.");
    }
}

#[tokio::test]
async fn filler_phrases_are_stripped_before_lookup() {
    let engine = engine(
        glossary(),
        zero_vectors(4, 2),
        TableEmbedder::empty(2),
        StaticWeb::none(),
    );

    let result = engine.resolve("What is Inflation").await.unwrap();
    assert_eq!(result.source, Source::Pdf);
    assert_eq!(result.term.as_deref(), Some("inflation"));
    assert_eq!(result.text, "A general rise in prices over time.");
}

#[tokio::test]
async fn partial_match_returns_first_key_in_corpus_order() {
    let engine = engine(
        glossary(),
        zero_vectors(4, 2),
        TableEmbedder::empty(2),
        StaticWeb::none(),
    );

    // Both "asset" and "net asset value" are substrings; "asset" comes
    // first in corpus order
    let result = engine
        .resolve("the net asset value of the fund")
        .await
        .unwrap();
    assert_eq!(result.source, Source::Pdf);
    assert_eq!(result.term.as_deref(), Some("asset"));
    assert_eq!(result.text, "Anything of value owned by a fund.");
}

#[tokio::test]
async fn longest_partial_match_is_available_behind_config() {
    let mut config = EngineConfig::default();
    config.partial_match = PartialMatch::Longest;

    let engine = Engine::from_parts(
        Corpus { entries: glossary() },
        FlatIndex::build(zero_vectors(4, 2)).unwrap(),
        Arc::new(TableEmbedder::empty(2)),
        Arc::new(StaticWeb::none()),
        config,
    );

    let result = engine
        .resolve("the net asset value of the fund")
        .await
        .unwrap();
    assert_eq!(result.term.as_deref(), Some("net asset value"));
}

#[tokio::test]
async fn semantic_score_at_threshold_is_accepted() {
    // Entry vector engineered so the normalized query [1, 0] scores
    // exactly 0.65
    let entries = vec![entry("Duration", "Price sensitivity of a bond to rates.")];
    let embedder = TableEmbedder::empty(2).with("bond rate sensitivity", vec![1.0, 0.0]);
    let engine = engine(entries, vec![vec![0.65, 0.0]], embedder, StaticWeb::none());

    let result = engine.resolve("bond rate sensitivity").await.unwrap();
    assert_eq!(result.source, Source::Pdf);
    assert_eq!(result.term.as_deref(), Some("Duration"));
    assert_eq!(result.text, "Price sensitivity of a bond to rates.");
}

#[tokio::test]
async fn semantic_score_below_threshold_falls_through_to_web() {
    let entries = vec![entry("Duration", "Price sensitivity of a bond to rates.")];
    let embedder = TableEmbedder::empty(2).with("bond rate sensitivity", vec![1.0, 0.0]);
    let engine = engine(
        entries,
        vec![vec![0.649999, 0.0]],
        embedder,
        StaticWeb::one("A web answer. With details.", "https://example.com/a"),
    );

    let result = engine.resolve("bond rate sensitivity").await.unwrap();
    assert_eq!(result.source, Source::Web);
    assert_eq!(result.link.as_deref(), Some("https://example.com/a"));
}

#[tokio::test]
async fn web_summary_keeps_at_most_three_sentences() {
    let body = "One is first. Two follows! Three asks? Four continues. Five ends.";
    let engine = engine(
        glossary(),
        zero_vectors(4, 2),
        TableEmbedder::empty(2),
        StaticWeb::one(body, "https://example.com/b"),
    );

    let result = engine.resolve("something entirely unknown").await.unwrap();
    assert_eq!(result.source, Source::Web);
    assert_eq!(result.text, "One is first. Two follows! Three asks?");
    assert_eq!(result.link.as_deref(), Some("https://example.com/b"));
}

#[tokio::test]
async fn empty_web_body_gets_the_no_summary_fallback() {
    let engine = engine(
        glossary(),
        zero_vectors(4, 2),
        TableEmbedder::empty(2),
        StaticWeb::one("", "https://example.com/c"),
    );

    let result = engine.resolve("something entirely unknown").await.unwrap();
    assert_eq!(result.source, Source::Web);
    assert_eq!(result.text, "No concise summary available.");
}

#[tokio::test]
async fn no_web_results_yields_an_apology() {
    let engine = engine(
        glossary(),
        zero_vectors(4, 2),
        TableEmbedder::empty(2),
        StaticWeb::none(),
    );

    let result = engine.resolve("something entirely unknown").await.unwrap();
    assert_eq!(result.source, Source::None);
    assert!(result.text.contains("something entirely unknown"));
    assert!(result.text.starts_with("Sorry"));
}

#[tokio::test]
async fn web_search_failure_propagates_as_an_error() {
    let engine = engine(
        glossary(),
        zero_vectors(4, 2),
        TableEmbedder::empty(2),
        FailingWeb,
    );

    let err = engine
        .resolve("something entirely unknown")
        .await
        .unwrap_err();
    assert!(matches!(err, GlossaryError::WebSearch(_)));
}

#[tokio::test]
async fn compound_query_resolves_each_fragment_in_order() {
    let engine = engine(
        glossary(),
        zero_vectors(4, 2),
        TableEmbedder::empty(2),
        StaticWeb::none(),
    );

    let results = engine.resolve_all("Inflation and Deflation").await.unwrap();
    assert_eq!(results.len(), 2);

    let (first_query, first) = &results[0];
    assert_eq!(first_query, "Inflation");
    assert_eq!(first.source, Source::Pdf);
    assert_eq!(first.text, "A general rise in prices over time.");

    let (second_query, second) = &results[1];
    assert_eq!(second_query, "Deflation");
    assert_eq!(second.text, "A general fall in prices over time.");
}

#[tokio::test]
async fn plain_query_resolves_as_a_single_item() {
    let engine = engine(
        glossary(),
        zero_vectors(4, 2),
        TableEmbedder::empty(2),
        StaticWeb::none(),
    );

    let results = engine.resolve_all("Inflation").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].0, "Inflation");
    assert_eq!(results[0].1.source, Source::Pdf);
}

#[tokio::test]
async fn persisted_corpus_answers_identically_after_reload() {
    let lines: Vec<String> = [
        "Inflation",
        "A general rise in prices over time.",
        "Deflation",
        "A general fall in prices over time.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let builder_embedder = TableEmbedder::empty(3)
        .with(
            "Inflation\nA general rise in prices over time.",
            vec![1.0, 0.0, 0.0],
        )
        .with(
            "Deflation\nA general fall in prices over time.",
            vec![0.0, 1.0, 0.0],
        );
    let (built_corpus, built_index) = CorpusBuilder::new(&builder_embedder)
        .build(&lines)
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    corpus::persist(&built_corpus, &built_index, dir.path()).unwrap();

    let mut config = EngineConfig::default();
    config.data_dir = dir.path().to_path_buf();

    let before = Engine::from_parts(
        built_corpus,
        built_index,
        Arc::new(TableEmbedder::empty(3)),
        Arc::new(StaticWeb::none()),
        config.clone(),
    );
    let after = Engine::load(
        config,
        Arc::new(TableEmbedder::empty(3)),
        Arc::new(StaticWeb::none()),
    )
    .unwrap();

    let fresh: QueryResult = before.resolve("inflation").await.unwrap();
    let reloaded: QueryResult = after.resolve("inflation").await.unwrap();
    assert_eq!(fresh, reloaded);
    assert_eq!(fresh.source, Source::Pdf);
}

#[tokio::test]
async fn missing_artifacts_fail_engine_startup() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = EngineConfig::default();
    config.data_dir = dir.path().to_path_buf();

    let err = Engine::load(
        config,
        Arc::new(TableEmbedder::empty(2)),
        Arc::new(StaticWeb::none()),
    )
    .unwrap_err();
    assert!(matches!(err, GlossaryError::MissingArtifacts(_)));
}
