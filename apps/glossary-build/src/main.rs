//! Offline corpus builder
//!
//! Run once per source document:
//! extract lines -> classify and group entries -> embed -> persist the
//! entry list and vector index for the query engine.
//!
//! Usage: glossary-build <glossary.pdf> [output-dir]

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use glossary_core::{corpus, extract, CorpusBuilder, EngineConfig, HttpEmbedder};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("glossary_build=info".parse()?)
                .add_directive("glossary_core=info".parse()?),
        )
        .init();

    let pdf_path = std::env::args()
        .nth(1)
        .context("usage: glossary-build <glossary.pdf> [output-dir]")?;

    let config = EngineConfig::from_env()?;
    let out_dir = std::env::args()
        .nth(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data_dir.clone());

    let bytes =
        std::fs::read(&pdf_path).with_context(|| format!("reading source document {pdf_path}"))?;
    let lines = extract::extract_lines(&bytes)?;
    info!("extracted {} non-empty lines from {}", lines.len(), pdf_path);

    let embedder = HttpEmbedder::new(&config.embed_url, &config.embed_model)?;
    let (built, index) = CorpusBuilder::new(&embedder).build(&lines).await?;

    corpus::persist(&built, &index, &out_dir)?;
    info!(
        "saved {} entries and {} vectors to {}",
        built.len(),
        index.len(),
        out_dir.display()
    );

    Ok(())
}
