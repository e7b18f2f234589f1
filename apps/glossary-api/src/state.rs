//! Shared application state

use anyhow::Result;
use std::sync::Arc;

use glossary_core::{DuckDuckGo, Engine, EngineConfig, HttpEmbedder};

/// Application state: the engine, built once and shared read-only
pub struct AppState {
    pub engine: Engine,
}

impl AppState {
    /// Load the engine from the configured corpus artifacts.
    ///
    /// Fails (and aborts startup) if the artifacts are missing.
    pub fn new() -> Result<Self> {
        let config = EngineConfig::from_env()?;
        let embedder = HttpEmbedder::new(&config.embed_url, &config.embed_model)?;
        let web = DuckDuckGo::new()?;

        let engine = Engine::load(config, Arc::new(embedder), Arc::new(web))?;
        Ok(Self { engine })
    }
}
