//! Corpus model, offline builder, and artifact persistence
//!
//! The corpus is an ordered entry sequence plus a parallel vector index;
//! position `i` of the index maps back to `entries[i]`. Both artifacts
//! are written together at build time and loaded together at engine
//! start.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::embedding::{normalize_l2, Embedder};
use crate::entry::{parse_entries, GlossaryEntry};
use crate::error::{GlossaryError, Result};
use crate::index::FlatIndex;

/// Persisted entry sequence artifact
pub const ENTRIES_FILE: &str = "entries.json";
/// Persisted vector index artifact
pub const INDEX_FILE: &str = "index.json";

/// The full entry sequence, in document order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    pub entries: Vec<GlossaryEntry>,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the entry sequence artifact from `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(ENTRIES_FILE);
        if !path.exists() {
            return Err(GlossaryError::MissingArtifacts(path));
        }
        let file = File::open(&path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    fn save(&self, dir: &Path) -> Result<()> {
        let file = File::create(dir.join(ENTRIES_FILE))?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }
}

/// Offline corpus builder: lines -> entries -> normalized vectors -> index
pub struct CorpusBuilder<'a> {
    embedder: &'a dyn Embedder,
}

impl<'a> CorpusBuilder<'a> {
    pub fn new(embedder: &'a dyn Embedder) -> Self {
        Self { embedder }
    }

    /// Build the corpus and its vector index from extracted lines.
    ///
    /// Fails with [`GlossaryError::EmptyCorpus`] if the lines produce no
    /// entries; the source document did not match the expected glossary
    /// layout and the operator must intervene.
    pub async fn build(&self, lines: &[String]) -> Result<(Corpus, FlatIndex)> {
        let entries = parse_entries(lines);
        if entries.is_empty() {
            return Err(GlossaryError::EmptyCorpus);
        }
        tracing::info!("extracted {} glossary entries", entries.len());

        let texts: Vec<String> = entries.iter().map(GlossaryEntry::embedding_text).collect();
        let mut vectors = self.embedder.embed_batch(&texts).await?;
        for vector in &mut vectors {
            normalize_l2(vector);
        }

        let index = FlatIndex::build(vectors)?;
        tracing::info!(
            "flat index built: {} vectors of dimension {}",
            index.len(),
            index.dimension()
        );

        Ok((Corpus { entries }, index))
    }
}

/// Write both artifacts to `dir`, creating it if needed
pub fn persist(corpus: &Corpus, index: &FlatIndex, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    corpus.save(dir)?;
    index.save(&dir.join(INDEX_FILE))?;
    Ok(())
}

/// Load both artifacts from `dir`.
///
/// Fails if either file is missing (no partial-state recovery) or if
/// the entry count and vector count disagree.
pub fn load_artifacts(dir: &Path) -> Result<(Corpus, FlatIndex)> {
    let corpus = Corpus::load(dir)?;
    let index = FlatIndex::load(&dir.join(INDEX_FILE))?;

    if corpus.len() != index.len() {
        return Err(GlossaryError::CorruptArtifacts {
            entries: corpus.len(),
            vectors: index.len(),
        });
    }

    Ok((corpus, index))
}
