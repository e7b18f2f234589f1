//! Flat inner-product similarity index
//!
//! Exhaustive search over the corpus vectors. With L2-normalized vectors
//! the inner product equals cosine similarity. Position `i` in the index
//! corresponds to entry `i` of the corpus, so the insertion order must
//! match the entry order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{GlossaryError, Result};

/// Flat (exhaustive) inner-product index over fixed-dimension vectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatIndex {
    dimension: usize,
    vectors: Vec<Vec<f32>>,
}

impl FlatIndex {
    /// Build an index from vectors in corpus order.
    ///
    /// The dimension is taken from the first vector; all vectors must
    /// agree on it.
    pub fn build(vectors: Vec<Vec<f32>>) -> Result<Self> {
        let dimension = vectors.first().map_or(0, Vec::len);
        for vector in &vectors {
            if vector.len() != dimension {
                return Err(GlossaryError::DimensionMismatch {
                    expected: dimension,
                    got: vector.len(),
                });
            }
        }
        Ok(Self { dimension, vectors })
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Search for the `k` nearest vectors by inner product.
    ///
    /// Returns `(score, position)` pairs sorted by descending score. If
    /// `k` exceeds the index size, all positions are returned.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(f32, usize)>> {
        if query.len() != self.dimension {
            return Err(GlossaryError::DimensionMismatch {
                expected: self.dimension,
                got: query.len(),
            });
        }

        let mut scored: Vec<(f32, usize)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(position, vector)| (dot(query, vector), position))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored.truncate(k);
        Ok(scored)
    }

    /// Persist the index as a JSON artifact
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Load a previously persisted index
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GlossaryError::MissingArtifacts(path.to_path_buf()));
        }
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
