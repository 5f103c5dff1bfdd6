//! Word-vector backend
//!
//! Loads a term list and a matching matrix of vectors from plain text and
//! answers cosine-similarity queries.
//!
//! ## Input Files
//!
//! - **labels**: one term per line, either a bare word (`cat`) or a concept
//!   URI (`/c/en/cat`). Line `i` names row `i` of the vectors file.
//! - **vectors**: one row of whitespace-separated floats per line.
//! - **replacements** (optional): JSON object mapping a term to the term whose
//!   vector should stand in for it, e.g. `{"/c/en/colour": "/c/en/color"}`.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

use super::traits::{measure_sync, SimilarityBackend};
use crate::datasets::Language;

/// Language used for URI lookups when a benchmark does not specify one
pub const DEFAULT_LANGUAGE: &str = "en";

/// In-memory word vectors, L2-normalized at load time
#[derive(Debug, Clone)]
pub struct WordVectors {
    index: HashMap<String, usize>,
    /// Row-major, `len() == index.len() * dimensions`
    vectors: Vec<f32>,
    dimensions: usize,
    replacements: HashMap<String, String>,
}

/// Lowercase, trim, and join inner whitespace with `_`
pub fn standardize(word: &str) -> String {
    word.split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

fn normalize(row: &mut [f32]) {
    let norm = row.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in row.iter_mut() {
            *x /= norm;
        }
    }
}

impl WordVectors {
    /// Load labels, vectors and optional replacements from disk
    pub fn load(labels: &Path, vectors: &Path, replacements: Option<&Path>) -> Result<Self> {
        tracing::info!("Loading word vectors from {:?}", vectors);

        let (loaded, load_duration) = measure_sync(|| -> Result<Self> {
            let labels = read_labels(labels)?;
            let rows = read_vectors(vectors)?;
            let replacements = match replacements {
                Some(path) => read_replacements(path)?,
                None => HashMap::new(),
            };
            Self::from_rows(labels, rows)
                .with_context(|| format!("Labels and vectors do not line up: {:?}", vectors))
                .map(|wv| wv.with_replacements(replacements))
        });
        let loaded = loaded?;

        tracing::info!(
            "Loaded {} terms ({} dimensions, {} replacements) in {:?}",
            loaded.len(),
            loaded.dimensions,
            loaded.replacements.len(),
            load_duration
        );

        Ok(loaded)
    }

    /// Build from labels and one vector per label
    pub fn from_rows(labels: Vec<String>, rows: Vec<Vec<f32>>) -> Result<Self> {
        if labels.len() != rows.len() {
            anyhow::bail!("{} labels but {} vectors", labels.len(), rows.len());
        }
        let dimensions = rows.first().map(|r| r.len()).unwrap_or(0);

        let mut index = HashMap::with_capacity(labels.len());
        let mut vectors = Vec::with_capacity(labels.len() * dimensions);

        for (i, (label, mut row)) in labels.into_iter().zip(rows).enumerate() {
            if row.len() != dimensions {
                anyhow::bail!(
                    "vector {} ('{}') has {} dimensions, expected {}",
                    i + 1,
                    label,
                    row.len(),
                    dimensions
                );
            }
            normalize(&mut row);
            vectors.extend_from_slice(&row);
            // First occurrence wins
            index.entry(label).or_insert(i);
        }

        Ok(Self {
            index,
            vectors,
            dimensions,
            replacements: HashMap::new(),
        })
    }

    pub fn with_replacements(mut self, replacements: HashMap<String, String>) -> Self {
        self.replacements = replacements;
        self
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn row(&self, term: &str) -> Option<&[f32]> {
        let i = *self.index.get(term)?;
        Some(&self.vectors[i * self.dimensions..(i + 1) * self.dimensions])
    }

    /// Resolve a word to its vector
    ///
    /// Tries the concept URI for `language` first, then the bare word. Each
    /// candidate falls back to its replacement when it has no row of its own.
    pub fn lookup(&self, word: &str, language: Language) -> Option<&[f32]> {
        let term = standardize(word);
        if term.is_empty() {
            return None;
        }
        let uri = format!("/c/{}/{}", language.tag_or(DEFAULT_LANGUAGE), term);

        for key in [uri.as_str(), term.as_str()] {
            let found = self.row(key).or_else(|| {
                self.replacements
                    .get(key)
                    .and_then(|replacement| self.row(replacement))
            });
            if found.is_some() {
                return found;
            }
        }
        None
    }
}

impl SimilarityBackend for WordVectors {
    /// Cosine similarity of the two words; 0.0 if either is out of vocabulary
    fn similarity(&self, word1: &str, word2: &str, language: Language) -> Result<f64> {
        let (Some(a), Some(b)) = (self.lookup(word1, language), self.lookup(word2, language))
        else {
            return Ok(0.0);
        };
        // Rows are unit length, so the dot product is the cosine
        let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
        Ok(f64::from(dot).clamp(-1.0, 1.0))
    }
}

fn read_labels(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read labels: {:?}", path))?;
    // Blank lines are skipped here and in read_vectors so rows stay aligned
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

fn read_vectors(path: &Path) -> Result<Vec<Vec<f32>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read vectors: {:?}", path))?;

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.split_whitespace()
                .map(|v| v.parse::<f32>())
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("{}:{}: invalid vector row", path.display(), i + 1))
        })
        .collect()
}

fn read_replacements(path: &Path) -> Result<HashMap<String, String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read replacements: {:?}", path))?;
    let replacements: HashMap<String, String> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse replacements: {:?}", path))?;
    Ok(replacements)
}
