use core::cmp::Ordering;
use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;

use crate::{Result, VectorError};

/// In-memory word-vector store keyed by lowercase term.
#[derive(Debug, Clone)]
pub struct VectorStore {
    /// Dimensionality shared by every vector in the store.
    dimensions: usize,
    /// Term to vector mapping.
    vectors: HashMap<String, Vec<f32>>,
}

impl VectorStore {
    /// Loads a GloVe-format text file: one `term f32 f32 ...` row per line.
    ///
    /// Terms are lowercased on load; queries are lowercased on lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a row cannot be parsed,
    /// a row's dimensionality disagrees with the first row, or the file
    /// holds no vectors.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)?;

        let mut dimensions = 0;
        let mut vectors = HashMap::new();

        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let mut parts = line.split_whitespace();
            let term = parts.next().ok_or_else(|| VectorError::Parse {
                line: index + 1,
                message: "missing term".to_owned(),
            })?;

            let values = parts
                .map(|token| {
                    token.parse::<f32>().map_err(|err| VectorError::Parse {
                        line: index + 1,
                        message: format!("bad component {token:?}: {err}"),
                    })
                })
                .collect::<Result<Vec<f32>>>()?;

            if values.is_empty() {
                return Err(VectorError::Parse {
                    line: index + 1,
                    message: format!("term {term:?} has no components"),
                });
            }

            if dimensions == 0 {
                dimensions = values.len();
            } else if values.len() != dimensions {
                return Err(VectorError::DimensionMismatch {
                    line: index + 1,
                    expected: dimensions,
                    found: values.len(),
                });
            }

            vectors.insert(term.to_lowercase(), values);
        }

        if vectors.is_empty() {
            return Err(VectorError::Empty(path.to_path_buf()));
        }

        tracing::debug!(
            "Loaded {} vectors of dimension {dimensions} from {path:?}",
            vectors.len()
        );

        Ok(Self {
            dimensions,
            vectors,
        })
    }

    /// Builds a store from in-memory entries; handy for tests and tooling.
    ///
    /// # Errors
    ///
    /// Returns an error if entries disagree on dimensionality or the
    /// iterator is empty.
    pub fn from_entries<I, T>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, Vec<f32>)>,
        T: Into<String>,
    {
        let mut dimensions = 0;
        let mut vectors = HashMap::new();

        for (index, (term, values)) in entries.into_iter().enumerate() {
            if dimensions == 0 {
                dimensions = values.len();
            } else if values.len() != dimensions {
                return Err(VectorError::DimensionMismatch {
                    line: index + 1,
                    expected: dimensions,
                    found: values.len(),
                });
            }
            vectors.insert(term.into().to_lowercase(), values);
        }

        if vectors.is_empty() {
            return Err(VectorError::Empty("<memory>".into()));
        }

        Ok(Self {
            dimensions,
            vectors,
        })
    }

    /// Dimensionality of the stored vectors.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of terms in the store.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the store holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Whether the store has a vector for the given term.
    pub fn contains(&self, term: &str) -> bool {
        self.vectors.contains_key(&term.to_lowercase())
    }

    /// Returns the vector for the given term, if present.
    pub fn get(&self, term: &str) -> Option<&[f32]> {
        self.vectors
            .get(&term.to_lowercase())
            .map(Vec::as_slice)
    }

    /// Returns up to `count` terms most similar to `term` by cosine
    /// similarity, best first, excluding the query term itself.
    ///
    /// Unknown terms produce an empty list.
    pub fn most_similar(&self, term: &str, count: usize) -> Vec<(String, f32)> {
        let query = term.to_lowercase();
        let Some(query_vector) = self.vectors.get(&query) else {
            return Vec::new();
        };

        let mut scored: Vec<(String, f32)> = self
            .vectors
            .iter()
            .filter(|(candidate, _)| candidate.as_str() != query)
            .map(|(candidate, vector)| {
                (candidate.clone(), cosine_similarity(query_vector, vector))
            })
            .collect();

        scored.sort_by(|left, right| {
            right
                .1
                .partial_cmp(&left.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| left.0.cmp(&right.0))
        });
        scored.truncate(count);
        scored
    }
}

/// Cosine similarity in [-1, 1]; 0.0 for mismatched or near-zero vectors.
fn cosine_similarity(left: &[f32], right: &[f32]) -> f32 {
    if left.len() != right.len() || left.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = left.iter().zip(right.iter()).map(|(a, b)| a * b).sum();
    let norm_left: f32 = left.iter().map(|value| value * value).sum::<f32>().sqrt();
    let norm_right: f32 = right.iter().map(|value| value * value).sum::<f32>().sqrt();

    if norm_left < 1e-10 || norm_right < 1e-10 {
        return 0.0;
    }

    dot_product / (norm_left * norm_right)
}
