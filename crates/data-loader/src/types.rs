//! Core domain types for the precomputed recommendation snapshots.
//!
//! - `Movie`: one catalog record (TMDb id, title, baseline rating)
//! - `SimilarityTable`: square score matrix aligned with catalog row order
//! - `Snapshot`: both of the above, validated against each other

use crate::error::{DataLoadError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// TMDb identifier of a movie (the external metadata service key)
pub type MovieId = u32;

/// Position of a movie in the catalog, and of its row/column in the
/// similarity table
pub type RowIndex = usize;

// =============================================================================
// Catalog
// =============================================================================

/// A movie in the catalog snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Baseline rating stored in the snapshot. Filtering compares against
    /// this value, never against a freshly fetched one.
    pub vote_average: f32,
}

// =============================================================================
// Similarity Table
// =============================================================================

/// Square matrix of pairwise similarity scores, stored row-major.
///
/// Entry (i, j) is the similarity between catalog rows i and j. The table is
/// used as if it were symmetric but that is never checked.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityTable {
    size: usize,
    scores: Vec<f32>,
}

impl SimilarityTable {
    /// Build a table from parsed rows, rejecting anything that is not square.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let size = rows.len();
        let mut scores = Vec::with_capacity(size * size);

        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(DataLoadError::DimensionMismatch {
                    axis: format!("row {} width", idx + 1),
                    expected: size,
                    found: row.len(),
                });
            }
            if let Some(score) = row.iter().find(|score| !score.is_finite()) {
                return Err(DataLoadError::InvalidValue {
                    field: format!("similarity score in row {}", idx + 1),
                    value: score.to_string(),
                });
            }
            scores.extend(row);
        }

        Ok(Self { size, scores })
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Borrow one row of scores. Returns `None` past the last row.
    pub fn row(&self, index: RowIndex) -> Option<&[f32]> {
        if index >= self.size {
            return None;
        }
        let start = index * self.size;
        Some(&self.scores[start..start + self.size])
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Catalog and similarity table loaded together.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub(crate) movies: Vec<Movie>,
    /// Title -> first row carrying that title
    pub(crate) title_index: HashMap<String, RowIndex>,
    pub(crate) similarity: SimilarityTable,
}

impl Snapshot {
    /// Assemble a snapshot, checking that the table is aligned with the
    /// catalog on both axes.
    pub fn new(movies: Vec<Movie>, similarity: SimilarityTable) -> Result<Self> {
        if movies.is_empty() {
            return Err(DataLoadError::ValidationError(
                "catalog contains no movies".to_string(),
            ));
        }
        if similarity.size() != movies.len() {
            return Err(DataLoadError::DimensionMismatch {
                axis: "row count".to_string(),
                expected: movies.len(),
                found: similarity.size(),
            });
        }

        let mut title_index = HashMap::with_capacity(movies.len());
        for (row, movie) in movies.iter().enumerate() {
            if let Some(&first) = title_index.get(&movie.title) {
                tracing::warn!(
                    title = %movie.title,
                    first_row = first,
                    duplicate_row = row,
                    "Duplicate title in catalog, lookups resolve to the first row"
                );
                continue;
            }
            title_index.insert(movie.title.clone(), row);
        }

        Ok(Self {
            movies,
            title_index,
            similarity,
        })
    }

    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// All movies in catalog row order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Get the movie stored at a catalog row
    pub fn movie(&self, index: RowIndex) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// Resolve an exact title to its catalog row
    pub fn index_of(&self, title: &str) -> Option<RowIndex> {
        self.title_index.get(title).copied()
    }

    /// Similarity scores of one catalog row against every other row
    pub fn similarity_row(&self, index: RowIndex) -> Option<&[f32]> {
        self.similarity.row(index)
    }

    /// Catalog titles in row order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.title.as_str())
    }
}
