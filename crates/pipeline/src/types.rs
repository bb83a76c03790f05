//! Candidate type flowing through ranking and filtering.

use data_loader::RowIndex;
use serde::{Deserialize, Serialize};

/// One entry of a ranked similarity row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Catalog row of the candidate movie
    pub index: RowIndex,
    /// Similarity to the queried movie
    pub score: f32,
}

impl Candidate {
    pub fn new(index: RowIndex, score: f32) -> Self {
        Self { index, score }
    }
}
