//! Ranking of a similarity row.
//!
//! ## Algorithm
//! 1. Pair every score with its column index
//! 2. Sort by score descending, ties by index ascending
//! 3. Drop the first ranked entry, which is assumed to be the query itself
//!
//! Step 3 is positional, not an identity check. It only removes the query
//! when the diagonal is the row maximum and wins its ties. If a table ever
//! breaks that assumption the wrong movie is dropped and the query leaks
//! into its own recommendations.

use crate::types::Candidate;
use std::cmp::Ordering;

/// Order two candidates: higher score first, then lower index first.
///
/// Scores compare numerically, so `-0.0` and `0.0` tie. Tables reject
/// non-finite scores at load; anything unordered is treated as a tie.
pub fn compare_ranked(a: &Candidate, b: &Candidate) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.index.cmp(&b.index))
}

/// Rank every column of a similarity row.
pub fn rank_row(row: &[f32]) -> Vec<Candidate> {
    let mut ranked: Vec<Candidate> = row
        .iter()
        .enumerate()
        .map(|(index, &score)| Candidate::new(index, score))
        .collect();

    // Index breaks every tie, so an unstable sort is still deterministic
    ranked.sort_unstable_by(compare_ranked);
    ranked
}

/// Skip the top ranked entry (self-similarity).
pub fn skip_query_position(ranked: Vec<Candidate>) -> impl Iterator<Item = Candidate> {
    ranked.into_iter().skip(1)
}
