//! Title search over the catalog.
//!
//! Only exact titles are valid recommendation keys, so the front-end uses
//! this to turn a partial title into something selectable.

use data_loader::{RowIndex, Snapshot};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub index: RowIndex,
    pub title: String,
    pub vote_average: f32,
    pub exact: bool,
}

/// Case-insensitive title search.
///
/// Exact matches come first, then substring matches. Within each group
/// higher baseline ratings come first, then catalog order.
pub fn search_titles(snapshot: &Snapshot, query: &str, limit: usize) -> Vec<SearchHit> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = snapshot
        .movies()
        .iter()
        .enumerate()
        .filter_map(|(index, movie)| {
            let title = movie.title.to_lowercase();
            if title == query {
                Some((index, movie, true))
            } else if title.contains(&query) {
                Some((index, movie, false))
            } else {
                None
            }
        })
        .map(|(index, movie, exact)| SearchHit {
            index,
            title: movie.title.clone(),
            vote_average: movie.vote_average,
            exact,
        })
        .collect();

    hits.sort_by(|a, b| {
        b.exact
            .cmp(&a.exact)
            .then_with(|| {
                b.vote_average
                    .partial_cmp(&a.vote_average)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.index.cmp(&b.index))
    });
    hits.truncate(limit);
    hits
}
