//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the FilterPipeline struct that chains filters with
//! the builder pattern and performs the bounded selection scan over a
//! ranked candidate list.

use crate::traits::Filter;
use crate::types::Candidate;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MinimumRatingFilter::new(snapshot.clone(), 6.0));
///
/// let picked = pipeline.select(ranked, 5);
/// ```
///
/// An empty pipeline accepts everything, which is the unfiltered mode.
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the chained filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Whether every filter accepts the candidate
    pub fn accepts(&self, candidate: &Candidate) -> bool {
        self.filters.iter().all(|filter| filter.accepts(candidate))
    }

    /// Scan candidates in order, keeping the ones every filter accepts.
    ///
    /// Stops as soon as `count` candidates are kept. Running out of
    /// candidates first is not an error; the shorter list is returned.
    pub fn select(
        &self,
        candidates: impl IntoIterator<Item = Candidate>,
        count: usize,
    ) -> Vec<Candidate> {
        let mut selected = Vec::with_capacity(count);
        if count == 0 {
            return selected;
        }

        let mut scanned = 0usize;
        for candidate in candidates {
            scanned += 1;
            if self.accepts(&candidate) {
                selected.push(candidate);
                if selected.len() == count {
                    break;
                }
            }
        }

        tracing::debug!(
            "Selected {} of {} requested after scanning {} candidates (filters: [{}])",
            selected.len(),
            count,
            scanned,
            self.filter_names().join(", ")
        );
        selected
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
