//! Filter to enforce a minimum rating threshold.
//!
//! The comparison uses the baseline rating stored in the catalog snapshot.
//! The rating shown to the user is fetched later from the metadata service
//! and can disagree with the value this filter checked.

use crate::traits::Filter;
use crate::types::Candidate;
use data_loader::Snapshot;
use std::sync::Arc;

/// Removes candidates whose baseline rating is below a threshold.
pub struct MinimumRatingFilter {
    snapshot: Arc<Snapshot>,
    min_rating: f32,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `snapshot` - Shared catalog used for baseline rating lookups
    /// * `min_rating` - Inclusive lower bound on `vote_average`
    pub fn new(snapshot: Arc<Snapshot>, min_rating: f32) -> Self {
        Self {
            snapshot,
            min_rating,
        }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn accepts(&self, candidate: &Candidate) -> bool {
        self.snapshot
            .movie(candidate.index)
            .is_some_and(|movie| movie.vote_average >= self.min_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Movie, SimilarityTable};

    fn create_test_snapshot() -> Arc<Snapshot> {
        let movies = vec![
            Movie { id: 1, title: "High Rated Movie".to_string(), vote_average: 8.1 },
            Movie { id: 2, title: "Low Rated Movie".to_string(), vote_average: 4.2 },
            Movie { id: 3, title: "Borderline Movie".to_string(), vote_average: 6.0 },
        ];
        let similarity = SimilarityTable::from_rows(vec![
            vec![1.0, 0.4, 0.6],
            vec![0.4, 1.0, 0.2],
            vec![0.6, 0.2, 1.0],
        ])
        .unwrap();
        Arc::new(Snapshot::new(movies, similarity).unwrap())
    }

    #[test]
    fn test_minimum_rating_filter() {
        let filter = MinimumRatingFilter::new(create_test_snapshot(), 6.0);

        assert!(filter.accepts(&Candidate::new(0, 0.9)));
        assert!(!filter.accepts(&Candidate::new(1, 0.8)));
        // Threshold is inclusive
        assert!(filter.accepts(&Candidate::new(2, 0.7)));
    }

    #[test]
    fn test_filter_name() {
        let filter = MinimumRatingFilter::new(create_test_snapshot(), 6.0);
        assert_eq!(filter.name(), "MinimumRatingFilter");
    }

    #[test]
    fn test_unknown_row_is_rejected() {
        let filter = MinimumRatingFilter::new(create_test_snapshot(), 1.0);
        assert!(!filter.accepts(&Candidate::new(42, 0.9)));
    }
}
