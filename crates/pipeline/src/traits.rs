//! Core traits for the filtering pipeline.
//!
//! Filters are per-candidate predicates so the pipeline can stop scanning
//! as soon as enough candidates have been kept.

use crate::types::Candidate;

/// Core trait for filtering candidates.
///
/// `Send + Sync` allows filters to be shared across threads along with the
/// snapshot they read from.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether the candidate may be recommended.
    fn accepts(&self, candidate: &Candidate) -> bool;
}
