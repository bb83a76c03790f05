//! Filter implementations for the candidate pipeline.

pub mod minimum_rating;

pub use minimum_rating::MinimumRatingFilter;
