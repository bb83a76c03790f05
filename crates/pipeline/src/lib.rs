//! Ranking and filtering of similarity candidates.
//!
//! This crate provides:
//! - `rank_row` to order one similarity row
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters and selecting the top N
//!
//! ## Architecture
//! A request flows through three stages:
//! 1. Rank the queried movie's similarity row
//! 2. Drop the first ranked position (self-similarity)
//! 3. Scan in ranked order, keeping what the filters accept, until N are kept
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{rank_row, skip_query_position, FilterPipeline};
//! use pipeline::filters::MinimumRatingFilter;
//!
//! let row = snapshot.similarity_row(index).unwrap();
//! let pipeline = FilterPipeline::new()
//!     .add_filter(MinimumRatingFilter::new(snapshot.clone(), 6.0));
//!
//! let picked = pipeline.select(skip_query_position(rank_row(row)), 5);
//! ```

pub mod types;
pub mod ranking;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use types::Candidate;
pub use ranking::{compare_ranked, rank_row, skip_query_position};
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
