//! Recommendation engine for the Film-Verse recommender.
//!
//! Ties the loaded snapshot, the ranking pipeline and the metadata client
//! together behind one `recommend` call.

pub mod engine;
pub mod error;
pub mod search;

pub use engine::{MovieRecommendation, RecommendationEngine, RecommendationRequest, SimilarMovie};
pub use error::{RecommendError, Result};
pub use search::{SearchHit, search_titles};
