use thiserror::Error;

/// Errors surfaced by the recommendation engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecommendError {
    /// The selected title is not in the catalog
    #[error("Movie '{title}' not found in catalog")]
    NotFound { title: String },
}

pub type Result<T> = std::result::Result<T, RecommendError>;
