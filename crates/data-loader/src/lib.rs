//! # Data Loader Crate
//!
//! Loads the two precomputed snapshots the recommender serves from.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, SimilarityTable, Snapshot)
//! - **parser**: Parse the .dat snapshot files into Rust structs
//! - **index**: Load both files and validate them against each other
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Snapshot;
//! use std::path::Path;
//!
//! let snapshot = Snapshot::load_from_files(Path::new("models"))?;
//!
//! let row = snapshot.index_of("Avatar").unwrap();
//! let scores = snapshot.similarity_row(row).unwrap();
//! println!("{} has {} similarity scores", snapshot.movie(row).unwrap().title, scores.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    MovieId,
    RowIndex,
    // Core types
    Movie,
    SimilarityTable,
    Snapshot,
};
