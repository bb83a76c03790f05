//! Snapshot loading.
//!
//! Both files are parsed in parallel with Rayon, then cross-checked so the
//! similarity table is known to line up with the catalog before any request
//! is served.

use crate::error::Result;
use crate::parser::{self, MOVIE_LIST_FILE, SIMILARITY_FILE};
use crate::types::*;
use std::path::Path;
use tracing::info;

impl Snapshot {
    /// Load the catalog and similarity table from a data directory.
    ///
    /// Expects `movie_list.dat` and `similarity.dat` side by side.
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        info!("Loading snapshots from {:?}", data_dir);

        let movies_path = data_dir.join(MOVIE_LIST_FILE);
        let similarity_path = data_dir.join(SIMILARITY_FILE);

        let (movies, rows) = rayon::join(
            || parser::parse_movie_list(&movies_path),
            || parser::parse_similarity(&similarity_path),
        );
        let movies = movies?;
        let rows = rows?;

        info!(
            "Parsed {} movies and {} similarity rows",
            movies.len(),
            rows.len()
        );

        let similarity = SimilarityTable::from_rows(rows)?;
        let snapshot = Snapshot::new(movies, similarity)?;

        info!("Snapshot loaded and validated ({} titles)", snapshot.len());
        Ok(snapshot)
    }
}
