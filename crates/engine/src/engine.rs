//! # Recommendation Engine
//!
//! Coordinates one recommendation request:
//! 1. Resolve the selected title to its catalog row
//! 2. Rank that row of the similarity table
//! 3. Skip the first ranked position (self-similarity)
//! 4. Select up to N candidates, through the rating filter when one is set
//! 5. Fetch poster and rating for each pick, one call at a time
//!
//! Two rating sources are in play. The filter in step 4 checks the baseline
//! rating from the catalog snapshot; the rating returned to the caller is
//! the one fetched in step 5. They can disagree, and a pick that passed the
//! filter may display a lower (or unavailable) rating.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, instrument};

use data_loader::{MovieId, RowIndex, Snapshot};
use metadata_client::{DetailsFetcher, Rating};
use pipeline::filters::MinimumRatingFilter;
use pipeline::{FilterPipeline, rank_row, skip_query_position};

use crate::error::{RecommendError, Result};

/// What the presentation layer asks for on each trigger.
///
/// The rating filter toggle is carried here rather than held as engine
/// state: `None` means the filter is off.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub title: String,
    pub count: usize,
    pub min_rating: Option<f32>,
}

impl RecommendationRequest {
    pub fn new(title: impl Into<String>, count: usize) -> Self {
        Self {
            title: title.into(),
            count,
            min_rating: None,
        }
    }

    pub fn with_min_rating(mut self, min_rating: Option<f32>) -> Self {
        self.min_rating = min_rating;
        self
    }
}

/// A ranked pick before metadata enrichment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarMovie {
    pub index: RowIndex,
    pub movie_id: MovieId,
    pub title: String,
    /// Baseline rating from the catalog snapshot
    pub vote_average: f32,
    pub similarity: f32,
}

/// Final recommendation returned to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecommendation {
    pub movie_id: MovieId,
    pub title: String,
    pub poster_url: String,
    /// Rating fetched from the metadata service
    pub rating: Rating,
    pub similarity: f32,
}

/// Content-similarity recommender over a loaded snapshot
pub struct RecommendationEngine<F> {
    snapshot: Arc<Snapshot>,
    fetcher: F,
}

impl<F: DetailsFetcher> RecommendationEngine<F> {
    pub fn new(snapshot: Arc<Snapshot>, fetcher: F) -> Self {
        Self { snapshot, fetcher }
    }

    pub fn snapshot(&self) -> &Arc<Snapshot> {
        &self.snapshot
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Ranked picks for a request, without contacting the metadata service.
    pub fn similar_movies(&self, request: &RecommendationRequest) -> Result<Vec<SimilarMovie>> {
        let index = self
            .snapshot
            .index_of(&request.title)
            .ok_or_else(|| RecommendError::NotFound {
                title: request.title.clone(),
            })?;

        // Rows exist for every catalog index; Snapshot::new checked the shape
        let row = self.snapshot.similarity_row(index).unwrap_or(&[]);
        let ranked = rank_row(row);
        debug!("Ranked {} candidates for row {}", ranked.len(), index);

        let pipeline = self.build_pipeline(request.min_rating);
        let picked = pipeline.select(skip_query_position(ranked), request.count);

        Ok(picked
            .into_iter()
            .filter_map(|candidate| {
                self.snapshot.movie(candidate.index).map(|movie| SimilarMovie {
                    index: candidate.index,
                    movie_id: movie.id,
                    title: movie.title.clone(),
                    vote_average: movie.vote_average,
                    similarity: candidate.score,
                })
            })
            .collect())
    }

    /// Main entry point: ranked picks enriched with poster and rating.
    ///
    /// A failed lookup only degrades its own entry to placeholder values.
    #[instrument(skip(self, request), fields(title = %request.title, count = request.count))]
    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<MovieRecommendation>> {
        let start_time = Instant::now();

        let picks = self.similar_movies(request)?;
        info!(
            "Selected {} of {} requested (min rating: {:?})",
            picks.len(),
            request.count,
            request.min_rating
        );

        let mut recommendations = Vec::with_capacity(picks.len());
        for pick in picks {
            let details = self.fetcher.fetch_details(pick.movie_id).await;
            recommendations.push(MovieRecommendation {
                movie_id: pick.movie_id,
                title: pick.title,
                poster_url: details.poster_url,
                rating: details.rating,
                similarity: pick.similarity,
            });
        }

        info!(
            "Built {} recommendations in {:.2?}",
            recommendations.len(),
            start_time.elapsed()
        );
        Ok(recommendations)
    }

    fn build_pipeline(&self, min_rating: Option<f32>) -> FilterPipeline {
        match min_rating {
            Some(min_rating) => FilterPipeline::new()
                .add_filter(MinimumRatingFilter::new(self.snapshot.clone(), min_rating)),
            None => FilterPipeline::new(),
        }
    }
}
