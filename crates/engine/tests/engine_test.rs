//! End-to-end tests for the recommendation engine with an in-process
//! details fetcher standing in for TMDb.

use data_loader::{Movie, MovieId, SimilarityTable, Snapshot};
use engine::{RecommendError, RecommendationEngine, RecommendationRequest};
use metadata_client::{DetailsFetcher, MovieDetails, PLACEHOLDER_POSTER_URL, Rating};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Answers every lookup with a fixed rating of 1.0, except for ids marked
/// as failing, and records the order of calls.
#[derive(Default)]
struct FakeFetcher {
    failing: HashSet<MovieId>,
    calls: Mutex<Vec<MovieId>>,
}

impl FakeFetcher {
    fn failing(ids: &[MovieId]) -> Self {
        Self {
            failing: ids.iter().copied().collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<MovieId> {
        self.calls.lock().unwrap().clone()
    }
}

impl DetailsFetcher for FakeFetcher {
    async fn fetch_details(&self, movie_id: MovieId) -> MovieDetails {
        self.calls.lock().unwrap().push(movie_id);
        if self.failing.contains(&movie_id) {
            return MovieDetails::unavailable();
        }
        MovieDetails {
            poster_url: format!("https://image.tmdb.org/t/p/w500/{movie_id}.jpg"),
            rating: Rating::Score(1.0),
        }
    }
}

fn movie(id: MovieId, title: &str, vote_average: f32) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        vote_average,
    }
}

/// Catalog = [A(id=1, 9.0), B(id=2, 5.0), C(id=3, 7.0)], row A = [1.0, 0.3, 0.8]
fn example_snapshot() -> Arc<Snapshot> {
    let movies = vec![movie(1, "A", 9.0), movie(2, "B", 5.0), movie(3, "C", 7.0)];
    let similarity = SimilarityTable::from_rows(vec![
        vec![1.0, 0.3, 0.8],
        vec![0.3, 1.0, 0.1],
        vec![0.8, 0.1, 1.0],
    ])
    .unwrap();
    Arc::new(Snapshot::new(movies, similarity).unwrap())
}

fn engine(fetcher: FakeFetcher) -> RecommendationEngine<FakeFetcher> {
    RecommendationEngine::new(example_snapshot(), fetcher)
}

fn titles<T>(items: &[T], title: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|item| title(item).to_string()).collect()
}

#[tokio::test]
async fn test_unfiltered_recommendations() {
    let engine = engine(FakeFetcher::default());
    let results = engine
        .recommend(&RecommendationRequest::new("A", 2))
        .await
        .unwrap();

    assert_eq!(titles(&results, |r| r.title.as_str()), vec!["C", "B"]);
    assert_eq!(results[0].poster_url, "https://image.tmdb.org/t/p/w500/3.jpg");
    assert_eq!(results[0].similarity, 0.8);
}

#[tokio::test]
async fn test_filtered_recommendations_return_short_list() {
    let engine = engine(FakeFetcher::default());
    let request = RecommendationRequest::new("A", 2).with_min_rating(Some(6.0));
    let results = engine.recommend(&request).await.unwrap();

    assert_eq!(titles(&results, |r| r.title.as_str()), vec!["C"]);
}

#[tokio::test]
async fn test_displayed_rating_is_the_fetched_one() {
    // C passes the 6.0 filter on its baseline 7.0, but displays the fetched 1.0
    let engine = engine(FakeFetcher::default());
    let request = RecommendationRequest::new("A", 1).with_min_rating(Some(6.0));
    let results = engine.recommend(&request).await.unwrap();

    assert_eq!(results[0].title, "C");
    assert_eq!(results[0].rating, Rating::Score(1.0));
}

#[tokio::test]
async fn test_unknown_title_is_not_found() {
    let engine = engine(FakeFetcher::default());
    let err = engine
        .recommend(&RecommendationRequest::new("Z", 2))
        .await
        .unwrap_err();

    assert_eq!(err, RecommendError::NotFound { title: "Z".to_string() });
    assert!(engine.fetcher().calls().is_empty());
}

#[tokio::test]
async fn test_failed_lookup_only_affects_its_entry() {
    let engine = engine(FakeFetcher::failing(&[3]));
    let results = engine
        .recommend(&RecommendationRequest::new("A", 2))
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].poster_url, PLACEHOLDER_POSTER_URL);
    assert_eq!(results[0].rating, Rating::Unavailable);
    assert_eq!(results[1].rating, Rating::Score(1.0));
}

#[tokio::test]
async fn test_lookups_happen_in_ranked_order() {
    let engine = engine(FakeFetcher::default());
    engine
        .recommend(&RecommendationRequest::new("A", 5))
        .await
        .unwrap();

    // Only the retained picks are looked up, best match first
    assert_eq!(engine.fetcher().calls(), vec![3, 2]);
}

#[tokio::test]
async fn test_zero_count_returns_nothing() {
    let engine = engine(FakeFetcher::default());
    let results = engine
        .recommend(&RecommendationRequest::new("A", 0))
        .await
        .unwrap();

    assert!(results.is_empty());
    assert!(engine.fetcher().calls().is_empty());
}

#[test]
fn test_similar_movies_carry_baseline_rating() {
    let engine = engine(FakeFetcher::default());
    let picks = engine
        .similar_movies(&RecommendationRequest::new("B", 10))
        .unwrap();

    assert_eq!(titles(&picks, |p| p.title.as_str()), vec!["A", "C"]);
    assert_eq!(picks[0].vote_average, 9.0);
    assert_eq!(picks[1].movie_id, 3);
}
