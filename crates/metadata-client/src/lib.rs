//! Metadata client for The Movie Database (TMDb).
//!
//! Looks up the poster and rating of one movie per call. Lookups are
//! best-effort and single-attempt:
//! - no retries, no backoff, no caching
//! - no timeout unless one is configured
//! - any failure (transport, non-200 status, undecodable body) resolves to
//!   the placeholder poster and an unavailable rating
//!
//! `fetch_details` never returns an error. `MetadataError` only exists so
//! the failure can be logged before it is absorbed.

pub mod types;

pub use types::{
    IMAGE_BASE_URL, MovieDetails, MoviePayload, PLACEHOLDER_POSTER_URL, Rating, UNAVAILABLE_MARKER,
};

use data_loader::MovieId;
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Reasons a lookup fell back to placeholder details
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to metadata service failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Metadata service returned status {0}")]
    Status(StatusCode),

    #[error("Invalid response from metadata service: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// Connection settings for the metadata service
#[derive(Debug, Clone)]
pub struct MetadataConfig {
    pub api_key: String,
    pub api_url: String,
    pub language: String,
    /// `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

impl MetadataConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: None,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Source of poster and rating details for a catalog movie.
///
/// Implementations must absorb their own failures.
pub trait DetailsFetcher: Send + Sync {
    fn fetch_details(&self, movie_id: MovieId) -> impl Future<Output = MovieDetails> + Send;
}

/// reqwest-backed TMDb client.
#[derive(Clone)]
pub struct TmdbClient {
    http: Client,
    config: MetadataConfig,
}

impl TmdbClient {
    pub fn new(config: MetadataConfig) -> Result<Self, MetadataError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(MetadataError::ClientBuild)?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &MetadataConfig {
        &self.config
    }

    fn movie_url(&self, movie_id: MovieId) -> String {
        format!(
            "{}/movie/{}",
            self.config.api_url.trim_end_matches('/'),
            movie_id
        )
    }

    /// One GET, no retry. Errors are stripped of the request URL so the
    /// API key never ends up in a log line.
    async fn try_fetch(&self, movie_id: MovieId) -> Result<MovieDetails, MetadataError> {
        let response = self
            .http
            .get(self.movie_url(movie_id))
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("language", self.config.language.as_str()),
            ])
            .send()
            .await
            .map_err(|e| MetadataError::Transport(e.without_url()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(MetadataError::Status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| MetadataError::Transport(e.without_url()))?;
        let payload: MoviePayload = serde_json::from_slice(&body)?;

        Ok(MovieDetails::from_payload(payload))
    }
}

impl DetailsFetcher for TmdbClient {
    async fn fetch_details(&self, movie_id: MovieId) -> MovieDetails {
        match self.try_fetch(movie_id).await {
            Ok(details) => {
                debug!(movie_id, rating = %details.rating, "Fetched movie details");
                details
            }
            Err(e) => {
                warn!(movie_id, error = %e, "Movie details unavailable, using placeholder");
                MovieDetails::unavailable()
            }
        }
    }
}
