//! Movie details returned by the metadata service, and the fallbacks used
//! when the service cannot provide them.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Base URL for w500 poster images
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Generic image shown when no poster is available
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/500";

/// Marker rendered in place of a rating the service did not provide
pub const UNAVAILABLE_MARKER: &str = "N/A";

/// Rating as reported by the metadata service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Score(f32),
    Unavailable,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Score(score) => write!(f, "{}", score),
            Rating::Unavailable => f.write_str(UNAVAILABLE_MARKER),
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Score(score) => serializer.serialize_f32(*score),
            Rating::Unavailable => serializer.serialize_str(UNAVAILABLE_MARKER),
        }
    }
}

/// Poster and rating for one movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetails {
    pub poster_url: String,
    pub rating: Rating,
}

impl MovieDetails {
    /// What a failed lookup resolves to
    pub fn unavailable() -> Self {
        Self {
            poster_url: PLACEHOLDER_POSTER_URL.to_string(),
            rating: Rating::Unavailable,
        }
    }

    /// Build details from a successful response body
    pub fn from_payload(payload: MoviePayload) -> Self {
        let poster_url = payload
            .poster_path
            .as_deref()
            .map(|path| path.trim_start_matches('/'))
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}/{}", IMAGE_BASE_URL, path))
            .unwrap_or_else(|| PLACEHOLDER_POSTER_URL.to_string());

        let rating = payload
            .vote_average
            .map(Rating::Score)
            .unwrap_or(Rating::Unavailable);

        Self { poster_url, rating }
    }
}

/// The subset of the `/movie/{id}` response we read. Unknown fields are
/// ignored.
#[derive(Debug, Default, Deserialize)]
pub struct MoviePayload {
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_path_becomes_image_url() {
        let payload: MoviePayload =
            serde_json::from_str(r#"{"poster_path": "/kqjL17yufvn9OVLyXYpvtyrFfak.jpg", "vote_average": 7.6, "title": "Mad Max"}"#)
                .unwrap();
        let details = MovieDetails::from_payload(payload);

        assert_eq!(
            details.poster_url,
            "https://image.tmdb.org/t/p/w500/kqjL17yufvn9OVLyXYpvtyrFfak.jpg"
        );
        assert_eq!(details.rating, Rating::Score(7.6));
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let payload: MoviePayload = serde_json::from_str("{}").unwrap();
        assert_eq!(MovieDetails::from_payload(payload), MovieDetails::unavailable());
    }

    #[test]
    fn test_empty_poster_path_uses_placeholder() {
        let details = MovieDetails::from_payload(MoviePayload {
            poster_path: Some(String::new()),
            vote_average: Some(5.5),
        });

        assert_eq!(details.poster_url, PLACEHOLDER_POSTER_URL);
        assert_eq!(details.rating, Rating::Score(5.5));
    }

    #[test]
    fn test_rating_display_and_json() {
        assert_eq!(Rating::Score(7.3).to_string(), "7.3");
        assert_eq!(Rating::Unavailable.to_string(), "N/A");

        let json = serde_json::to_value(MovieDetails::unavailable()).unwrap();
        assert_eq!(json["rating"], "N/A");
        assert_eq!(json["poster_url"], PLACEHOLDER_POSTER_URL);
    }
}
