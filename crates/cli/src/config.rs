//! Runtime configuration.
//!
//! Every setting can come from a flag or an environment variable; a `.env`
//! file in the working directory is loaded before parsing.

use anyhow::{bail, Result};
use clap::Args;
use metadata_client::{MetadataConfig, DEFAULT_API_URL};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Directory holding movie_list.dat and similarity.dat
    #[arg(short, long, env = "FILM_VERSE_DATA_DIR", default_value = "models")]
    pub data_dir: PathBuf,

    /// TMDb API key used for poster and rating lookups
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// TMDb API base URL
    #[arg(long, env = "TMDB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds (unset keeps the HTTP client default)
    #[arg(long, env = "TMDB_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Metadata client settings. Lookups need a key unless `offline` is set,
    /// in which case the client is never called.
    pub fn metadata_config(&self, offline: bool) -> Result<MetadataConfig> {
        let api_key = match (&self.api_key, offline) {
            (Some(key), _) if !key.trim().is_empty() => key.trim().to_string(),
            (_, true) => String::new(),
            _ => bail!(
                "TMDB_API_KEY is not set (pass --api-key, or --offline to skip poster and rating lookups)"
            ),
        };

        Ok(MetadataConfig::new(api_key)
            .with_api_url(self.api_url.clone())
            .with_timeout(self.timeout_secs.map(Duration::from_secs)))
    }
}

/// Parse a minimum rating in the 1.0-10.0 range offered by the selector
pub fn parse_threshold(raw: &str) -> std::result::Result<f32, String> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw.trim()))?;
    if !(1.0..=10.0).contains(&value) {
        return Err(format!("{} is outside 1-10", value));
    }
    Ok(value)
}

/// Parse a recommendation count in the 1-10 range
pub fn parse_count(raw: &str) -> std::result::Result<usize, String> {
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", raw.trim()))?;
    if !(1..=10).contains(&value) {
        return Err(format!("{} is outside 1-10", value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: Option<&str>) -> Settings {
        Settings {
            data_dir: PathBuf::from("models"),
            api_key: api_key.map(str::to_string),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: Some(3),
        }
    }

    #[test]
    fn test_metadata_config_requires_key_online() {
        assert!(settings(None).metadata_config(false).is_err());
        assert!(settings(Some("  ")).metadata_config(false).is_err());

        let config = settings(Some("abc")).metadata_config(false).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_metadata_config_offline_without_key() {
        assert!(settings(None).metadata_config(true).is_ok());
    }

    #[test]
    fn test_parse_ranges() {
        assert_eq!(parse_count("3"), Ok(3));
        assert!(parse_count("0").is_err());
        assert!(parse_count("11").is_err());
        assert!(parse_count("two").is_err());

        assert_eq!(parse_threshold("6.5"), Ok(6.5));
        assert_eq!(parse_threshold(" 10 "), Ok(10.0));
        assert!(parse_threshold("0.5").is_err());
        assert!(parse_threshold("NaN").is_err());
    }
}
