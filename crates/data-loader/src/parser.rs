//! Parser for the snapshot files.
//!
//! - movie_list.dat: movieId::voteAverage::title
//! - similarity.dat: one comma-separated row of scores per line
//!
//! The title is the last field so a title containing "::" still parses.
//! Blank lines are skipped in both files; line numbers in errors are 1-based
//! and count blank lines.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use rayon::prelude::*;
use std::fs;
use std::path::Path;

pub const MOVIE_LIST_FILE: &str = "movie_list.dat";
pub const SIMILARITY_FILE: &str = "similarity.dat";

/// Read a snapshot file into memory, reporting a missing file by path
fn read_snapshot(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Non-blank lines paired with their 1-based line number
fn numbered_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect()
}

fn parse_finite(raw: &str, field: &str, file: &str, line_no: usize) -> Result<f32> {
    let value: f32 = raw.trim().parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: format!("Invalid {}: {}", field, e),
    })?;

    if !value.is_finite() {
        return Err(DataLoadError::InvalidValue {
            field: field.to_string(),
            value: raw.trim().to_string(),
        });
    }
    Ok(value)
}

/// Parse a single catalog line
pub fn parse_movie_line(line: &str, line_no: usize) -> Result<Movie> {
    let missing = |what: &str| DataLoadError::ParseError {
        file: MOVIE_LIST_FILE.to_string(),
        line: line_no,
        reason: format!("Missing {}", what),
    };

    let mut parts = line.splitn(3, "::");
    let movie_id = parts.next().ok_or_else(|| missing("movieId"))?;
    let vote_average = parts.next().ok_or_else(|| missing("vote_average"))?;
    let title = parts.next().ok_or_else(|| missing("title"))?.trim();

    if title.is_empty() {
        return Err(missing("title"));
    }

    Ok(Movie {
        id: movie_id
            .trim()
            .parse()
            .map_err(|e| DataLoadError::ParseError {
                file: MOVIE_LIST_FILE.to_string(),
                line: line_no,
                reason: format!("Invalid movieId: {}", e),
            })?,
        title: title.to_string(),
        vote_average: parse_finite(vote_average, "vote_average", MOVIE_LIST_FILE, line_no)?,
    })
}

/// Parse a single similarity row
pub fn parse_similarity_line(line: &str, line_no: usize) -> Result<Vec<f32>> {
    line.split(',')
        .map(|raw| parse_finite(raw, "similarity score", SIMILARITY_FILE, line_no))
        .collect()
}

/// Parse the catalog file. Row order is preserved.
pub fn parse_movie_list(path: &Path) -> Result<Vec<Movie>> {
    let content = read_snapshot(path)?;
    numbered_lines(&content)
        .into_iter()
        .map(|(line_no, line)| parse_movie_line(line, line_no))
        .collect()
}

/// Parse the similarity file.
///
/// Rows are parsed in parallel; `collect` on an indexed parallel iterator
/// keeps them in file order.
pub fn parse_similarity(path: &Path) -> Result<Vec<Vec<f32>>> {
    let content = read_snapshot(path)?;
    numbered_lines(&content)
        .into_par_iter()
        .map(|(line_no, line)| parse_similarity_line(line, line_no))
        .collect()
}
