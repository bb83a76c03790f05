//! Prompt loop mirroring the selector-based front-end: pick a title, a
//! count, optionally a minimum rating, then show the recommendations.
//!
//! The toggle and threshold live only for one round and are handed to the
//! engine as part of the request. Blank title or end of input quits.

use anyhow::Result;
use engine::{search_titles, RecommendationEngine, RecommendationRequest};
use metadata_client::DetailsFetcher;
use std::io::{BufRead, Write};

use crate::config::{parse_count, parse_threshold};
use crate::render;

pub const DEFAULT_COUNT: usize = 5;
const SEARCH_LIMIT: usize = 10;

pub async fn run<F: DetailsFetcher>(
    engine: &RecommendationEngine<F>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "{}", render::BANNER)?;

    loop {
        let Some(title) = select_title(engine, input, out)? else {
            break;
        };
        let Some(count) = ask_count(input, out)? else {
            break;
        };
        let Some(min_rating) = ask_min_rating(input, out)? else {
            break;
        };

        let request = RecommendationRequest::new(title.clone(), count).with_min_rating(min_rating);
        match engine.recommend(&request).await {
            Ok(recommendations) => {
                render::print_recommendations(out, &title, &recommendations, count)?
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
        writeln!(out)?;
    }

    writeln!(out, "Bye!")?;
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt(input: &mut impl BufRead, out: &mut impl Write, message: &str) -> Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// An exact catalog title, either typed directly or picked from search hits
fn select_title<F: DetailsFetcher>(
    engine: &RecommendationEngine<F>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<String>> {
    loop {
        let query = match prompt(input, out, "Select a movie (blank to quit): ")? {
            Some(query) if !query.is_empty() => query,
            _ => return Ok(None),
        };

        if engine.snapshot().index_of(&query).is_some() {
            return Ok(Some(query));
        }

        let hits = search_titles(engine.snapshot(), &query, SEARCH_LIMIT);
        if hits.is_empty() {
            writeln!(out, "No titles matched '{}'.", query)?;
            continue;
        }
        render::print_search_hits(out, &query, &hits)?;

        let Some(choice) = prompt(input, out, "Pick a number (blank to search again): ")? else {
            return Ok(None);
        };
        if choice.is_empty() {
            continue;
        }
        match choice.parse::<usize>() {
            Ok(n) if (1..=hits.len()).contains(&n) => return Ok(Some(hits[n - 1].title.clone())),
            _ => writeln!(out, "Not a valid choice: {}", choice)?,
        }
    }
}

fn ask_count(input: &mut impl BufRead, out: &mut impl Write) -> Result<Option<usize>> {
    loop {
        let message = format!("How many movies to recommend? [1-10, default {}]: ", DEFAULT_COUNT);
        let Some(answer) = prompt(input, out, &message)? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(Some(DEFAULT_COUNT));
        }
        match parse_count(&answer) {
            Ok(count) => return Ok(Some(count)),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

/// `Some(None)` when the filter is off, `Some(Some(threshold))` when on
fn ask_min_rating(input: &mut impl BufRead, out: &mut impl Write) -> Result<Option<Option<f32>>> {
    loop {
        let Some(answer) = prompt(input, out, "Only recommend movies above a minimum rating? [y/N]: ")? else {
            return Ok(None);
        };
        match answer.to_lowercase().as_str() {
            "" | "n" | "no" => return Ok(Some(None)),
            "y" | "yes" => break,
            _ => writeln!(out, "Please answer y or n.")?,
        }
    }

    loop {
        let Some(answer) = prompt(input, out, "Minimum rating? [1-10]: ")? else {
            return Ok(None);
        };
        match parse_threshold(&answer) {
            Ok(threshold) => return Ok(Some(Some(threshold))),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}
