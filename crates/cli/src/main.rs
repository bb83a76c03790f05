use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::Snapshot;
use engine::{search_titles, RecommendError, RecommendationEngine, RecommendationRequest};
use metadata_client::TmdbClient;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

mod config;
mod interactive;
mod render;

use config::{parse_threshold, Settings};

/// Film-Verse - content-similarity movie recommender
#[derive(Parser)]
#[command(name = "film-verse")]
#[command(about = "Recommends movies similar to one you pick, with TMDb posters and ratings", long_about = None)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to a title
    Recommend {
        /// Exact catalog title
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "5", value_parser = clap::value_parser!(u8).range(1..=10))]
        count: u8,

        /// Only recommend movies whose catalog rating is at least this (1-10)
        #[arg(long, value_parser = parse_threshold)]
        min_rating: Option<f32>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Skip poster and rating lookups, show catalog data only
        #[arg(long)]
        offline: bool,
    },

    /// Search catalog titles (case-insensitive substring match)
    Search {
        /// Part of a movie title
        #[arg(long)]
        title: String,

        /// Maximum number of matches to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Pick a movie, count and rating filter at prompts
    Interactive,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean for results
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let snapshot = Arc::new(
        Snapshot::load_from_files(&cli.settings.data_dir).with_context(|| {
            format!(
                "Failed to load snapshots from {}",
                cli.settings.data_dir.display()
            )
        })?,
    );
    eprintln!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        snapshot.len(),
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend {
            title,
            count,
            min_rating,
            json,
            offline,
        } => {
            let engine = build_engine(snapshot, &cli.settings, offline)?;
            let request =
                RecommendationRequest::new(title, usize::from(count)).with_min_rating(min_rating);
            handle_recommend(&engine, &request, json, offline).await?
        }
        Commands::Search { title, limit } => handle_search(&snapshot, &title, limit)?,
        Commands::Interactive => {
            let engine = build_engine(snapshot, &cli.settings, false)?;
            let stdin = io::stdin();
            interactive::run(&engine, &mut stdin.lock(), &mut io::stdout()).await?
        }
    }

    Ok(())
}

fn build_engine(
    snapshot: Arc<Snapshot>,
    settings: &Settings,
    offline: bool,
) -> Result<RecommendationEngine<TmdbClient>> {
    let client = TmdbClient::new(settings.metadata_config(offline)?)
        .context("Failed to create TMDb client")?;
    info!(
        api_url = %client.config().api_url,
        timeout = ?client.config().timeout,
        offline,
        "Metadata client ready"
    );
    Ok(RecommendationEngine::new(snapshot, client))
}

/// Handle the 'recommend' command
async fn handle_recommend(
    engine: &RecommendationEngine<TmdbClient>,
    request: &RecommendationRequest,
    json: bool,
    offline: bool,
) -> Result<()> {
    if offline {
        let picks = engine
            .similar_movies(request)
            .map_err(|e| not_found_hint(engine.snapshot(), e))?;
        let mut out = io::stdout().lock();
        if json {
            writeln!(out, "{}", serde_json::to_string_pretty(&picks)?)?;
        } else {
            render::print_similar(&mut out, &request.title, &picks, request.count)?;
        }
        return Ok(());
    }

    let recommendations = engine
        .recommend(request)
        .await
        .map_err(|e| not_found_hint(engine.snapshot(), e))?;
    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&recommendations)?)?;
    } else {
        render::print_recommendations(&mut out, &request.title, &recommendations, request.count)?;
    }
    Ok(())
}

/// Turn a missing title into an error that lists close matches
fn not_found_hint(snapshot: &Snapshot, err: RecommendError) -> anyhow::Error {
    let RecommendError::NotFound { title } = &err;
    let hits = search_titles(snapshot, title, 5);
    if hits.is_empty() {
        return err.into();
    }

    let suggestions = hits
        .iter()
        .map(|hit| format!("  - {}", hit.title))
        .collect::<Vec<_>>()
        .join("\n");
    anyhow::anyhow!("{}\nDid you mean:\n{}", err, suggestions)
}

/// Handle the 'search' command
fn handle_search(snapshot: &Snapshot, title: &str, limit: usize) -> Result<()> {
    let hits = search_titles(snapshot, title, limit);
    render::print_search_hits(&mut io::stdout().lock(), title, &hits)?;
    Ok(())
}
