//! Terminal rendering of results.

use colored::Colorize;
use engine::{MovieRecommendation, SearchHit, SimilarMovie};
use std::io::{self, Write};

pub const BANNER: &str = "Film-Verse 🎥";

/// One numbered block per recommendation: title, fetched rating, poster
pub fn print_recommendations(
    out: &mut impl Write,
    selected: &str,
    recommendations: &[MovieRecommendation],
    requested: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("Because you picked '{}':", selected).bold().blue()
    )?;
    if recommendations.is_empty() {
        writeln!(out, "  No movies matched.")?;
        return Ok(());
    }

    for (rank, rec) in recommendations.iter().enumerate() {
        writeln!(out, "{} {}", format!("{:>2}.", rank + 1).green(), rec.title)?;
        writeln!(out, "    Rating ⭐: {}", rec.rating)?;
        writeln!(out, "    Poster: {}", rec.poster_url)?;
    }
    print_shortfall(out, recommendations.len(), requested)
}

/// Ranked picks without metadata, showing the baseline rating
pub fn print_similar(
    out: &mut impl Write,
    selected: &str,
    picks: &[SimilarMovie],
    requested: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("Similar to '{}' (offline):", selected).bold().blue()
    )?;
    if picks.is_empty() {
        writeln!(out, "  No movies matched.")?;
        return Ok(());
    }

    for (rank, pick) in picks.iter().enumerate() {
        writeln!(
            out,
            "{} {} (baseline rating {:.1}, similarity {:.3})",
            format!("{:>2}.", rank + 1).green(),
            pick.title,
            pick.vote_average,
            pick.similarity
        )?;
    }
    print_shortfall(out, picks.len(), requested)
}

fn print_shortfall(out: &mut impl Write, found: usize, requested: usize) -> io::Result<()> {
    if found < requested {
        writeln!(
            out,
            "{}",
            format!("  Only {} of {} requested movies qualified.", found, requested).yellow()
        )?;
    }
    Ok(())
}

pub fn print_search_hits(out: &mut impl Write, query: &str, hits: &[SearchHit]) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("Search results for '{}':", query).bold().blue()
    )?;
    if hits.is_empty() {
        writeln!(out, "  No titles matched.")?;
    }
    for (n, hit) in hits.iter().enumerate() {
        writeln!(
            out,
            "{} {} (rating {:.1})",
            format!("{:>2}.", n + 1).cyan(),
            hit.title,
            hit.vote_average
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use metadata_client::{PLACEHOLDER_POSTER_URL, Rating};

    fn render(print: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn pick(index: usize, title: &str, vote_average: f32, similarity: f32) -> SimilarMovie {
        SimilarMovie {
            index,
            movie_id: 100 + index as u32,
            title: title.to_string(),
            vote_average,
            similarity,
        }
    }

    fn recommendation(title: &str, poster_url: &str, rating: Rating) -> MovieRecommendation {
        MovieRecommendation {
            movie_id: 7,
            title: title.to_string(),
            poster_url: poster_url.to_string(),
            rating,
            similarity: 0.5,
        }
    }

    #[test]
    fn test_print_similar_lists_baseline_rating_and_similarity() {
        let picks = vec![pick(2, "Gamma", 7.0, 0.8), pick(1, "Beta", 5.0, 0.25)];

        let text = render(|out| print_similar(out, "Alpha", &picks, 2));

        assert_eq!(
            text,
            "Similar to 'Alpha' (offline):\n \
              1. Gamma (baseline rating 7.0, similarity 0.800)\n \
              2. Beta (baseline rating 5.0, similarity 0.250)\n"
        );
    }

    #[test]
    fn test_print_similar_reports_shortfall() {
        let picks = vec![pick(2, "Gamma", 7.0, 0.8)];

        let text = render(|out| print_similar(out, "Alpha", &picks, 3));

        assert!(text.contains(" 1. Gamma (baseline rating 7.0, similarity 0.800)\n"));
        assert!(text.ends_with("  Only 1 of 3 requested movies qualified.\n"));
    }

    #[test]
    fn test_print_similar_without_picks() {
        let text = render(|out| print_similar(out, "Alpha", &[], 5));

        assert_eq!(text, "Similar to 'Alpha' (offline):\n  No movies matched.\n");
    }

    #[test]
    fn test_print_recommendations_shows_unavailable_rating() {
        let recs = vec![recommendation("Gamma", PLACEHOLDER_POSTER_URL, Rating::Unavailable)];

        let text = render(|out| print_recommendations(out, "Alpha", &recs, 2));

        assert!(text.contains("    Rating ⭐: N/A\n"));
        assert!(text.contains(&format!("    Poster: {}\n", PLACEHOLDER_POSTER_URL)));
        assert!(text.ends_with("  Only 1 of 2 requested movies qualified.\n"));
    }

    #[test]
    fn test_recommendations_json_shape() {
        let recs = vec![
            recommendation("Gamma", "https://image.tmdb.org/t/p/w500/g.jpg", Rating::Score(7.5)),
            recommendation("Beta", PLACEHOLDER_POSTER_URL, Rating::Unavailable),
        ];

        let json = serde_json::to_value(&recs).unwrap();

        assert_eq!(json[0]["title"], "Gamma");
        assert_eq!(json[0]["movie_id"], 7);
        assert_eq!(json[0]["rating"].as_f64(), Some(7.5));
        assert_eq!(json[0]["poster_url"], "https://image.tmdb.org/t/p/w500/g.jpg");
        assert_eq!(json[1]["rating"], "N/A");
        assert_eq!(json[1]["poster_url"], PLACEHOLDER_POSTER_URL);
        assert_eq!(json[1]["similarity"].as_f64(), Some(0.5));
        assert_eq!(json[1].as_object().map(|fields| fields.len()), Some(5));
    }
}
