use data_loader::Snapshot;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("models");

    println!("Loading recommender snapshots...\n");

    let start = Instant::now();
    let snapshot = Snapshot::load_from_files(data_dir)
        .expect("Failed to load snapshots");
    let elapsed = start.elapsed();

    let cells = snapshot.len() * snapshot.len();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", snapshot.len());
    println!("Similarity cells: {}", cells);
    println!("\nPerformance: {:.0} cells/second",
             cells as f64 / elapsed.as_secs_f64());
}
