use data_loader::MovieCollection;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/movies.csv"));

    println!("Loading {}...\n", path.display());

    let start = Instant::now();
    let report = MovieCollection::load_from_file(&path).expect("Failed to load movie file");
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", report.collection.len());
    println!("Skipped lines: {}", report.skipped.len());
    println!("Distinct years: {}", report.collection.years().len());
    println!("\nPerformance: {:.0} movies/second",
             report.collection.len() as f64 / elapsed.as_secs_f64());
}
