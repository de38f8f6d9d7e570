use data_loader::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "titles.csv".to_string());

    println!("Loading titles from {}...\n", path);

    let start = Instant::now();
    let catalog = Catalog::load_from_file(Path::new(&path))
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let genres = catalog.genre_counts();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Titles: {}", catalog.len());
    println!("Distinct genres: {}", genres.len());
    println!("\nPerformance: {:.0} titles/second",
             catalog.len() as f64 / elapsed.as_secs_f64());
}
