use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::Catalog;
use recommender::{GenreOverlap, PreferenceError, Recommendation, Recommender, UserProfile};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;

mod prompt;

use prompt::Prompter;

/// DuetRecs - Netflix picks for two people
#[derive(Parser)]
#[command(name = "duet-recs")]
#[command(
    about = "Recommend Netflix titles from the genres two users have in common",
    long_about = None
)]
struct Cli {
    /// Path to the Netflix titles CSV
    #[arg(short, long, default_value = "titles.csv")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend titles for two users given the titles each of them likes
    Recommend {
        /// Name of the first user
        #[arg(long, default_value = "User 1")]
        first_name: String,

        /// A title the first user likes (repeatable)
        #[arg(long = "first", required = true)]
        first: Vec<String>,

        /// Name of the second user
        #[arg(long, default_value = "User 2")]
        second_name: String,

        /// A title the second user likes (repeatable)
        #[arg(long = "second", required = true)]
        second: Vec<String>,

        /// Number of recommendations to return
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Order the returned titles by IMDb score
        #[arg(long)]
        by_score: bool,

        /// Print the recommendations as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search for a title (case-insensitive substring match, first hit wins)
    Search {
        #[arg(long)]
        title: String,
    },

    /// List genres in the cleaned catalog with their title counts
    Genres,

    /// Register two users and their titles through prompts
    Interactive {
        /// Number of recommendations to return
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Order the returned titles by IMDb score
        #[arg(long)]
        by_score: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Catalog::load_from_file(&cli.catalog)
        .with_context(|| format!("Failed to load catalog from {}", cli.catalog.display()))?;
    eprintln!(
        "{} Loaded {} titles in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend {
            first_name,
            first,
            second_name,
            second,
            limit,
            by_score,
            json,
        } => {
            let first = register_user(first_name, &first, &catalog);
            let second = register_user(second_name, &second, &catalog);
            handle_recommend(&catalog, &first, &second, limit, by_score, json)?
        }
        Commands::Search { title } => handle_search(&catalog, &title),
        Commands::Genres => handle_genres(&catalog),
        Commands::Interactive { limit, by_score } => handle_interactive(&catalog, limit, by_score)?,
    }

    Ok(())
}

/// Build a user from command-line titles, reporting the ones that don't resolve
fn register_user(name: String, titles: &[String], catalog: &Catalog) -> UserProfile {
    let mut user = UserProfile::new(name);
    for title in titles {
        if let Err(err) = user.add_preference(title, catalog) {
            warn!("Skipping title for {}: {}", user.name(), err);
            if let PreferenceError::NotFound { query } = &err {
                eprintln!("{} '{}' is not in the catalog, skipped", "✗".red(), query);
            }
        }
    }
    user
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: &Catalog,
    first: &UserProfile,
    second: &UserProfile,
    limit: usize,
    by_score: bool,
    json: bool,
) -> Result<()> {
    let recommender = Recommender::new(first, second);
    let recommendations = recommender.top(catalog, limit, by_score);

    if json {
        let out = serde_json::to_string_pretty(&recommendations)
            .context("Failed to serialize recommendations")?;
        println!("{}", out);
    } else {
        print_recommendations(first, second, recommender.overlap(), &recommendations);
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, title: &str) {
    match catalog.find_title(title) {
        Some(record) => {
            println!("{}", record.title.bold().blue());
            println!("{}Type: {}", "• ".green(), record.media_type);
            println!("{}Genres: {}", "• ".green(), record.genres.join(", "));
            println!(
                "{}Age rating: {}",
                "• ".green(),
                record.age_rating.as_deref().unwrap_or("-")
            );
            println!("{}IMDb score: {:.1}", "• ".green(), record.quality_score);
            if !record.description.is_empty() {
                println!("\n{}", record.description);
            }
        }
        None => println!("{} No title matches '{}'", "✗".red(), title),
    }
}

/// Handle the 'genres' command
fn handle_genres(catalog: &Catalog) {
    println!("{}", "Genres in catalog:".bold().blue());
    for (genre, count) in catalog.genre_counts() {
        println!("  {:<16} {}", genre, count);
    }
}

/// Handle the 'interactive' command
fn handle_interactive(catalog: &Catalog, limit: usize, by_score: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    loop {
        let first = prompter.collect_user("the first user", catalog)?;
        let second = prompter.collect_user("the second user", catalog)?;

        let recommender = Recommender::new(&first, &second);
        let recommendations = recommender.top(catalog, limit, by_score);
        print_recommendations(&first, &second, recommender.overlap(), &recommendations);

        if !prompter.ask_yes_no("Start over with another pair?")? {
            return Ok(());
        }
    }
}

/// Format and print the ranked list
fn print_recommendations(
    first: &UserProfile,
    second: &UserProfile,
    overlap: &GenreOverlap,
    recommendations: &[Recommendation<'_>],
) {
    let header = format!("Recommendations for {} and {}:", first.name(), second.name());
    println!("{}", header.bold().blue());

    if overlap.is_empty() {
        println!("No genres in common, so there is nothing to recommend.");
        return;
    }

    let shared = overlap
        .iter()
        .map(|(genre, count)| format!("{} ({})", genre, count))
        .collect::<Vec<_>>()
        .join(", ");
    println!("Shared genres: {}", shared);

    for (i, rec) in recommendations.iter().enumerate() {
        let record = rec.record;
        println!(
            "{}. {} [{}] ({}) - matches: {}, IMDb: {:.1}",
            (i + 1).to_string().green(),
            record.title.bold(),
            record.media_type,
            record.genres.join(", "),
            rec.match_count,
            record.quality_score
        );
    }
}
