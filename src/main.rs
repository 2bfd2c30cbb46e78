use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use encore::aggregate::TourSnapshot;
use encore::router::{decide, NavState, View};

#[derive(Parser)]
#[command(name = "encore", version, about = "Concert tour data explorer")]
struct Cli {
    /// Path to the tour dataset (`;`-separated, header row required)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Emit the view payload as JSON instead of text tables
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the tour overview: stop map, city sales, surprise-song counts
    Overview,

    /// Show one city's dates, sales, and surprise songs
    City {
        /// City name (exact match against the dataset)
        name: String,
    },

    /// Show every city a surprise song was played in
    Song {
        /// Song title (cleaned form, as listed in the overview)
        title: String,
    },

    /// Dispatch a navigation path through the router and render the result
    Route {
        /// Navigation path: `/`, `/<city>`, or `/song/<encoded-title>`
        path: String,

        /// Simulate a map-marker click pending alongside the path change
        #[arg(long)]
        click: Option<String>,
    },

    /// Show dataset statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load config file (optional, defaults if missing)
    let config = encore::config::AppConfig::load();

    // Resolve dataset path: CLI > config > default
    let dataset_path = cli
        .dataset
        .or(config.dataset_path)
        .unwrap_or_else(|| PathBuf::from(encore::config::DEFAULT_DATASET));
    log::info!("Dataset: {}", dataset_path.display());

    // One load at startup; every command works off the immutable snapshot
    let rows = encore::dataset::load_rows(&dataset_path)
        .with_context(|| format!("Failed to load dataset {}", dataset_path.display()))?;
    let snapshot = TourSnapshot::build(rows);
    log::info!(
        "Loaded {} rows: {} cities, {} distinct songs",
        snapshot.rows.len(),
        snapshot.city_sales.len(),
        snapshot.song_counts.len()
    );

    let view = match cli.command {
        Commands::Overview => View::Overview,

        Commands::City { name } => View::CityDetail { city: name },

        Commands::Song { title } => View::SongDetail { song: title },

        Commands::Route { path, click } => {
            let mut nav = NavState::new();
            if let Some(label) = click {
                nav.on_marker_click(&label);
            }
            nav.on_path_change(&path);
            let view = decide(&nav, &snapshot.song_cities);
            log::debug!("Routed {:?} to {:?}", nav.path, view);
            view
        }

        Commands::Stats => {
            print_stats(&snapshot);
            return Ok(());
        }
    };

    let data = encore::view::build(&view, &snapshot);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        encore::render::render_text(&data);
    }

    Ok(())
}

/// Print dataset-level statistics.
fn print_stats(snapshot: &TourSnapshot) {
    println!("Dataset Statistics");
    println!("==================");
    println!("Tour stops:       {}", snapshot.rows.len());
    println!("Cities:           {}", snapshot.city_sales.len());
    println!("Distinct songs:   {}", snapshot.song_counts.len());
    println!("Total sales:      {:.0}", snapshot.total_sales());

    let dates: Vec<_> = snapshot.rows.iter().map(|r| r.date).collect();
    if let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) {
        println!("Date range:       {first} to {last}");
    }
}
