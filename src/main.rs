//! Coverage Advisor - command line entry point
//!
//! Reads one or more venue layout files, runs the recommendation engine on
//! each and prints the results as a JSON array on stdout. Logs go to stderr.

use std::path::PathBuf;

use camera_coverage::core::config::EngineConfig;
use camera_coverage::core::error::Result;
use camera_coverage::recommendation::{rank_by_priority, RecommendationEngine};
use camera_coverage::venue::VenueLayout;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Recommend new security camera placements for venue floor plans
#[derive(Parser, Debug)]
#[command(name = "coverage-advisor")]
#[command(about = "Analyze camera coverage and recommend new camera placements")]
struct Args {
    /// Venue layout JSON files
    #[arg(required = true)]
    layouts: Vec<PathBuf>,

    /// Engine configuration (TOML); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Include an overall coverage report for each venue
    #[arg(long)]
    report: bool,

    /// Keep generation order instead of ranking by priority
    #[arg(long)]
    unranked: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Fail on layouts without floor plan dimensions instead of assuming a default size
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("camera_coverage=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            EngineConfig::load(path)?
        }
        None => EngineConfig::default(),
    };
    let engine = RecommendationEngine::new(config)?;

    let layouts = args
        .layouts
        .iter()
        .map(|path| {
            tracing::debug!("Reading layout {}", path.display());
            VenueLayout::load(path)
        })
        .collect::<Result<Vec<_>>>()?;

    if args.strict {
        for layout in &layouts {
            layout.normalize_strict(engine.config())?;
        }
    }

    let mut results = engine.analyze_batch(&layouts, args.report);
    if !args.unranked {
        for result in &mut results {
            rank_by_priority(&mut result.recommendations);
        }
    }

    let total: usize = results.iter().map(|r| r.recommendations.len()).sum();
    tracing::info!("{} venues analyzed, {} recommendations", results.len(), total);

    let json = if args.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };
    println!("{}", json);

    Ok(())
}
