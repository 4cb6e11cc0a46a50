use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod settings;

use settings::ConfigArgs;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "trip-match",
    about = "Match rider requests against driver offers",
    long_about = "Evaluates stored trip records for ride-share compatibility.\n\
                  Reports go to stdout as JSON; logs go to stderr (RUST_LOG)."
)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every counterpart trip compatible with one trip
    Scan {
        /// JSON array of trip records
        #[arg(long)]
        trips: PathBuf,
        /// Id of the trip to match for
        #[arg(long)]
        trip_id: String,
        /// Treat the trip as departing now instead of its stored time
        #[arg(long)]
        depart_now: bool,
    },
    /// Evaluate a single pair of trips
    Compare {
        /// JSON array of trip records
        #[arg(long)]
        trips: PathBuf,
        /// Id of the trip doing the matching
        mine: String,
        /// Id of the candidate trip
        other: String,
    },
    /// Decode an encoded polyline into points
    Decode {
        /// Encoded polyline (precision 5)
        polyline: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Scan {
            trips,
            trip_id,
            depart_now,
        } => {
            let config = cli.config.load()?;
            let records = commands::load_records(&trips)?;
            let now = depart_now.then(chrono::Utc::now);
            let report = commands::scan(&records, &trip_id, now, config)?;
            serde_json::to_string_pretty(&report)?
        }
        Commands::Compare {
            trips,
            mine,
            other,
        } => {
            let config = cli.config.load()?;
            let records = commands::load_records(&trips)?;
            let verdict = commands::compare(&records, &mine, &other, config)?;
            serde_json::to_string_pretty(&verdict)?
        }
        Commands::Decode { polyline } => {
            let points = trip_match::polyline::decode(&polyline)?;
            serde_json::to_string_pretty(&points)?
        }
    };

    println!("{output}");
    Ok(())
}
