//! CLI frontend for Waddle, the crowd-steered travelling duck.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "waddle",
    about = "Waddle: a duck walks a route and the crowd steers it",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hatch a fresh duck and write its first snapshot
    Init {
        /// Route file: `lat,lon` lines or an encoded polyline
        #[arg(short, long)]
        route: Option<PathBuf>,

        /// Places file to pick a random short first journey from
        #[arg(short, long)]
        places: Option<PathBuf>,

        /// Snapshot directory
        #[arg(short, long, default_value = "ducks")]
        store: PathBuf,

        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Advance the journey by one tick
    Advance {
        /// A crowd response to the pending scenario
        #[arg(short, long)]
        response: Option<String>,

        /// Snapshot directory
        #[arg(short, long, default_value = "ducks")]
        store: PathBuf,

        /// Directory of scenario .txt files
        #[arg(long, default_value = "scenarios")]
        scenarios: PathBuf,

        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the current duck's stats
    Status {
        /// Snapshot directory
        #[arg(short, long, default_value = "ducks")]
        store: PathBuf,
    },

    /// Parse every scenario file and report errors
    Check {
        /// Directory of scenario .txt files
        #[arg(long, default_value = "scenarios")]
        scenarios: PathBuf,
    },

    /// List scenario sources with their answer and outcome counts
    Scenarios {
        /// Directory of scenario .txt files
        #[arg(long, default_value = "scenarios")]
        scenarios: PathBuf,
    },

    /// Fast-forward the journey, auto-playing every scenario
    Run {
        /// Number of advances to perform
        #[arg(short, long, default_value = "24")]
        ticks: u64,

        /// Snapshot directory
        #[arg(short, long, default_value = "ducks")]
        store: PathBuf,

        /// Directory of scenario .txt files
        #[arg(long, default_value = "scenarios")]
        scenarios: PathBuf,

        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Hatch a successor from the latest finished duck
    Hatch {
        /// Route file for the next leg
        #[arg(short, long)]
        route: Option<PathBuf>,

        /// Places file to pick the next destination from
        #[arg(short, long)]
        places: Option<PathBuf>,

        /// Snapshot directory
        #[arg(short, long, default_value = "ducks")]
        store: PathBuf,

        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            route,
            places,
            store,
            seed,
        } => commands::init::run(&store, route.as_deref(), places.as_deref(), seed),
        Commands::Advance {
            response,
            store,
            scenarios,
            seed,
        } => commands::advance::run(&store, &scenarios, response.as_deref(), seed),
        Commands::Status { store } => commands::status::run(&store),
        Commands::Check { scenarios } => commands::check::run(&scenarios),
        Commands::Scenarios { scenarios } => commands::scenarios::run(&scenarios),
        Commands::Run {
            ticks,
            store,
            scenarios,
            seed,
        } => commands::run::run(&store, &scenarios, ticks, seed),
        Commands::Hatch {
            route,
            places,
            store,
            seed,
        } => commands::hatch::run(&store, route.as_deref(), places.as_deref(), seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
