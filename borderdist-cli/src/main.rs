//! borderdist CLI - Command-line interface
//!
//! This binary provides a command-line interface to the borderdist library.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::batch::BatchArgs;
use commands::build::BuildArgs;
use commands::config::ConfigCommands;
use commands::query::QueryArgs;

#[derive(Parser)]
#[command(name = "borderdist")]
#[command(version = borderdist::VERSION)]
#[command(about = "Geodesic distance from points to polygon borders on WGS84", long_about = None)]
struct Cli {
    /// Enable debug logging (also mirrored to stderr)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preprocess a GeoJSON border into a segment list
    Build {
        /// GeoJSON file with Polygon or MultiPolygon geometry
        #[arg(long)]
        input: PathBuf,

        /// Segment list file to write
        #[arg(long)]
        output: PathBuf,
    },

    /// Distance from one point to the border
    Query {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Border file (GeoJSON or segment list); defaults to [border] path
        #[arg(long)]
        border: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Solve every segment instead of pruning
        #[arg(long)]
        exhaustive: bool,
    },

    /// Distances for a CSV file of lat,lon points
    Batch {
        /// CSV file with one lat,lon pair per line
        #[arg(long)]
        points: PathBuf,

        /// Border file (GeoJSON or segment list); defaults to [border] path
        #[arg(long)]
        border: Option<PathBuf>,

        /// CSV file to write (stdout if omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();
    let debug = cli.debug;

    let result = match cli.command {
        Commands::Build { input, output } => {
            commands::build::run(BuildArgs { input, output }, debug)
        }
        Commands::Query {
            lat,
            lon,
            border,
            json,
            exhaustive,
        } => commands::query::run(
            QueryArgs {
                lat,
                lon,
                border,
                json,
                exhaustive,
            },
            debug,
        ),
        Commands::Batch {
            points,
            border,
            output,
        } => commands::batch::run(
            BatchArgs {
                points,
                border,
                output,
            },
            debug,
        ),
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
