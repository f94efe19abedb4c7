//! CLI argument parsing for ramal
//!
//! Uses clap for argument parsing. Global flags: --data, --format, --quiet,
//! --verbose, --log-level, --log-json.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgGroup, Args, Parser, Subcommand};

use ramal_core::geometry::Coordinate;

pub use ramal_core::format::OutputFormat;

/// Ramal - subway network graph CLI with A* shortest-route search
#[derive(Parser, Debug)]
#[command(name = "ramal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the station table (CSV)
    #[arg(long, global = true, env = "RAMAL_DATA")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every station in the network
    Stations,

    /// Look up a station by name, neighbor list, or coordinate
    Find(FindArgs),

    /// Remove a station, splicing its neighbors together
    Remove {
        /// Station name
        name: String,
    },

    /// Find the shortest route between two stations
    Route {
        /// Origin station name
        origin: String,

        /// Destination station name
        destination: String,

        /// Remove these stations (with rewiring) before searching
        #[arg(long, action = clap::ArgAction::Append)]
        avoid: Vec<String>,
    },
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("selector")
        .required(true)
        .args(["name", "neighbors", "coordinate"])
))]
pub struct FindArgs {
    /// Station name
    pub name: Option<String>,

    /// Comma-separated neighbor list, order-sensitive; the reversed order is
    /// tried before giving up
    #[arg(long, value_delimiter = ',')]
    pub neighbors: Option<Vec<String>>,

    /// Exact coordinate as X,Y
    #[arg(long, value_parser = parse_coordinate)]
    pub coordinate: Option<Coordinate>,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).map_err(|err| err.to_string())
}

fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid X component: {x:?}"))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid Y component: {y:?}"))?;
    Ok(Coordinate::new(x, y))
}
