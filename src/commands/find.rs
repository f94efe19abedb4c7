//! `ramal find` command - look up a station by attribute
//!
//! Three mutually exclusive modes, enforced by the argument group:
//! - positional name: exact (case-insensitive) name match
//! - `--neighbors A,B`: exact, order-sensitive neighbor-list match; the
//!   reversed list is tried before reporting a miss, since callers rarely
//!   know which way round the line was stored
//! - `--coordinate X,Y`: exact coordinate match
//!
//! A miss is an ordinary result, not an error: the command reports it and
//! exits 0.

use crate::cli::{Cli, FindArgs, OutputFormat};
use ramal_core::error::Result;
use ramal_core::network::{Network, Station, StationQuery};

/// Execute the find command
pub fn execute(cli: &Cli, network: &Network, args: &FindArgs) -> Result<()> {
    let found = match (&args.name, &args.neighbors, &args.coordinate) {
        (Some(name), _, _) => network.find(&StationQuery::ByName(name.clone())),
        (_, Some(neighbors), _) => {
            let forward = StationQuery::ByNeighbors(neighbors.clone());
            let reversed =
                StationQuery::ByNeighbors(neighbors.iter().rev().cloned().collect());
            network.find(&forward).or_else(|| network.find(&reversed))
        }
        (_, _, Some(coordinate)) => network.find(&StationQuery::ByCoordinate {
            x: coordinate.x,
            y: coordinate.y,
        }),
        // The clap group guarantees one selector is present
        (None, None, None) => None,
    };

    match cli.format {
        OutputFormat::Json => {
            let value = match found {
                Some((name, station)) => serde_json::json!({
                    "found": true,
                    "name": name,
                    "station": station,
                }),
                None => serde_json::json!({ "found": false }),
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => match found {
            Some((name, station)) => print_station(name, station),
            None => {
                if !cli.quiet {
                    println!("no matching station");
                }
            }
        },
    }

    Ok(())
}

fn print_station(name: &str, station: &Station) {
    println!(
        "{} ({}, {})",
        name, station.coordinate.x, station.coordinate.y
    );
    if station.neighbors.is_empty() {
        println!("  neighbors: none");
    } else {
        println!("  neighbors: {}", station.neighbors.join(", "));
    }
}
