//! `ramal stations` command - list the loaded network

use crate::cli::{Cli, OutputFormat};
use ramal_core::error::Result;
use ramal_core::network::Network;

/// Execute the stations command
pub fn execute(cli: &Cli, network: &Network) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let value: Vec<serde_json::Value> = network
                .stations()
                .map(|(name, station)| {
                    serde_json::json!({
                        "name": name,
                        "coordinate": station.coordinate,
                        "neighbors": station.neighbors,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            for (name, station) in network.stations() {
                println!(
                    "{} ({}, {}) neighbors={}",
                    name,
                    station.coordinate.x,
                    station.coordinate.y,
                    station.neighbors.len()
                );
            }
            if !cli.quiet {
                println!(
                    "{} stations, {} edges",
                    network.len(),
                    network.edge_count()
                );
            }
        }
    }

    Ok(())
}
