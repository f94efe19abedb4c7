//! `ramal remove` command - remove a station and splice its neighbors
//!
//! The network is rebuilt from the data file on every invocation, so the
//! removal itself is ephemeral; the command exists to show how the topology
//! rewires. Use `route --avoid` to search the rewired network directly.

use crate::cli::{Cli, OutputFormat};
use ramal_core::error::Result;
use ramal_core::network::Network;

/// Execute the remove command
pub fn execute(cli: &Cli, network: &mut Network, name: &str) -> Result<()> {
    let removal = network.remove_station(name)?;

    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "removed": removal.name,
                "station": removal.station,
                "rewired": removal.rewired,
                "stations_remaining": network.len(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            println!(
                "removed {} ({}, {})",
                removal.name, removal.station.coordinate.x, removal.station.coordinate.y
            );
            if removal.rewired.is_empty() {
                println!("rewired: none");
            } else {
                let pairs: Vec<String> = removal
                    .rewired
                    .iter()
                    .map(|(a, b)| format!("{} <-> {}", a, b))
                    .collect();
                println!("rewired: {}", pairs.join(", "));
            }
            if !cli.quiet {
                println!("stations remaining: {}", network.len());
            }
        }
    }

    Ok(())
}
