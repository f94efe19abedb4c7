//! `ramal route` command - shortest route between two stations
//!
//! `--avoid` removes stations (with full neighbor rewiring) before the
//! search runs, which answers "how would I get there if X were closed".

use crate::cli::{Cli, OutputFormat};
use ramal_core::error::Result;
use ramal_core::network::Network;
use ramal_core::route::shortest_route;

/// Execute the route command
pub fn execute(
    cli: &Cli,
    network: &mut Network,
    origin: &str,
    destination: &str,
    avoid: &[String],
) -> Result<()> {
    for name in avoid {
        let removal = network.remove_station(name)?;
        tracing::debug!(station = %removal.name, rewired = removal.rewired.len(), "avoided station");
    }

    let route = shortest_route(network, origin, destination)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&route)?);
        }
        OutputFormat::Human => {
            println!("{}", route.stations.join(" -> "));
            println!("total distance: {:.2}", route.total_distance);
        }
    }

    Ok(())
}
