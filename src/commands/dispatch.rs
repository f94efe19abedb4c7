//! Command dispatch logic for ramal

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use ramal_core::error::{RamalError, Result};
use ramal_core::loader;
use ramal_core::network::Network;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => Err(RamalError::UsageError(
            "no command given (see --help)".to_string(),
        )),

        Some(Commands::Stations) => {
            let network = load_network(cli, start)?;
            commands::stations::execute(cli, &network)
        }

        Some(Commands::Find(args)) => {
            let network = load_network(cli, start)?;
            commands::find::execute(cli, &network, args)
        }

        Some(Commands::Remove { name }) => {
            let mut network = load_network(cli, start)?;
            commands::remove::execute(cli, &mut network, name)
        }

        Some(Commands::Route {
            origin,
            destination,
            avoid,
        }) => {
            let mut network = load_network(cli, start)?;
            commands::route::execute(cli, &mut network, origin, destination, avoid)
        }
    }
}

fn load_network(cli: &Cli, start: Instant) -> Result<Network> {
    let path = cli.data.as_ref().ok_or_else(|| {
        RamalError::UsageError("--data <FILE> is required (or set RAMAL_DATA)".to_string())
    })?;

    let network = loader::load_network(path)?;

    if cli.verbose {
        eprintln!("load_network: {:?}", start.elapsed());
    }

    Ok(network)
}
