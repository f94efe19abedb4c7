//! Route reconstruction from a predecessor map
//!
//! The search records, for every reached station, the previous station on
//! the best known route to it. Reconstruction walks those links backward
//! from the destination, summing the forward edge distances, then reverses
//! the collected sequence. The walk is an explicit loop, so route length is
//! bounded by memory rather than stack depth.

use std::collections::HashMap;

use crate::error::{RamalError, Result};
use crate::network::Network;
use crate::route::Route;

/// Build the origin -> destination route from the predecessor map.
///
/// Expects names in canonical form, as the search recorded them. A station
/// without a predecessor entry before the walk reaches the origin means the
/// search state is inconsistent; that is `BrokenPath`, never a partial
/// route.
pub(crate) fn build_route(
    network: &Network,
    predecessor: &HashMap<String, String>,
    origin: &str,
    destination: &str,
) -> Result<Route> {
    let mut stations = vec![destination.to_string()];
    let mut total_distance = 0.0;
    let mut current = destination;

    while current != origin {
        let previous = predecessor
            .get(current)
            .ok_or_else(|| RamalError::BrokenPath {
                station: current.to_string(),
            })?;
        // The search only links pairs it walked an edge across, so the
        // forward edge must still exist.
        let weight =
            network
                .edge_distance(previous, current)
                .ok_or_else(|| RamalError::BrokenPath {
                    station: current.to_string(),
                })?;
        total_distance += weight;
        stations.push(previous.clone());
        current = previous;
    }

    stations.reverse();
    Ok(Route {
        stations,
        total_distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coordinate;

    fn two_hop_network() -> Network {
        let mut network = Network::new();
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 0.0);
        let c = Coordinate::new(3.0, 4.0);
        network.upsert_station("A", vec!["B".into()], a);
        network.upsert_station("B", vec!["A".into(), "C".into()], b);
        network.upsert_station("C", vec!["B".into()], c);
        network.create_edge("A", "B", a, b);
        network.create_edge("B", "C", b, c);
        network
    }

    #[test]
    fn walks_backward_and_reverses() {
        let network = two_hop_network();
        let predecessor = HashMap::from([
            ("B".to_string(), "A".to_string()),
            ("C".to_string(), "B".to_string()),
        ]);

        let route = build_route(&network, &predecessor, "A", "C").unwrap();
        assert_eq!(route.stations, vec!["A", "B", "C"]);
        assert_eq!(route.total_distance, 7.0);
    }

    #[test]
    fn missing_predecessor_is_broken_path() {
        let network = two_hop_network();
        // C's entry is missing entirely
        let predecessor = HashMap::from([("B".to_string(), "A".to_string())]);

        let err = build_route(&network, &predecessor, "A", "C").unwrap_err();
        assert!(matches!(err, RamalError::BrokenPath { station } if station == "C"));
    }

    #[test]
    fn missing_edge_is_broken_path() {
        let network = two_hop_network();
        // Predecessor chain names an edge the network does not hold
        let predecessor = HashMap::from([("C".to_string(), "A".to_string())]);

        let err = build_route(&network, &predecessor, "A", "C").unwrap_err();
        assert!(matches!(err, RamalError::BrokenPath { station } if station == "C"));
    }

    #[test]
    fn degenerate_walk_origin_equals_destination() {
        let network = two_hop_network();
        let route = build_route(&network, &HashMap::new(), "A", "A").unwrap();
        assert_eq!(route.stations, vec!["A"]);
        assert_eq!(route.total_distance, 0.0);
    }
}
