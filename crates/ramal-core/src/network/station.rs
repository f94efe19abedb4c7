//! Station records and name normalization

use serde::Serialize;

use crate::geometry::Coordinate;

/// Canonical form of a station name: trimmed and uppercased.
///
/// Every name crossing the network boundary is canonicalized once on the way
/// in, so all stored keys, neighbor entries, and edge endpoints compare
/// directly without further case handling.
pub fn canonical_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// A vertex in the network: a station's position and its adjacency list.
///
/// Neighbor lists are ordered and may contain duplicates. A station that
/// serves several lines accumulates one neighbor pair per line, and that
/// stored order is what removal rewiring walks (see
/// [`Network::remove_station`](super::Network::remove_station)).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub coordinate: Coordinate,
    pub neighbors: Vec<String>,
}

impl Station {
    pub fn new(coordinate: Coordinate, neighbors: Vec<String>) -> Self {
        Station {
            coordinate,
            neighbors,
        }
    }
}
