//! Attribute-based station lookup
//!
//! One lookup entry point over a tagged query instead of a pile of optional
//! parameters, so each mode is explicit at the call site and impossible to
//! combine ambiguously.

use crate::geometry::Coordinate;
use crate::network::{canonical_name, Network, Station};

/// A single-mode station query
#[derive(Debug, Clone, PartialEq)]
pub enum StationQuery {
    /// Exact (case-insensitive) name match
    ByName(String),
    /// Exact, order-sensitive neighbor-list match. Callers that treat the
    /// list as undirected should retry with the reversed list.
    ByNeighbors(Vec<String>),
    /// Exact coordinate match on both components
    ByCoordinate { x: f64, y: f64 },
}

impl Network {
    /// Find the first station matching the query, in name order.
    ///
    /// Returns `None` when nothing matches; an absent station is an ordinary
    /// lookup miss here, not an error.
    pub fn find(&self, query: &StationQuery) -> Option<(&str, &Station)> {
        match query {
            StationQuery::ByName(name) => self
                .stations
                .get_key_value(&canonical_name(name))
                .map(|(name, station)| (name.as_str(), station)),
            StationQuery::ByNeighbors(neighbors) => {
                let neighbors: Vec<String> =
                    neighbors.iter().map(|n| canonical_name(n)).collect();
                self.stations()
                    .find(|(_, station)| station.neighbors == neighbors)
            }
            StationQuery::ByCoordinate { x, y } => {
                let target = Coordinate::new(*x, *y);
                self.stations()
                    .find(|(_, station)| station.coordinate == target)
            }
        }
    }
}
