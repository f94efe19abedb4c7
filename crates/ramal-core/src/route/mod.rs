//! Route search over the network
//!
//! - `astar`: best-first shortest-path search producing a predecessor map
//! - `path`: backward reconstruction of the ordered route from that map

pub mod astar;
pub mod path;

use serde::Serialize;

pub use astar::shortest_route;

/// An ordered route between two stations, origin and destination inclusive,
/// with the summed edge distance along it. Ephemeral: recomputed per query,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub stations: Vec<String>,
    pub total_distance: f64,
}
