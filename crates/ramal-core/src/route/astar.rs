//! A* shortest-route search
//!
//! Frontier selection minimizes `f = g + h` where `g` is the best known cost
//! from the origin and `h` is the straight-line distance to the destination.
//! Edge weights are themselves straight-line distances between adjacent
//! stations, so `h` never overestimates and the first time the destination
//! leaves the frontier its route is optimal.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace};

use crate::error::{RamalError, Result};
use crate::network::{canonical_name, Network};
use crate::route::path::build_route;
use crate::route::Route;

/// Wrapper for BinaryHeap to use as min-heap, ordered by `f` estimate
#[derive(Debug, Clone)]
struct HeapEntry {
    name: String,
    estimate: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.estimate == other.estimate
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Equal estimates fall back to name order, so pops are deterministic
        self.estimate
            .partial_cmp(&other.estimate)
            .unwrap()
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Find the shortest route between two named stations.
///
/// Errors with `StationNotFound` when either endpoint is missing and
/// `Unreachable` when the frontier empties before the destination is
/// reached. A neighbor listed without a corresponding edge record is
/// skipped, never costed.
#[tracing::instrument(skip(network), fields(origin = %origin, destination = %destination))]
pub fn shortest_route(network: &Network, origin: &str, destination: &str) -> Result<Route> {
    let origin = canonical_name(origin);
    let destination = canonical_name(destination);

    let Some(start) = network.station(&origin) else {
        return Err(RamalError::StationNotFound { name: origin });
    };
    let start_coord = start.coordinate;
    let Some(goal) = network.station(&destination) else {
        return Err(RamalError::StationNotFound { name: destination });
    };
    let goal_coord = goal.coordinate;

    if origin == destination {
        return Ok(Route {
            stations: vec![origin],
            total_distance: 0.0,
        });
    }

    let mut g_values: HashMap<String, f64> = HashMap::from([(origin.clone(), 0.0)]);
    let mut predecessor: HashMap<String, String> = HashMap::new();
    let mut closed: HashSet<String> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    heap.push(Reverse(HeapEntry {
        name: origin.clone(),
        estimate: start_coord.distance(&goal_coord),
    }));

    // The closed set already caps expansions at the station count; the
    // explicit bound is a safety net against a malformed graph.
    let max_expansions = network.len();
    let mut expansions = 0usize;

    while let Some(Reverse(HeapEntry { name: current, .. })) = heap.pop() {
        if current == destination {
            debug!(expansions, "destination reached");
            return build_route(network, &predecessor, &origin, &destination);
        }

        // A node can sit in the heap once per relaxation; later pops are stale
        if !closed.insert(current.clone()) {
            continue;
        }
        expansions += 1;
        if expansions > max_expansions {
            break;
        }

        let Some(&current_g) = g_values.get(&current) else {
            continue;
        };
        let Some(station) = network.station(&current) else {
            continue;
        };

        for neighbor in &station.neighbors {
            if closed.contains(neighbor) {
                continue;
            }
            let Some(weight) = network.edge_distance(&current, neighbor) else {
                continue;
            };
            let Some(neighbor_station) = network.station(neighbor) else {
                continue;
            };

            let tentative = current_g + weight;
            if g_values.get(neighbor).is_none_or(|&known| tentative < known) {
                g_values.insert(neighbor.clone(), tentative);
                predecessor.insert(neighbor.clone(), current.clone());
                let estimate = tentative + neighbor_station.coordinate.distance(&goal_coord);
                trace!(
                    neighbor = %neighbor,
                    g = tentative,
                    f = estimate,
                    "frontier update"
                );
                heap.push(Reverse(HeapEntry {
                    name: neighbor.clone(),
                    estimate,
                }));
            }
        }
    }

    debug!(expansions, "frontier exhausted");
    Err(RamalError::Unreachable {
        origin,
        destination,
    })
}
