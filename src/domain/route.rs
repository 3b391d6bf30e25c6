use std::collections::HashSet;

use crate::domain::network::Network;

/// An ordered, non-repeating sequence of station names from the start
/// station to the end station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Vec<String>,
}

impl Route {
    pub fn new(stations: Vec<String>) -> Self {
        Route { stations }
    }

    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Number of stations, start and end included.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn start(&self) -> &str {
        &self.stations[0]
    }

    pub fn end(&self) -> &str {
        &self.stations[self.stations.len() - 1]
    }
}

/// Exhaustively enumerates all simple routes between two stations.
///
/// Depth-first search with backtracking: the visited set is scoped to the
/// current call stack and un-marked on the way back out, so a station may
/// appear in many different routes. Returns an empty list when the two
/// stations are disconnected.
///
/// Worst-case cost is exponential in the network size; the loader's station
/// cap is the only bound, so callers on dense networks must limit input
/// size themselves. Discovery order of equal-length routes follows the
/// connection order of the map file and carries no meaning.
pub fn find_all_routes(network: &Network, start: &str, end: &str) -> Vec<Route> {
    let mut found = Vec::new();
    let mut visited = HashSet::new();
    let mut trail = vec![start.to_string()];

    walk(network, start, end, &mut visited, &mut trail, &mut found);
    found
}

fn walk(
    network: &Network,
    current: &str,
    end: &str,
    visited: &mut HashSet<String>,
    trail: &mut Vec<String>,
    found: &mut Vec<Route>,
) {
    if current == end {
        found.push(Route::new(trail.clone()));
        return;
    }

    let Some(station) = network.station(current) else {
        return;
    };

    visited.insert(current.to_string());
    for neighbor in &station.connections {
        if !visited.contains(neighbor) {
            trail.push(neighbor.clone());
            walk(network, neighbor, end, visited, trail, found);
            trail.pop();
        }
    }
    visited.remove(current);
}
