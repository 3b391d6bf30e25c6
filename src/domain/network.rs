use std::collections::HashMap;

use crate::error::{Error, Result};

/// A single railway station in a network.
///
/// Coordinates are display-only: routing is done purely over the adjacency
/// lists and never looks at distances.
#[derive(Debug, Clone)]
pub struct Station {
    pub name: String,
    pub x: i64,
    pub y: i64,

    /// Names of directly connected stations, in insertion order.
    pub connections: Vec<String>,
}

/// An immutable-after-construction, undirected station network.
///
/// Invariants held by the mutating API:
/// - station names are unique, coordinates are unique
/// - connections are symmetric, with no self loops and no duplicates
///   (a reversed duplicate counts as a duplicate)
#[derive(Debug, Clone)]
pub struct Network {
    name: String,
    stations: HashMap<String, Station>,
}

impl Network {
    pub fn new(name: &str) -> Self {
        Network {
            name: name.to_string(),
            stations: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a station. Name and coordinate uniqueness are enforced here;
    /// name syntax is the loader's concern.
    pub fn add_station(&mut self, name: &str, x: i64, y: i64) -> Result<()> {
        if self.stations.contains_key(name) {
            return Err(Error::DuplicateStation {
                network: self.name.clone(),
                name: name.to_string(),
            });
        }

        if self.stations.values().any(|s| s.x == x && s.y == y) {
            return Err(Error::DuplicateCoordinate {
                x,
                y,
                network: self.name.clone(),
            });
        }

        self.stations.insert(
            name.to_string(),
            Station {
                name: name.to_string(),
                x,
                y,
                connections: Vec::new(),
            },
        );
        Ok(())
    }

    /// Adds an undirected connection between two existing stations,
    /// updating both adjacency lists.
    pub fn add_connection(&mut self, a: &str, b: &str) -> Result<()> {
        if a == b {
            return Err(Error::SelfLoop {
                network: self.name.clone(),
                station: a.to_string(),
            });
        }

        for endpoint in [a, b] {
            if !self.stations.contains_key(endpoint) {
                return Err(Error::UnknownStation {
                    network: self.name.clone(),
                    station: endpoint.to_string(),
                });
            }
        }

        // Symmetry means checking one side would do, but a half-written
        // connection from a corrupt caller should still be caught.
        let duplicate = self.stations[a].connections.iter().any(|c| c == b)
            || self.stations[b].connections.iter().any(|c| c == a);
        if duplicate {
            return Err(Error::DuplicateConnection {
                a: a.to_string(),
                b: b.to_string(),
                network: self.name.clone(),
            });
        }

        self.stations.get_mut(a).unwrap().connections.push(b.to_string());
        self.stations.get_mut(b).unwrap().connections.push(a.to_string());
        Ok(())
    }

    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }
}

/// Picks the network that contains both endpoints of the journey.
///
/// Existence of each endpoint is checked across all networks first, so the
/// caller gets "start station does not exist" rather than a generic
/// no-route error when the station was simply misspelled.
pub fn select_network<'a>(networks: &'a HashMap<String, Network>, start: &str, end: &str) -> Result<&'a Network> {
    let start_exists = networks.values().any(|n| n.contains(start));
    let end_exists = networks.values().any(|n| n.contains(end));

    if !start_exists {
        return Err(Error::StartStationNotFound);
    }
    if !end_exists {
        return Err(Error::EndStationNotFound);
    }

    networks
        .values()
        .find(|n| n.contains(start) && n.contains(end))
        .ok_or(Error::NoRouteFound)
}
