use std::collections::{HashMap, HashSet};

use crate::domain::route::Route;

/// Time-indexed record of which intermediate station is in use at which
/// absolute turn.
///
/// Start and end stations are boarding platforms with unlimited capacity
/// and are never recorded. The table is scratch state for a single
/// scheduling request and is discarded once the timetable is built; the
/// network itself is never touched.
#[derive(Debug, Default)]
pub struct OccupancyTable {
    cells: HashMap<String, HashSet<usize>>,
}

impl OccupancyTable {
    pub fn new() -> Self {
        OccupancyTable { cells: HashMap::new() }
    }

    /// True if running `route` with `delay` wait turns would pass through
    /// an intermediate station already claimed at the same absolute time.
    pub fn conflicts(&self, route: &Route, delay: usize, start: &str, end: &str) -> bool {
        route.stations().iter().enumerate().any(|(offset, station)| {
            station != start
                && station != end
                && self.cells.get(station).is_some_and(|times| times.contains(&(delay + offset)))
        })
    }

    /// Claims every intermediate station of `route` at its absolute time.
    pub fn record(&mut self, route: &Route, delay: usize, start: &str, end: &str) {
        for (offset, station) in route.stations().iter().enumerate() {
            if station != start && station != end {
                self.cells.entry(station.clone()).or_default().insert(delay + offset);
            }
        }
    }

    #[cfg(test)]
    pub fn is_occupied(&self, station: &str, time: usize) -> bool {
        self.cells.get(station).is_some_and(|times| times.contains(&time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(stations: &[&str]) -> Route {
        Route::new(stations.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn terminals_are_never_recorded() {
        let mut table = OccupancyTable::new();
        let r = route(&["src", "mid", "dst"]);
        table.record(&r, 0, "src", "dst");

        assert!(table.is_occupied("mid", 1));
        assert!(!table.is_occupied("src", 0));
        assert!(!table.is_occupied("dst", 2));
    }

    #[test]
    fn conflict_respects_the_delay_offset() {
        let mut table = OccupancyTable::new();
        let r = route(&["src", "mid", "dst"]);
        table.record(&r, 0, "src", "dst");

        // Same route one turn later shifts "mid" from time 1 to time 2.
        assert!(table.conflicts(&r, 0, "src", "dst"));
        assert!(!table.conflicts(&r, 1, "src", "dst"));
    }

    #[test]
    fn unlimited_capacity_at_terminals() {
        let mut table = OccupancyTable::new();
        let r = route(&["src", "mid", "dst"]);
        table.record(&r, 0, "src", "dst");

        let through_src = route(&["src", "other", "dst"]);
        assert!(!table.conflicts(&through_src, 0, "src", "dst"));
    }
}
