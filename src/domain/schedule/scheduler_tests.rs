/// Unit tests for the greedy scheduler. The collision invariant and the
/// end-to-end scenarios are additionally covered by the integration suite
/// in `tests/test_scheduling.rs`; here we pin down the internals: delay
/// progression, policy interaction, and partial timetables.
#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::domain::route::Route;
    use crate::domain::schedule::policy::{DispatchPolicy, FirstFit, HoldBackShortest, Placement};
    use crate::domain::schedule::scheduler::{Timetable, schedule};

    fn route(stations: &[&str]) -> Route {
        Route::new(stations.iter().map(|s| s.to_string()).collect())
    }

    /// Every intermediate (station, absolute time) cell must be claimed by
    /// at most one train.
    fn assert_no_collisions(timetable: &Timetable, start: &str, end: &str) {
        let mut claimed = HashSet::new();
        for assignment in &timetable.assignments {
            for (offset, station) in assignment.route.stations().iter().enumerate() {
                if station != start && station != end {
                    let cell = (station.clone(), assignment.delay + offset);
                    assert!(claimed.insert(cell.clone()), "two trains occupy {:?}", cell);
                }
            }
        }
    }

    #[test]
    fn single_route_gets_increasing_delays() {
        let routes = vec![route(&["src", "a", "b", "dst"])];
        let timetable = schedule(&routes, 3, "src", "dst", &FirstFit);

        assert!(!timetable.is_partial());
        let delays: Vec<usize> = timetable.assignments.iter().map(|a| a.delay).collect();
        assert_eq!(delays, vec![0, 1, 2]);
        assert_no_collisions(&timetable, "src", "dst");
    }

    #[test]
    fn disjoint_routes_depart_together() {
        let routes = vec![route(&["src", "a", "dst"]), route(&["src", "b", "dst"])];
        let timetable = schedule(&routes, 2, "src", "dst", &HoldBackShortest);

        assert_eq!(timetable.assignments.len(), 2);
        assert_eq!(timetable.assignments[0].delay, 0);
        assert_eq!(timetable.assignments[1].delay, 0);
        assert_ne!(timetable.assignments[0].route, timetable.assignments[1].route);
    }

    #[test]
    fn train_numbers_are_one_based_and_sequential() {
        let routes = vec![route(&["src", "a", "dst"])];
        let timetable = schedule(&routes, 4, "src", "dst", &FirstFit);

        let trains: Vec<usize> = timetable.assignments.iter().map(|a| a.train).collect();
        assert_eq!(trains, vec![1, 2, 3, 4]);
    }

    #[test]
    fn final_train_is_held_back_on_a_wide_length_gap() {
        // Shortest route is 3 stations, the alternative 5: the heuristic
        // should put the last train on the short route one turn late.
        let routes = vec![
            route(&["src", "a", "dst"]),
            route(&["src", "b", "c", "d", "dst"]),
        ];
        let timetable = schedule(&routes, 2, "src", "dst", &HoldBackShortest);

        assert_eq!(timetable.assignments.len(), 2);
        let last = &timetable.assignments[1];
        assert_eq!(last.route, routes[0]);
        assert_eq!(last.delay, 1);
        assert_no_collisions(&timetable, "src", "dst");
    }

    #[test]
    fn policy_proposal_is_rejected_when_it_would_collide() {
        /// Deliberately proposes a colliding placement; the scheduler must
        /// fall back to the scanned candidate.
        struct Stubborn;
        impl DispatchPolicy for Stubborn {
            fn place_final(&self, _routes: &[Route], _candidate: usize, _delay: usize) -> Placement {
                Placement { route_index: 0, delay: 0 }
            }
        }

        let routes = vec![route(&["src", "a", "dst"])];
        let timetable = schedule(&routes, 2, "src", "dst", &Stubborn);

        assert_eq!(timetable.assignments.len(), 2);
        assert_eq!(timetable.assignments[1].delay, 1, "colliding proposal must not be committed");
        assert_no_collisions(&timetable, "src", "dst");
    }

    #[test]
    fn no_routes_yields_an_empty_partial_timetable() {
        let timetable = schedule(&[], 3, "src", "dst", &HoldBackShortest);

        assert!(timetable.assignments.is_empty());
        assert_eq!(timetable.requested, 3);
        assert!(timetable.is_partial());
    }

    #[test]
    fn position_at_clamps_to_the_terminal() {
        let routes = vec![route(&["src", "a", "dst"])];
        let timetable = schedule(&routes, 1, "src", "dst", &FirstFit);
        let assignment = &timetable.assignments[0];

        assert_eq!(assignment.position_at(0), "src");
        assert_eq!(assignment.position_at(1), "a");
        assert_eq!(assignment.position_at(2), "dst");
        assert_eq!(assignment.position_at(99), "dst");
    }

    #[test]
    fn waiting_trains_sit_at_the_start_station() {
        let routes = vec![route(&["src", "a", "dst"])];
        let timetable = schedule(&routes, 2, "src", "dst", &FirstFit);
        let delayed = &timetable.assignments[1];

        assert_eq!(delayed.delay, 1);
        assert_eq!(delayed.position_at(0), "src");
        assert_eq!(delayed.timeline(), vec!["src", "src", "a", "dst"]);
    }
}
