use crate::domain::route::Route;
use crate::domain::schedule::occupancy::OccupancyTable;
use crate::domain::schedule::policy::DispatchPolicy;

/// One train's committed plan: a route plus the number of turns it waits
/// at the start station before departing.
#[derive(Debug, Clone)]
pub struct Assignment {
    /// 1-based train number, in dispatch order.
    pub train: usize,
    pub route: Route,
    pub delay: usize,
}

impl Assignment {
    /// Station occupied at absolute time `time`: the start station while
    /// waiting, then the route, clamped at the terminal once reached.
    pub fn position_at(&self, time: usize) -> &str {
        if time < self.delay {
            return self.route.start();
        }
        let index = (time - self.delay).min(self.route.len() - 1);
        &self.route.stations()[index]
    }

    /// The delay-padded station sequence, one entry per absolute turn
    /// until arrival.
    pub fn timeline(&self) -> Vec<&str> {
        let mut timeline = Vec::with_capacity(self.delay + self.route.len());
        for _ in 0..self.delay {
            timeline.push(self.route.start());
        }
        timeline.extend(self.route.stations().iter().map(String::as_str));
        timeline
    }
}

/// Result of a scheduling request. May hold fewer assignments than were
/// requested when the safety bound fires; see [`Timetable::is_partial`].
#[derive(Debug)]
pub struct Timetable {
    pub assignments: Vec<Assignment>,
    pub requested: usize,
}

impl Timetable {
    /// True when the scheduler gave up before placing every requested
    /// train. Best-effort degradation, not an error: callers that need
    /// exactly `requested` trains must check this flag.
    pub fn is_partial(&self) -> bool {
        self.assignments.len() < self.requested
    }
}

/// Greedy multi-pass scheduler.
///
/// `routes` must be sorted ascending by length. Starting with delay 0, the
/// routes are scanned in order and every route whose intermediate stations
/// are collision-free at the current delay is committed; after a full scan
/// the delay is bumped and the scan repeats, until `train_count` trains
/// are placed. The `policy` is consulted once, for the final train of the
/// batch, and its proposal is only taken if it is itself collision-free.
///
/// Not makespan-optimal by design. A safety bound of
/// `longest route × train_count` delay increments guards against
/// non-termination; hitting it yields a partial timetable.
pub fn schedule(
    routes: &[Route],
    train_count: usize,
    start: &str,
    end: &str,
    policy: &dyn DispatchPolicy,
) -> Timetable {
    let mut table = OccupancyTable::new();
    let mut assignments: Vec<Assignment> = Vec::with_capacity(train_count);

    let max_route_len = routes.last().map(Route::len).unwrap_or(0);
    let mut delay = 0;

    while assignments.len() < train_count {
        for (index, route) in routes.iter().enumerate() {
            if assignments.len() >= train_count {
                break;
            }
            if table.conflicts(route, delay, start, end) {
                continue;
            }

            let (mut chosen, mut chosen_delay) = (index, delay);
            if assignments.len() + 1 == train_count {
                let placement = policy.place_final(routes, index, delay);
                if !table.conflicts(&routes[placement.route_index], placement.delay, start, end) {
                    (chosen, chosen_delay) = (placement.route_index, placement.delay);
                }
            }

            table.record(&routes[chosen], chosen_delay, start, end);
            assignments.push(Assignment {
                train: assignments.len() + 1,
                route: routes[chosen].clone(),
                delay: chosen_delay,
            });
        }

        delay += 1;
        if delay > max_route_len * train_count {
            log::warn!(
                "scheduling bound reached after {} delay steps; placed {} of {} trains",
                delay,
                assignments.len(),
                train_count
            );
            break;
        }
    }

    Timetable { assignments, requested: train_count }
}
