use crate::domain::network::Network;
use crate::domain::route::{Route, find_all_routes};
use crate::domain::schedule::{DispatchPolicy, HoldBackShortest, Timetable, schedule};
use crate::domain::simulation::{Turn, simulate};
use crate::error::{Error, Result};

pub mod cli;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod render;
pub mod report;

/// The full result of a journey request: the committed timetable plus its
/// turn-by-turn replay.
#[derive(Debug)]
pub struct JourneyPlan {
    pub timetable: Timetable,
    pub turns: Vec<Turn>,
}

/// Plans a journey with the default dispatch policy.
pub fn plan_journey(network: &Network, start: &str, end: &str, train_count: usize) -> Result<JourneyPlan> {
    plan_journey_with(network, start, end, train_count, &HoldBackShortest)
}

/// Validates the request, enumerates all simple routes, schedules the
/// trains and replays the timetable.
///
/// Eager, non-retryable failures: unknown endpoints, equal endpoints, a
/// non-positive train count, or no route at all. A scheduler that runs out
/// of room is not a failure; it shows up as a partial timetable on the
/// returned plan.
pub fn plan_journey_with(
    network: &Network,
    start: &str,
    end: &str,
    train_count: usize,
    policy: &dyn DispatchPolicy,
) -> Result<JourneyPlan> {
    if !network.contains(start) {
        return Err(Error::StartStationNotFound);
    }
    if !network.contains(end) {
        return Err(Error::EndStationNotFound);
    }
    if start == end {
        return Err(Error::SameEndpoints);
    }
    if train_count == 0 {
        return Err(Error::InvalidTrainCount);
    }

    let mut routes = find_all_routes(network, start, end);
    if routes.is_empty() {
        return Err(Error::NoRouteFound);
    }
    routes.sort_by_key(Route::len);
    log::info!("found {} route(s) from {} to {}", routes.len(), start, end);

    let timetable = schedule(&routes, train_count, start, end, policy);
    if timetable.is_partial() {
        log::warn!(
            "timetable is partial: {} of {} trains placed",
            timetable.assignments.len(),
            timetable.requested
        );
    }

    let turns = simulate(&timetable.assignments);
    Ok(JourneyPlan { timetable, turns })
}
