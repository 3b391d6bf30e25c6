use std::collections::BTreeSet;

use crate::domain::route::Route;

/// A proposed route/delay combination for the last train of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub route_index: usize,
    pub delay: usize,
}

/// Tie-break strategy consulted only for the final train of a batch.
///
/// The scheduler hands the policy the candidate it is about to commit
/// (first collision-free route at the current delay) and the policy may
/// propose a different placement. The scheduler re-checks the proposal
/// against the occupancy table, so a policy can bias the choice but can
/// never break the no-collision guarantee.
pub trait DispatchPolicy {
    /// `routes` is sorted ascending by length; `candidate` indexes into it.
    fn place_final(&self, routes: &[Route], candidate: usize, delay: usize) -> Placement;
}

/// Takes whatever fits first. Makes the final train no different from the
/// others.
#[derive(Debug, Default)]
pub struct FirstFit;

impl DispatchPolicy for FirstFit {
    fn place_final(&self, _routes: &[Route], candidate: usize, delay: usize) -> Placement {
        Placement { route_index: candidate, delay }
    }
}

/// Historical heuristic for the last train: when the candidates split into
/// exactly two lengths and the shortest is more than one turn quicker,
/// hold the shortest route back one extra turn instead of dispatching the
/// scanned candidate. Intended to avoid a long idle tail behind one slow
/// train.
#[derive(Debug, Default)]
pub struct HoldBackShortest;

impl DispatchPolicy for HoldBackShortest {
    fn place_final(&self, routes: &[Route], candidate: usize, delay: usize) -> Placement {
        let lengths: BTreeSet<usize> = routes.iter().map(Route::len).collect();

        if lengths.len() == 2 {
            let mut it = lengths.iter();
            let (shortest, second) = (*it.next().unwrap(), *it.next().unwrap());
            if shortest + 1 < second {
                // routes is sorted ascending, so index 0 is a shortest route.
                return Placement { route_index: 0, delay: delay + 1 };
            }
        }

        Placement { route_index: candidate, delay }
    }
}
