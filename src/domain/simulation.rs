use std::fmt;

use crate::domain::schedule::Assignment;

/// One train's reported move within a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    pub train: usize,
    pub station: String,
}

/// One discrete simulation step. Only trains that changed station are
/// listed, in ascending train number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub movements: Vec<Movement>,
}

impl fmt::Display for Turn {
    /// Compatibility format: space-separated `T<train>-<station>` tokens.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, movement) in self.movements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "T{}-{}", movement.train, movement.station)?;
        }
        Ok(())
    }
}

/// Replays a timetable as a sequence of turns.
///
/// A pure projection of the assignments: walks absolute time from 1 to the
/// longest timeline, reports every train whose station differs from the
/// previous step, drops trains that already arrived, and skips turns in
/// which nothing moved. Running it twice on the same input yields the same
/// sequence.
pub fn simulate(assignments: &[Assignment]) -> Vec<Turn> {
    let timelines: Vec<Vec<&str>> = assignments.iter().map(Assignment::timeline).collect();
    let last_step = timelines.iter().map(|t| t.len().saturating_sub(1)).max().unwrap_or(0);

    let mut turns = Vec::new();
    for step in 1..=last_step {
        let mut movements = Vec::new();

        for (assignment, timeline) in assignments.iter().zip(&timelines) {
            if step < timeline.len() && timeline[step] != timeline[step - 1] {
                movements.push(Movement {
                    train: assignment.train,
                    station: timeline[step].to_string(),
                });
            }
        }

        if !movements.is_empty() {
            turns.push(Turn { movements });
        }
    }
    turns
}
