use colored::Colorize;

use crate::domain::schedule::Timetable;
use crate::domain::simulation::Turn;
use crate::error::Error;

/// User-facing text formatting, owned by the boundary layer.
///
/// The core modules return plain data and plain error messages; every
/// color and prefix decision lives here and is passed in explicitly, so
/// there is no global presentation state to leak into the algorithms.
#[derive(Debug, Clone, Copy)]
pub struct ReportStyle {
    use_color: bool,
}

impl ReportStyle {
    pub fn colored() -> Self {
        ReportStyle { use_color: true }
    }

    /// For piped output and tests.
    pub fn plain() -> Self {
        ReportStyle { use_color: false }
    }

    pub fn error_line(&self, err: &Error) -> String {
        let line = format!("Error: {}", err);
        if self.use_color { line.as_str().red().to_string() } else { line }
    }

    pub fn partial_warning(&self, timetable: &Timetable) -> String {
        let line = format!(
            "Warning: Only {} of {} trains could be scheduled",
            timetable.assignments.len(),
            timetable.requested
        );
        if self.use_color { line.as_str().yellow().to_string() } else { line }
    }

    /// Turn lines are the machine-readable output contract and are never
    /// decorated.
    pub fn turn_line(&self, turn: &Turn) -> String {
        turn.to_string()
    }
}
