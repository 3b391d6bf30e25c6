pub mod occupancy;
pub mod policy;
pub mod scheduler;

mod scheduler_tests;

pub use policy::{DispatchPolicy, FirstFit, HoldBackShortest, Placement};
pub use scheduler::{Assignment, Timetable, schedule};
