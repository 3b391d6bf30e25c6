pub mod network;
pub mod route;
pub mod schedule;
pub mod simulation;
