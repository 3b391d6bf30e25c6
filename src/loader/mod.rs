pub mod map_reader;
pub mod parser;

pub use map_reader::{MAX_STATIONS, parse_map, read_map};
