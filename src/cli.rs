use clap::Parser;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Computes collision-free train schedules over a station network and
/// prints the movement turn by turn.
#[derive(Parser, Debug)]
#[command(name = "train_dispatch")]
pub struct Cli {
    /// Path to the network map file
    pub map: PathBuf,

    /// Name of the start station
    pub start: String,

    /// Name of the end station
    pub end: String,

    /// Number of trains (positive integer)
    #[arg(allow_hyphen_values = true)]
    pub trains: String,

    /// Also write a PNG rendering of the network to network.png
    #[arg(short, long)]
    pub visualize: bool,
}

impl Cli {
    /// The train count is kept as a raw string by clap so that `abc` and
    /// `-3` both surface as the domain's invalid-count error instead of a
    /// clap parse failure.
    pub fn train_count(&self) -> Result<usize> {
        match self.trains.trim().parse::<i64>() {
            Ok(count) if count > 0 => Ok(count as usize),
            _ => Err(Error::InvalidTrainCount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(trains: &str) -> Cli {
        Cli::parse_from(["train_dispatch", "map.txt", "a", "b", trains])
    }

    #[test]
    fn positive_counts_parse() {
        assert_eq!(cli("4").train_count().unwrap(), 4);
    }

    #[test]
    fn zero_negative_and_garbage_counts_are_rejected() {
        for raw in ["0", "-2", "abc", "1.5", ""] {
            assert!(matches!(cli(raw).train_count(), Err(Error::InvalidTrainCount)), "accepted {:?}", raw);
        }
    }

    #[test]
    fn visualize_flag_defaults_off() {
        let parsed = cli("1");
        assert!(!parsed.visualize);

        let parsed = Cli::parse_from(["train_dispatch", "map.txt", "a", "b", "1", "--visualize"]);
        assert!(parsed.visualize);
    }
}
