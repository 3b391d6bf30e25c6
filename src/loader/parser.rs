use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::network::Network;
use crate::error::{Error, Result};

lazy_static! {
    /// Station names are lowercase alphanumeric/underscore tokens.
    static ref STATION_NAME: Regex = Regex::new(r"^[a-z0-9_]+$").unwrap();
}

/// Parses one `name,x,y` station line and adds the station to `network`.
pub fn parse_station_line(line: &str, network: &mut Network) -> Result<()> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 3 {
        return Err(Error::InvalidStationFormat {
            network: network.name().to_string(),
            line: line.to_string(),
        });
    }

    let name = parts[0].trim();
    if !STATION_NAME.is_match(name) {
        return Err(Error::InvalidStationName {
            network: network.name().to_string(),
            name: name.to_string(),
        });
    }

    let x = parse_coordinate(parts[1], 'x', name, network.name())?;
    let y = parse_coordinate(parts[2], 'y', name, network.name())?;

    network.add_station(name, x, y)
}

/// Parses one `a-b` connection line and adds the connection to `network`.
pub fn parse_connection_line(line: &str, network: &mut Network) -> Result<()> {
    let parts: Vec<&str> = line.split('-').collect();
    if parts.len() != 2 {
        return Err(Error::InvalidConnectionFormat {
            network: network.name().to_string(),
            line: line.to_string(),
        });
    }

    network.add_connection(parts[0].trim(), parts[1].trim())
}

/// Coordinates must be non-negative integers.
fn parse_coordinate(raw: &str, axis: char, station: &str, network: &str) -> Result<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 0 => Ok(value),
        _ => Err(Error::InvalidCoordinate {
            axis,
            station: station.to_string(),
            network: network.to_string(),
        }),
    }
}
