use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::domain::network::Network;
use crate::error::{Error, Result};
use crate::loader::parser::{parse_connection_line, parse_station_line};

/// Upper bound on stations across the whole map file; exhaustive route
/// enumeration is exponential, so input size is capped here at the door.
pub const MAX_STATIONS: usize = 10000;

/// Which section of a network block the reader is currently inside.
#[derive(Debug, PartialEq, Eq)]
enum Section {
    None,
    Stations,
    Connections,
}

/// Reads a network map file into named, validated networks.
///
/// Format:
/// - `#` starts a comment, blank lines are skipped
/// - `---name---` opens a new network block
/// - a `stations:` section of `name,x,y` lines
/// - a `connections:` section of `a-b` lines
///
/// Every block must contain both sections, and the file must declare at
/// least one network. All structural and semantic problems surface as
/// distinct [`Error`] variants.
pub fn read_map(path: &Path) -> Result<HashMap<String, Network>> {
    let contents = fs::read_to_string(path)?;
    parse_map(&contents)
}

pub fn parse_map(contents: &str) -> Result<HashMap<String, Network>> {
    let mut networks: HashMap<String, Network> = HashMap::new();
    let mut current: Option<String> = None;
    let mut section = Section::None;
    let mut seen = SectionFlags::default();
    let mut total_stations = 0;

    for raw_line in contents.lines() {
        let line = raw_line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("---") && line.ends_with("---") {
            if let Some(name) = &current {
                seen.check(name)?;
            }
            let name = line.trim_matches(['-', ' ']).to_string();
            networks.insert(name.clone(), Network::new(&name));
            current = Some(name);
            section = Section::None;
            seen = SectionFlags::default();
            continue;
        }

        match line {
            "stations:" => {
                section = Section::Stations;
                seen.stations = true;
            }
            "connections:" => {
                section = Section::Connections;
                seen.connections = true;
            }
            _ => {
                let Some(name) = &current else {
                    return Err(Error::DataBeforeNetwork);
                };
                let network = networks.get_mut(name).unwrap();

                match section {
                    Section::Stations => {
                        parse_station_line(line, network)?;
                        total_stations += 1;
                        if total_stations > MAX_STATIONS {
                            return Err(Error::TooManyStations(MAX_STATIONS));
                        }
                    }
                    Section::Connections => parse_connection_line(line, network)?,
                    // Data between a network header and its first section
                    // header has no meaning; skipped, as the format always
                    // has been lenient here.
                    Section::None => log::debug!("ignoring line outside any section: {}", line),
                }
            }
        }
    }

    if let Some(name) = &current {
        seen.check(name)?;
    }
    if networks.is_empty() {
        return Err(Error::NoNetworks);
    }

    log::debug!("parsed {} network(s), {} station(s) total", networks.len(), total_stations);
    Ok(networks)
}

#[derive(Debug, Default)]
struct SectionFlags {
    stations: bool,
    connections: bool,
}

impl SectionFlags {
    fn check(&self, network: &str) -> Result<()> {
        if !self.stations {
            return Err(Error::MissingStationsSection { network: network.to_string() });
        }
        if !self.connections {
            return Err(Error::MissingConnectionsSection { network: network.to_string() });
        }
        Ok(())
    }
}
