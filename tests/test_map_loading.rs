use std::fmt::Write as _;

use train_dispatch::error::Error;
use train_dispatch::loader::{MAX_STATIONS, parse_map, read_map};

const SMALL_MAP: &str = "\
# two tiny networks in one file
---london---
stations:
waterloo, 0, 0   # terminus
st_pancras, 3, 1
victoria, 1, 2

connections:
waterloo-st_pancras
waterloo-victoria
victoria-st_pancras

---jungle---
stations:
jungle,0,0
desert,1,1
connections:
jungle-desert
";

#[test]
fn parses_multiple_named_networks() {
    let networks = parse_map(SMALL_MAP).unwrap();

    assert_eq!(networks.len(), 2);

    let london = &networks["london"];
    assert_eq!(london.station_count(), 3);
    assert!(london.contains("waterloo"));
    assert!(london.station("waterloo").unwrap().connections.contains(&"victoria".to_string()));
    assert!(london.station("victoria").unwrap().connections.contains(&"waterloo".to_string()));

    let jungle = &networks["jungle"];
    assert_eq!(jungle.station_count(), 2);
    let desert = jungle.station("desert").unwrap();
    assert_eq!((desert.x, desert.y), (1, 1));
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let map = "---n---\n# a comment\nstations:\n\na,0,0 # inline\nb,1,1\nconnections:\na-b\n";
    let networks = parse_map(map).unwrap();
    assert_eq!(networks["n"].station_count(), 2);
}

#[test]
fn data_before_any_network_is_rejected() {
    let err = parse_map("stations:\na,0,0\n").unwrap_err();
    assert!(matches!(err, Error::DataBeforeNetwork));
}

#[test]
fn each_network_needs_both_sections() {
    let err = parse_map("---n---\nconnections:\n").unwrap_err();
    assert!(matches!(err, Error::MissingStationsSection { .. }));

    let err = parse_map("---n---\nstations:\na,0,0\n").unwrap_err();
    assert!(matches!(err, Error::MissingConnectionsSection { .. }));

    // The incomplete block may come first in a multi-network file.
    let err = parse_map("---n---\nstations:\na,0,0\n---m---\nstations:\nb,0,0\nconnections:\n").unwrap_err();
    assert!(matches!(err, Error::MissingConnectionsSection { ref network } if network == "n"));
}

#[test]
fn an_empty_file_has_no_networks() {
    let err = parse_map("# nothing but comments\n").unwrap_err();
    assert!(matches!(err, Error::NoNetworks));
}

#[test]
fn duplicate_stations_and_coordinates_are_rejected() {
    let err = parse_map("---n---\nstations:\na,0,0\na,1,1\nconnections:\n").unwrap_err();
    assert!(matches!(err, Error::DuplicateStation { .. }));

    let err = parse_map("---n---\nstations:\na,0,0\nb,0,0\nconnections:\n").unwrap_err();
    assert!(matches!(err, Error::DuplicateCoordinate { x: 0, y: 0, .. }));
}

#[test]
fn bad_connections_are_rejected() {
    let base = "---n---\nstations:\na,0,0\nb,1,1\nconnections:\n";

    let err = parse_map(&format!("{}a-a\n", base)).unwrap_err();
    assert!(matches!(err, Error::SelfLoop { .. }));

    let err = parse_map(&format!("{}a-c\n", base)).unwrap_err();
    assert!(matches!(err, Error::UnknownStation { .. }));

    let err = parse_map(&format!("{}a-b\nb-a\n", base)).unwrap_err();
    assert!(matches!(err, Error::DuplicateConnection { .. }), "reversed duplicate must be caught");
}

#[test]
fn the_station_cap_is_enforced() {
    let mut map = String::from("---big---\nstations:\n");
    for i in 0..=MAX_STATIONS {
        writeln!(map, "s{},{},{}", i, i % 500, i / 500).unwrap();
    }
    map.push_str("connections:\n");

    let err = parse_map(&map).unwrap_err();
    assert!(matches!(err, Error::TooManyStations(_)));
}

#[test]
fn read_map_loads_from_disk_and_reports_missing_files() {
    let path = std::env::temp_dir().join(format!("train_dispatch_map_{}.map", std::process::id()));
    std::fs::write(&path, SMALL_MAP).unwrap();

    let networks = read_map(&path).unwrap();
    assert_eq!(networks.len(), 2);
    std::fs::remove_file(&path).unwrap();

    let err = read_map(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
