use thiserror::Error;

/// All terminal failures the dispatcher can report.
///
/// Every variant renders its user-facing message without color or an
/// `Error:` prefix; decoration is the job of the boundary layer
/// (`crate::report`), never of the core.
#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    Io(#[from] std::io::Error),

    // --- Map structure ---
    #[error("Found data before network declaration")]
    DataBeforeNetwork,

    #[error("Network '{network}' does not contain a 'stations:' section")]
    MissingStationsSection { network: String },

    #[error("Network '{network}' does not contain a 'connections:' section")]
    MissingConnectionsSection { network: String },

    #[error("No valid networks found in the map file")]
    NoNetworks,

    #[error("A map contains more than {0} stations")]
    TooManyStations(usize),

    // --- Station lines ---
    #[error("Invalid station format in network {network}: {line}")]
    InvalidStationFormat { network: String, line: String },

    #[error("Invalid station name in network {network}: {name}")]
    InvalidStationName { network: String, name: String },

    #[error("Invalid {axis} coordinate for station {station} in network {network}")]
    InvalidCoordinate {
        axis: char,
        station: String,
        network: String,
    },

    #[error("Duplicate station name in network {network}: {name}")]
    DuplicateStation { network: String, name: String },

    #[error("Two stations exist at the same coordinates ({x}, {y}) in network {network}")]
    DuplicateCoordinate { x: i64, y: i64, network: String },

    // --- Connection lines ---
    #[error("Invalid connection format in network {network}: {line}")]
    InvalidConnectionFormat { network: String, line: String },

    #[error("Self loop connection for station in network {network}: {station}")]
    SelfLoop { network: String, station: String },

    #[error("Station {station} does not exist in network {network}")]
    UnknownStation { network: String, station: String },

    #[error("Duplicate connection between {a} and {b} in network {network}")]
    DuplicateConnection {
        a: String,
        b: String,
        network: String,
    },

    // --- Journey request ---
    #[error("Start station does not exist")]
    StartStationNotFound,

    #[error("End station does not exist")]
    EndStationNotFound,

    #[error("Start and end station are the same")]
    SameEndpoints,

    #[error("No paths found")]
    NoRouteFound,

    #[error("Number of trains is not a valid positive integer")]
    InvalidTrainCount,

    // --- Rendering ---
    #[error("Failed to encode network image: {0}")]
    ImageEncoding(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
