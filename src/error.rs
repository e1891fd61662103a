//! Error types for Facility Inspector.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`FacilityBackend`](crate::backend::FacilityBackend).
#[derive(Debug, Error)]
pub enum BackendError {
    /// Failed to read the snapshot file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the snapshot file back to disk.
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or does not match the expected shape.
    #[error("invalid snapshot: {source}")]
    Snapshot {
        #[from]
        source: serde_json::Error,
    },

    /// The collaborator could not be reached.
    #[error("backend unavailable: {message}")]
    Unavailable { message: String },

    /// The collaborator refused the operation.
    #[error("backend rejected the request: {message}")]
    Rejected { message: String },
}

/// The collaborator fetch that failed while loading a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStep {
    Buildings,
    Floors,
    Rooms,
    MaintenanceRequests,
    RoomRequests,
    CreateRequest,
}

impl fmt::Display for FetchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Buildings => "buildings",
            Self::Floors => "floors",
            Self::Rooms => "rooms",
            Self::MaintenanceRequests => "maintenance requests",
            Self::RoomRequests => "room requests",
            Self::CreateRequest => "create request",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by the floor orchestration layer.
#[derive(Debug, Error)]
pub enum FacilityError {
    /// The selected building is not known to the backend.
    #[error("building \"{requested}\" not found in database. Available: {available}")]
    BuildingNotFound { requested: String, available: String },

    /// The selected floor is not known to the backend for this building.
    #[error("floor \"{requested}\" not found in database. Available: {available}")]
    FloorNotFound { requested: String, available: String },

    /// A request was attempted against a room without a backend record.
    #[error("room '{room}' is not yet registered in the system; contact an administrator")]
    UnregisteredRoom { room: String },

    /// A request was attempted without a description.
    #[error("please provide a description for the maintenance request")]
    EmptyDescription,

    /// A room-scoped operation was attempted with nothing selected.
    #[error("no room selected")]
    NoRoomSelected,

    /// A floor-scoped operation was attempted before a floor was loaded.
    #[error("no building and floor loaded")]
    NoActiveFloor,

    /// One of the collaborator calls failed.
    #[error("failed to fetch {step}: {source}")]
    Fetch {
        step: FetchStep,
        #[source]
        source: BackendError,
    },
}

impl FacilityError {
    pub(crate) fn fetch(step: FetchStep) -> impl FnOnce(BackendError) -> Self {
        move |source| Self::Fetch { step, source }
    }
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// A status filter name that is neither `all` nor a room status key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status filter '{0}' (expected all, pending, in_progress, completed or no_request)")]
pub struct UnknownStatusFilter(pub String);

/// Command-line settings that parse but do not make sense together.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A snapshot file is needed for anything but layout validation.
    #[error("no snapshot file given; pass a path or set FACILITY_DATA")]
    MissingData,

    /// A floor was given without the building it belongs to.
    #[error("--floor \"{floor}\" needs --building")]
    FloorWithoutBuilding { floor: String },

    /// Headless export needs a floor to export.
    #[error("--csv and --json need both --building and --floor")]
    ExportWithoutLocation,
}

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to open the log file.
    #[error("failed to open log file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The log level is not a valid filter directive.
    #[error("invalid log filter '{directive}': {message}")]
    InvalidFilter { directive: String, message: String },

    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {message}")]
    Install { message: String },
}
