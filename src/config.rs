//! Command-line arguments and the settings resolved from them.

use crate::engine::{RoomQuery, StatusFilter};
use crate::error::ConfigError;
use crate::logging::LogTarget;
use crate::view::ViewState;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "facility-inspector")]
#[command(about = "Facility Inspector - floor plans with live maintenance status")]
#[command(version)]
pub struct Args {
    /// Path to the facility snapshot (JSON)
    #[arg(env = "FACILITY_DATA", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Building to open
    #[arg(long, env = "FACILITY_BUILDING")]
    pub building: Option<String>,

    /// Floor to open (needs --building)
    #[arg(long, env = "FACILITY_FLOOR")]
    pub floor: Option<String>,

    /// Initial status filter: all, pending, in_progress, completed, no_request
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Initial search term over room numbers and names
    #[arg(long, default_value = "")]
    pub search: String,

    /// Export the floor to CSV and exit
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Export the floor to JSON and exit
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Validate the built-in floor plans against the building catalog and exit
    #[arg(long)]
    pub check_layouts: bool,

    /// Log level or filter directive, overridden by RUST_LOG
    #[arg(long, env = "FACILITY_LOG", default_value = "info")]
    pub log_level: String,

    /// Write logs to this file
    #[arg(long, env = "FACILITY_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// What the binary does once settings are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    CheckLayouts,
    Export {
        data: PathBuf,
        csv: Option<PathBuf>,
        json: Option<PathBuf>,
    },
    Interactive {
        data: PathBuf,
    },
}

impl Mode {
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Interactive { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    pub initial_state: ViewState,
    pub log_level: String,
    pub log_target: LogTarget,
}

impl Args {
    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        let initial_state = self.initial_state()?;
        let exporting = self.csv.is_some() || self.json.is_some();

        let mode = if self.check_layouts {
            Mode::CheckLayouts
        } else {
            let data = self.data.ok_or(ConfigError::MissingData)?;
            if exporting {
                if initial_state.location().is_none() {
                    return Err(ConfigError::ExportWithoutLocation);
                }
                Mode::Export {
                    data,
                    csv: self.csv,
                    json: self.json,
                }
            } else {
                Mode::Interactive { data }
            }
        };

        let log_target = match (self.log_file, mode.is_interactive()) {
            (Some(path), _) => LogTarget::File(path),
            (None, false) => LogTarget::Stderr,
            (None, true) => LogTarget::Silent,
        };

        Ok(Settings {
            mode,
            initial_state,
            log_level: self.log_level,
            log_target,
        })
    }

    fn initial_state(&self) -> Result<ViewState, ConfigError> {
        let mut state =
            ViewState::new().with_query(RoomQuery::new(self.status, self.search.clone()));
        match (&self.building, &self.floor) {
            (Some(building), floor) => {
                state = state.with_building(building.as_str());
                if let Some(floor) = floor {
                    state = state.with_floor(floor.as_str());
                }
            }
            (None, Some(floor)) => {
                return Err(ConfigError::FloorWithoutBuilding {
                    floor: floor.clone(),
                })
            }
            (None, None) => {}
        }
        Ok(state)
    }
}
