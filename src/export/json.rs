use crate::engine::{RoomQuery, Statistics};
use crate::error::ExportError;
use crate::model::MergedRoom;
use crate::view::FloorView;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Serialized form of one floor as seen through a query.
#[derive(Debug, Serialize)]
pub struct FloorReport<'a> {
    pub building: Option<&'a str>,
    pub floor: Option<&'a str>,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub query: &'a RoomQuery,
    /// Counts over the whole floor.
    pub statistics: Statistics,
    /// Counts over the rooms listed below.
    pub filtered_statistics: Statistics,
    pub rooms: Vec<&'a MergedRoom>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

impl<'a> FloorReport<'a> {
    #[must_use]
    pub fn new(view: &'a FloorView, query: &'a RoomQuery) -> Self {
        Self {
            building: view.building.as_ref().map(|b| b.name.as_str()),
            floor: view.floor.as_ref().map(|f| f.label.as_str()),
            canvas_width: view.canvas_width,
            canvas_height: view.canvas_height,
            query,
            statistics: view.statistics,
            filtered_statistics: view.filtered_statistics(query),
            rooms: view.filtered(query),
            error: view.error.as_deref(),
        }
    }
}

pub fn export_json<P: AsRef<Path>>(
    view: &FloorView,
    query: &RoomQuery,
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(&FloorReport::new(view, query))?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}
