use crate::engine::RoomQuery;
use crate::error::ExportError;
use crate::model::MergedRoom;
use crate::view::FloorView;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 7] = [
    "Room ID",
    "Room Number",
    "Room Name",
    "Backend ID",
    "Status",
    "Requests",
    "Special",
];

/// Writes the rooms of `view` that pass `query` to a CSV file.
pub fn export_csv<P: AsRef<Path>>(
    view: &FloorView,
    query: &RoomQuery,
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;
    write_csv(&view.filtered(query), file)
}

pub fn write_csv<W: Write>(rooms: &[&MergedRoom], out: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADER)?;

    for room in rooms {
        let backend_id = room.backend_id().map(|id| id.to_string()).unwrap_or_default();
        let special = room
            .layout
            .special
            .map(|kind| kind.label())
            .unwrap_or_default();
        writer.write_record([
            room.id(),
            room.layout.room_number.as_str(),
            room.display_name(),
            backend_id.as_str(),
            room.status().label(),
            room.request_count().to_string().as_str(),
            special,
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reconcile;
    use crate::model::{BackendRoom, LayoutRoom, SpecialKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_one_row_per_room() {
        let rooms = reconcile(
            &[
                LayoutRoom::new("NB1", "NB1", "Room NB1", 0.0, 0.0, 1.0, 1.0),
                LayoutRoom::new("NB2", "NB2", "Room NB2", 0.0, 0.0, 1.0, 1.0),
                LayoutRoom::new("HALLWAY_TOP", "HALL", "Hallway", 0.0, 0.0, 1.0, 1.0)
                    .with_special(SpecialKind::Hallway),
            ],
            &[BackendRoom::new(7, "NB1", 1)],
        );
        let refs: Vec<&MergedRoom> = rooms.iter().collect();

        let mut out = Vec::new();
        write_csv(&refs, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Room ID,Room Number,Room Name,Backend ID,Status,Requests,Special",
                "NB1,NB1,NB1,7,No Request,0,",
                "NB2,NB2,Room NB2,,No Request,0,",
                "HALLWAY_TOP,HALL,Hallway,,No Request,0,hallway",
            ]
        );
    }
}
