use crate::error::FacilityError;
use crate::model::{Building, Floor, MergedRoom, NewMaintenanceRequest};

/// Builds the `CreateMaintenanceRequest` payload for `room`.
///
/// Fails locally, without touching any collaborator, when the description
/// is blank or the room has no backend record.
pub fn prepare_request(
    room: &MergedRoom,
    building: &Building,
    floor: &Floor,
    description: &str,
    requester_name: Option<&str>,
) -> Result<NewMaintenanceRequest, FacilityError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(FacilityError::EmptyDescription);
    }

    let room_id = room
        .backend_id()
        .ok_or_else(|| FacilityError::UnregisteredRoom {
            room: room.layout.room_number.clone(),
        })?;

    Ok(NewMaintenanceRequest {
        room_id,
        building_id: building.id,
        floor_id: floor.id,
        description: description.to_string(),
        requester_name: requester_name.map(ToString::to_string),
    })
}
