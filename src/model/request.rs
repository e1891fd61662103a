use super::{BuildingId, FloorId, RequestId, RoomId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a maintenance ticket as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    InProgress,
    Completed,
}

impl RequestStatus {
    /// Approved and rejected tickets are administrative states that never
    /// show up on the floor plan.
    #[must_use]
    pub fn is_visible_on_plan(self) -> bool {
        !matches!(self, Self::Approved | Self::Rejected)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: RequestId,
    // Location keys are nullable in the backend (rows survive deletion of
    // the room/floor/building they pointed at).
    pub room_id: Option<RoomId>,
    pub building_id: Option<BuildingId>,
    pub floor_id: Option<FloorId>,
    pub status: RequestStatus,
    pub created_at: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requester_name: Option<String>,
}

/// Payload for `CreateMaintenanceRequest`. Only ever built for a room that
/// has a backend record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMaintenanceRequest {
    pub room_id: RoomId,
    pub building_id: BuildingId,
    pub floor_id: FloorId,
    pub description: String,
    pub requester_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn administrative_states_stay_off_the_plan() {
        let visible: Vec<RequestStatus> = [
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Rejected,
            RequestStatus::InProgress,
            RequestStatus::Completed,
        ]
        .into_iter()
        .filter(|s| s.is_visible_on_plan())
        .collect();
        assert_eq!(
            visible,
            vec![
                RequestStatus::Pending,
                RequestStatus::InProgress,
                RequestStatus::Completed
            ]
        );
    }
}
