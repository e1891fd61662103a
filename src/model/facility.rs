use serde::{Deserialize, Serialize};

pub type BuildingId = u64;
pub type FloorId = u64;
pub type RoomId = u64;
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    pub label: String,
    pub building_id: BuildingId,
}

/// A room as recorded by the backend. Only rooms with a record can receive
/// maintenance requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendRoom {
    pub id: RoomId,
    pub name: String,
    pub floor_id: FloorId,
}

impl BackendRoom {
    #[must_use]
    pub fn new(id: RoomId, name: impl Into<String>, floor_id: FloorId) -> Self {
        Self {
            id,
            name: name.into(),
            floor_id,
        }
    }
}
