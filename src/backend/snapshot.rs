use super::FacilityBackend;
use crate::error::BackendError;
use crate::model::{
    BackendRoom, Building, BuildingId, Floor, FloorId, MaintenanceRequest, NewMaintenanceRequest,
    RequestStatus, RoomId,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Everything the backend knows, as stored in a snapshot file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub buildings: Vec<Building>,
    #[serde(default)]
    pub floors: Vec<Floor>,
    #[serde(default)]
    pub rooms: Vec<BackendRoom>,
    #[serde(default)]
    pub requests: Vec<MaintenanceRequest>,
}

impl Snapshot {
    pub fn from_json(content: &str) -> Result<Self, BackendError> {
        Ok(serde_json::from_str(content)?)
    }
}

/// [`FacilityBackend`] over a JSON snapshot held in memory.
#[derive(Debug, Clone)]
pub struct SnapshotBackend {
    snapshot: Snapshot,
    path: Option<PathBuf>,
    dirty: bool,
}

impl SnapshotBackend {
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            path: None,
            dirty: false,
        }
    }

    /// Loads a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::FileRead`] if the file cannot be read.
    /// Returns [`BackendError::Snapshot`] if the JSON is malformed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BackendError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BackendError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let snapshot = Snapshot::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            buildings = snapshot.buildings.len(),
            floors = snapshot.floors.len(),
            rooms = snapshot.rooms.len(),
            requests = snapshot.requests.len(),
            "loaded snapshot"
        );

        Ok(Self {
            snapshot,
            path: Some(path.to_path_buf()),
            dirty: false,
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether requests were created since the snapshot was loaded.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes the snapshot back to the file it was opened from. A backend
    /// built in memory has nowhere to write and does nothing.
    pub fn save(&self) -> Result<(), BackendError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.snapshot)?;
        std::fs::write(path, json).map_err(|source| BackendError::FileWrite {
            path: path.clone(),
            source,
        })
    }

    fn next_request_id(&self) -> u64 {
        self.snapshot
            .requests
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(1, |id| id + 1)
    }
}

impl FacilityBackend for SnapshotBackend {
    fn buildings(&self) -> Result<Vec<Building>, BackendError> {
        Ok(self.snapshot.buildings.clone())
    }

    fn floors(&self, building_id: BuildingId) -> Result<Vec<Floor>, BackendError> {
        Ok(self
            .snapshot
            .floors
            .iter()
            .filter(|f| f.building_id == building_id)
            .cloned()
            .collect())
    }

    fn rooms(&self, floor_id: FloorId) -> Result<Vec<BackendRoom>, BackendError> {
        Ok(self
            .snapshot
            .rooms
            .iter()
            .filter(|r| r.floor_id == floor_id)
            .cloned()
            .collect())
    }

    fn maintenance_requests(&self) -> Result<Vec<MaintenanceRequest>, BackendError> {
        Ok(self.snapshot.requests.clone())
    }

    fn room_requests(&self, room_id: RoomId) -> Result<Vec<MaintenanceRequest>, BackendError> {
        Ok(self
            .snapshot
            .requests
            .iter()
            .filter(|r| r.room_id == Some(room_id))
            .cloned()
            .collect())
    }

    fn create_maintenance_request(
        &mut self,
        request: &NewMaintenanceRequest,
    ) -> Result<MaintenanceRequest, BackendError> {
        if !self.snapshot.rooms.iter().any(|r| r.id == request.room_id) {
            return Err(BackendError::Rejected {
                message: format!("room {} does not exist", request.room_id),
            });
        }

        let created_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|e| BackendError::Rejected {
                message: e.to_string(),
            })?;

        let created = MaintenanceRequest {
            id: self.next_request_id(),
            room_id: Some(request.room_id),
            building_id: Some(request.building_id),
            floor_id: Some(request.floor_id),
            status: RequestStatus::Pending,
            created_at,
            description: request.description.clone(),
            requester_name: request.requester_name.clone(),
        };
        self.snapshot.requests.push(created.clone());
        self.dirty = true;
        tracing::info!(
            request_id = created.id,
            room_id = request.room_id,
            "created maintenance request"
        );
        Ok(created)
    }
}
