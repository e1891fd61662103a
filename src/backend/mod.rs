//! Collaborator contracts the engine consumes, and a file-backed
//! implementation.

pub mod snapshot;

pub use crate::error::BackendError;
pub use snapshot::{Snapshot, SnapshotBackend};

use crate::model::{
    BackendRoom, Building, BuildingId, Floor, FloorId, MaintenanceRequest, NewMaintenanceRequest,
    RoomId,
};

/// The data sources behind the floor view. Transport, authentication and
/// pagination are the implementor's business.
pub trait FacilityBackend {
    fn buildings(&self) -> Result<Vec<Building>, BackendError>;

    fn floors(&self, building_id: BuildingId) -> Result<Vec<Floor>, BackendError>;

    fn rooms(&self, floor_id: FloorId) -> Result<Vec<BackendRoom>, BackendError>;

    /// Every request in the system; callers narrow it down themselves.
    fn maintenance_requests(&self) -> Result<Vec<MaintenanceRequest>, BackendError>;

    fn room_requests(&self, room_id: RoomId) -> Result<Vec<MaintenanceRequest>, BackendError>;

    fn create_maintenance_request(
        &mut self,
        request: &NewMaintenanceRequest,
    ) -> Result<MaintenanceRequest, BackendError>;
}

impl<B: FacilityBackend + ?Sized> FacilityBackend for Box<B> {
    fn buildings(&self) -> Result<Vec<Building>, BackendError> {
        (**self).buildings()
    }

    fn floors(&self, building_id: BuildingId) -> Result<Vec<Floor>, BackendError> {
        (**self).floors(building_id)
    }

    fn rooms(&self, floor_id: FloorId) -> Result<Vec<BackendRoom>, BackendError> {
        (**self).rooms(floor_id)
    }

    fn maintenance_requests(&self) -> Result<Vec<MaintenanceRequest>, BackendError> {
        (**self).maintenance_requests()
    }

    fn room_requests(&self, room_id: RoomId) -> Result<Vec<MaintenanceRequest>, BackendError> {
        (**self).room_requests(room_id)
    }

    fn create_maintenance_request(
        &mut self,
        request: &NewMaintenanceRequest,
    ) -> Result<MaintenanceRequest, BackendError> {
        (**self).create_maintenance_request(request)
    }
}
