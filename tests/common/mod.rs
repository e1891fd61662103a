#![allow(dead_code)]

use facility_inspector::backend::{BackendError, FacilityBackend, Snapshot, SnapshotBackend};
use facility_inspector::error::FetchStep;
use facility_inspector::model::{
    BackendRoom, Building, BuildingId, Floor, FloorId, MaintenanceRequest, NewMaintenanceRequest,
    RequestStatus, RoomId,
};
use std::cell::Cell;

/// Snapshot backend that counts calls and can be told to fail one step.
pub struct CountingBackend {
    inner: SnapshotBackend,
    pub fail_at: Option<FetchStep>,
    pub buildings_calls: Cell<usize>,
    pub floors_calls: Cell<usize>,
    pub rooms_calls: Cell<usize>,
    pub requests_calls: Cell<usize>,
    pub room_requests_calls: Cell<usize>,
    pub create_calls: usize,
}

impl CountingBackend {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            inner: SnapshotBackend::new(snapshot),
            fail_at: None,
            buildings_calls: Cell::new(0),
            floors_calls: Cell::new(0),
            rooms_calls: Cell::new(0),
            requests_calls: Cell::new(0),
            room_requests_calls: Cell::new(0),
            create_calls: 0,
        }
    }

    pub fn failing_at(mut self, step: FetchStep) -> Self {
        self.fail_at = Some(step);
        self
    }

    fn check(&self, step: FetchStep, counter: &Cell<usize>) -> Result<(), BackendError> {
        counter.set(counter.get() + 1);
        if self.fail_at == Some(step) {
            return Err(BackendError::Unavailable {
                message: format!("{step} offline"),
            });
        }
        Ok(())
    }
}

impl FacilityBackend for CountingBackend {
    fn buildings(&self) -> Result<Vec<Building>, BackendError> {
        self.check(FetchStep::Buildings, &self.buildings_calls)?;
        self.inner.buildings()
    }

    fn floors(&self, building_id: BuildingId) -> Result<Vec<Floor>, BackendError> {
        self.check(FetchStep::Floors, &self.floors_calls)?;
        self.inner.floors(building_id)
    }

    fn rooms(&self, floor_id: FloorId) -> Result<Vec<BackendRoom>, BackendError> {
        self.check(FetchStep::Rooms, &self.rooms_calls)?;
        self.inner.rooms(floor_id)
    }

    fn maintenance_requests(&self) -> Result<Vec<MaintenanceRequest>, BackendError> {
        self.check(FetchStep::MaintenanceRequests, &self.requests_calls)?;
        self.inner.maintenance_requests()
    }

    fn room_requests(&self, room_id: RoomId) -> Result<Vec<MaintenanceRequest>, BackendError> {
        self.check(FetchStep::RoomRequests, &self.room_requests_calls)?;
        self.inner.room_requests(room_id)
    }

    fn create_maintenance_request(
        &mut self,
        request: &NewMaintenanceRequest,
    ) -> Result<MaintenanceRequest, BackendError> {
        self.create_calls += 1;
        if self.fail_at == Some(FetchStep::CreateRequest) {
            return Err(BackendError::Rejected {
                message: "read-only".to_string(),
            });
        }
        self.inner.create_maintenance_request(request)
    }
}

pub fn request(id: u64, room: RoomId, status: RequestStatus) -> MaintenanceRequest {
    MaintenanceRequest {
        id,
        room_id: Some(room),
        building_id: Some(1),
        floor_id: Some(10),
        status,
        created_at: "2025-02-01T09:30:00Z".to_string(),
        description: format!("ticket {id}"),
        requester_name: None,
    }
}

/// New Building ground floor with NB1 and NB2 registered; NB3 is not.
pub fn new_building_snapshot() -> Snapshot {
    Snapshot {
        buildings: vec![
            Building {
                id: 1,
                name: "New Building".to_string(),
            },
            Building {
                id: 2,
                name: "Annex Building".to_string(),
            },
        ],
        floors: vec![Floor {
            id: 10,
            label: "Ground Floor".to_string(),
            building_id: 1,
        }],
        rooms: vec![
            BackendRoom::new(100, "NB1", 10),
            BackendRoom::new(101, "nb2", 10),
        ],
        requests: vec![
            request(1, 100, RequestStatus::InProgress),
            request(2, 100, RequestStatus::Completed),
            request(3, 101, RequestStatus::Rejected),
        ],
    }
}
