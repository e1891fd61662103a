pub mod facility;
pub mod request;
pub mod room;

pub use facility::{BackendRoom, Building, BuildingId, Floor, FloorId, RequestId, RoomId};
pub use request::{MaintenanceRequest, NewMaintenanceRequest, RequestStatus};
pub use room::{LayoutRoom, MergedRoom, RoomStatus, SpecialKind};
