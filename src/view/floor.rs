use crate::backend::FacilityBackend;
use crate::engine::{
    apply_requests, compute_statistics, maintainable, reconcile_with_report, AmbiguousMatch,
    RequestScope, RoomQuery, Statistics,
};
use crate::error::{FacilityError, FetchStep};
use crate::layout::{Layout, LayoutRegistry};
use crate::model::{BackendRoom, Building, Floor, MaintenanceRequest, MergedRoom};
use crate::view::ViewState;
use serde::Serialize;

/// Everything the rendering layer needs for one floor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorView {
    /// Backend record of the selected building, once resolved.
    pub building: Option<Building>,
    /// Backend record of the selected floor, once resolved.
    pub floor: Option<Floor>,
    pub rooms: Vec<MergedRoom>,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Counts over every maintainable room on the floor.
    pub statistics: Statistics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ambiguities: Vec<AmbiguousMatch>,
    /// Why the live data could not be shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FloorView {
    /// Nothing selected yet.
    #[must_use]
    pub fn idle() -> Self {
        Self::from_layout(Layout::empty(), None)
    }

    /// The bare layout with every room unregistered and zeroed statistics.
    #[must_use]
    pub fn from_layout(layout: Layout, error: Option<String>) -> Self {
        Self {
            building: None,
            floor: None,
            rooms: layout
                .rooms
                .into_iter()
                .map(MergedRoom::unregistered)
                .collect(),
            canvas_width: layout.canvas_width,
            canvas_height: layout.canvas_height,
            statistics: Statistics::default(),
            ambiguities: Vec::new(),
            error,
        }
    }

    #[must_use]
    pub fn room(&self, layout_id: &str) -> Option<&MergedRoom> {
        self.rooms.iter().find(|r| r.id() == layout_id)
    }

    /// Resolved building and floor records, when the fetch chain got that far.
    #[must_use]
    pub fn location(&self) -> Option<(&Building, &Floor)> {
        Some((self.building.as_ref()?, self.floor.as_ref()?))
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.error.is_none() && self.location().is_some()
    }

    #[must_use]
    pub fn filtered(&self, query: &RoomQuery) -> Vec<&MergedRoom> {
        query.apply(&self.rooms)
    }

    /// Statistics over the rooms that pass `query`. Zero, like the floor
    /// statistics, while the view is a layout-only fallback.
    #[must_use]
    pub fn filtered_statistics(&self, query: &RoomQuery) -> Statistics {
        if self.error.is_some() {
            return Statistics::default();
        }
        compute_statistics(maintainable(self.filtered(query)))
    }
}

/// Backend records fetched for one floor. All four collaborator
/// responses are in hand before anything is merged.
#[derive(Debug)]
struct FloorData {
    building: Building,
    floor: Floor,
    rooms: Vec<BackendRoom>,
    requests: Vec<MaintenanceRequest>,
}

/// Builds the floor view for `state`.
///
/// Runs the fetch chain buildings, floor list, rooms, then requests. If any
/// step fails the result falls back to the static layout with zeroed
/// statistics and carries the failure in [`FloorView::error`].
pub fn load_floor_view<B>(backend: &B, registry: &LayoutRegistry, state: &ViewState) -> FloorView
where
    B: FacilityBackend + ?Sized,
{
    let Some((building_name, floor_label)) = state.location() else {
        return FloorView::idle();
    };

    let layout = registry.get_layout(building_name, floor_label);
    let mut resolved = Resolved::default();
    match fetch_floor(backend, building_name, floor_label, &mut resolved) {
        Ok(data) => merge(layout, data),
        Err(err) => {
            tracing::error!(
                building = building_name,
                floor = floor_label,
                error = %err,
                "failed to load floor data, showing layout only"
            );
            let mut view = FloorView::from_layout(layout, Some(err.to_string()));
            view.building = resolved.building;
            view.floor = resolved.floor;
            view
        }
    }
}

/// Records resolved before a later fetch failed.
#[derive(Debug, Default)]
struct Resolved {
    building: Option<Building>,
    floor: Option<Floor>,
}

fn fetch_floor<B>(
    backend: &B,
    building_name: &str,
    floor_label: &str,
    resolved: &mut Resolved,
) -> Result<FloorData, FacilityError>
where
    B: FacilityBackend + ?Sized,
{
    let buildings = backend
        .buildings()
        .map_err(FacilityError::fetch(FetchStep::Buildings))?;
    let building = buildings
        .iter()
        .find(|b| b.name == building_name)
        .cloned()
        .ok_or_else(|| FacilityError::BuildingNotFound {
            requested: building_name.to_string(),
            available: join(buildings.iter().map(|b| b.name.as_str())),
        })?;
    resolved.building = Some(building.clone());

    let floors = backend
        .floors(building.id)
        .map_err(FacilityError::fetch(FetchStep::Floors))?;
    let floor = floors
        .iter()
        .find(|f| f.label == floor_label)
        .cloned()
        .ok_or_else(|| FacilityError::FloorNotFound {
            requested: floor_label.to_string(),
            available: join(floors.iter().map(|f| f.label.as_str())),
        })?;
    resolved.floor = Some(floor.clone());

    let rooms = backend
        .rooms(floor.id)
        .map_err(FacilityError::fetch(FetchStep::Rooms))?;
    let requests = backend
        .maintenance_requests()
        .map_err(FacilityError::fetch(FetchStep::MaintenanceRequests))?;

    Ok(FloorData {
        building,
        floor,
        rooms,
        requests,
    })
}

fn join<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

fn merge(layout: Layout, data: FloorData) -> FloorView {
    let report = reconcile_with_report(&layout.rooms, &data.rooms);
    let scope = RequestScope {
        building_id: data.building.id,
        floor_id: data.floor.id,
    };
    let rooms = apply_requests(report.rooms, &data.requests, scope);
    let statistics = compute_statistics(maintainable(&rooms));

    tracing::debug!(
        building = %data.building.name,
        floor = %data.floor.label,
        rooms = rooms.len(),
        pending = statistics.pending,
        in_progress = statistics.in_progress,
        completed = statistics.completed,
        "floor view ready"
    );

    FloorView {
        building: Some(data.building),
        floor: Some(data.floor),
        rooms,
        canvas_width: layout.canvas_width,
        canvas_height: layout.canvas_height,
        statistics,
        ambiguities: report.ambiguities,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Snapshot, SnapshotBackend};
    use crate::engine::StatusFilter;
    use crate::model::{RequestStatus, RoomStatus};
    use pretty_assertions::assert_eq;

    fn request(id: u64, room: u64, floor: u64, status: RequestStatus) -> MaintenanceRequest {
        MaintenanceRequest {
            id,
            room_id: Some(room),
            building_id: Some(1),
            floor_id: Some(floor),
            status,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            description: String::new(),
            requester_name: None,
        }
    }

    fn backend() -> SnapshotBackend {
        SnapshotBackend::new(Snapshot {
            buildings: vec![Building {
                id: 1,
                name: "New Building".to_string(),
            }],
            floors: vec![
                Floor {
                    id: 10,
                    label: "Ground Floor".to_string(),
                    building_id: 1,
                },
                Floor {
                    id: 11,
                    label: "2nd Floor".to_string(),
                    building_id: 1,
                },
            ],
            rooms: vec![
                BackendRoom::new(100, "NB1", 10),
                BackendRoom::new(101, "NB2", 10),
                BackendRoom::new(102, "NB3", 10),
            ],
            requests: vec![
                request(1, 100, 10, RequestStatus::Pending),
                request(2, 101, 10, RequestStatus::Completed),
                request(3, 101, 10, RequestStatus::Approved),
                // Same room id on another floor is out of scope.
                request(4, 102, 11, RequestStatus::Pending),
            ],
        })
    }

    fn at(building: &str, floor: &str) -> ViewState {
        ViewState::new().with_building(building).with_floor(floor)
    }

    #[test]
    fn idle_without_location() {
        let view = load_floor_view(
            &backend(),
            LayoutRegistry::builtin(),
            &ViewState::new().with_building("New Building"),
        );
        assert_eq!(view, FloorView::idle());
    }

    #[test]
    fn merges_live_floor() {
        let view = load_floor_view(
            &backend(),
            LayoutRegistry::builtin(),
            &at("New Building", "Ground Floor"),
        );
        assert!(view.is_live());
        assert_eq!(view.room("NB1").map(MergedRoom::status), Some(RoomStatus::Pending));
        assert_eq!(view.room("NB2").map(MergedRoom::status), Some(RoomStatus::Completed));
        assert_eq!(view.room("NB2").map(MergedRoom::request_count), Some(1));
        assert_eq!(view.room("NB3").map(MergedRoom::status), Some(RoomStatus::NoRequest));
        assert_eq!(
            view.statistics,
            Statistics {
                total: 5,
                pending: 1,
                in_progress: 0,
                completed: 1,
            }
        );
    }

    #[test]
    fn unknown_building_falls_back_to_layout() {
        let view = load_floor_view(
            &backend(),
            LayoutRegistry::builtin(),
            &at("Annex Building", "Ground Floor"),
        );
        assert_eq!(view.statistics, Statistics::default());
        assert!(!view.rooms.is_empty());
        assert!(view.rooms.iter().all(|r| !r.is_registered()));
        assert_eq!(
            view.error.as_deref(),
            Some("building \"Annex Building\" not found in database. Available: New Building")
        );
    }

    #[test]
    fn unknown_floor_keeps_resolved_building() {
        let view = load_floor_view(
            &backend(),
            LayoutRegistry::builtin(),
            &at("New Building", "3rd Floor"),
        );
        assert_eq!(view.building.as_ref().map(|b| b.id), Some(1));
        assert_eq!(view.floor, None);
        assert_eq!(
            view.error.as_deref(),
            Some("floor \"3rd Floor\" not found in database. Available: Ground Floor, 2nd Floor")
        );
    }

    #[test]
    fn filtered_statistics_follow_the_query() {
        let view = load_floor_view(
            &backend(),
            LayoutRegistry::builtin(),
            &at("New Building", "Ground Floor"),
        );
        let query = RoomQuery::new(StatusFilter::Only(RoomStatus::Pending), "");
        let stats = view.filtered_statistics(&query);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.pending, 1);
    }

    #[test]
    fn fallback_filtered_statistics_are_zero() {
        let view = load_floor_view(
            &backend(),
            LayoutRegistry::builtin(),
            &at("Annex Building", "Ground Floor"),
        );
        assert!(view.error.is_some());
        assert!(!view.filtered(&RoomQuery::default()).is_empty());
        assert_eq!(view.filtered_statistics(&RoomQuery::default()), view.statistics);
        assert_eq!(
            view.filtered_statistics(&RoomQuery::new(StatusFilter::All, "ab")),
            Statistics::default()
        );
    }
}
