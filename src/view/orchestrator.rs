use super::floor::{load_floor_view, FloorView};
use super::selection::{DetailTicket, RoomDetail, RoomDetailTracker};
use super::state::ViewState;
use crate::backend::{BackendError, FacilityBackend};
use crate::engine::{prepare_request, RoomQuery};
use crate::error::{FacilityError, FetchStep};
use crate::layout::LayoutRegistry;
use crate::model::{MaintenanceRequest, MergedRoom};

/// Single writer of view state. Owns the backend, the current
/// [`ViewState`] and the [`FloorView`] derived from it.
#[derive(Debug)]
pub struct Orchestrator<B> {
    backend: B,
    registry: LayoutRegistry,
    state: ViewState,
    view: FloorView,
    detail: RoomDetailTracker,
}

impl<B: FacilityBackend> Orchestrator<B> {
    #[must_use]
    pub fn new(backend: B, registry: LayoutRegistry) -> Self {
        Self {
            backend,
            registry,
            state: ViewState::new(),
            view: FloorView::idle(),
            detail: RoomDetailTracker::new(),
        }
    }

    /// Orchestrator over the built-in floor plans.
    #[must_use]
    pub fn with_builtin_layouts(backend: B) -> Self {
        Self::new(backend, LayoutRegistry::builtin().clone())
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> &FloorView {
        &self.view
    }

    #[must_use]
    pub fn registry(&self) -> &LayoutRegistry {
        &self.registry
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Rooms passing the current query.
    #[must_use]
    pub fn visible_rooms(&self) -> Vec<&MergedRoom> {
        self.view.filtered(self.state.query())
    }

    #[must_use]
    pub fn selected_room(&self) -> Option<&MergedRoom> {
        self.view.room(self.state.selected_room()?)
    }

    #[must_use]
    pub fn room_detail(&self) -> Option<&RoomDetail> {
        self.detail.detail()
    }

    #[must_use]
    pub fn room_detail_error(&self) -> Option<&str> {
        self.detail.error()
    }

    #[must_use]
    pub fn is_detail_loading(&self) -> bool {
        self.detail.is_loading()
    }

    /// Replaces the view state. The floor is fetched again only when the
    /// building or floor differs from the current one.
    ///
    /// A changed selection goes through [`open_room`](Self::open_room), so
    /// special and unknown rooms are dropped and the detail always belongs
    /// to the selected room.
    pub fn apply(&mut self, next: ViewState) {
        let reload = self.state.location_changed(&next);
        let reselect = reload || next.selected_room() != self.state.selected_room();
        let selection = next.selected_room().map(ToString::to_string);

        self.state = next;
        if reload {
            self.reload();
        }
        if reselect {
            self.clear_selection();
            if let Some(layout_id) = selection {
                self.open_room(&layout_id);
            }
        }
    }

    pub fn select_building(&mut self, building: &str) {
        self.apply(self.state.with_building(building));
    }

    pub fn select_floor(&mut self, floor: &str) {
        self.apply(self.state.with_floor(floor));
    }

    pub fn set_query(&mut self, query: RoomQuery) {
        self.apply(self.state.with_query(query));
    }

    /// Fetches the current building and floor again.
    pub fn reload(&mut self) {
        self.view = load_floor_view(&self.backend, &self.registry, &self.state);
    }

    /// Selects a room by layout id.
    ///
    /// Special rooms and unknown ids are ignored. An unregistered room is
    /// selected without a fetch. A registered room yields the ticket its
    /// request list must be delivered with.
    pub fn select_room(&mut self, layout_id: &str) -> Option<DetailTicket> {
        let room = self.view.room(layout_id)?;
        if room.is_special() {
            return None;
        }
        let backend_id = room.backend_id();

        self.state = self.state.with_selected_room(Some(layout_id.to_string()));
        match backend_id {
            Some(room_id) => Some(self.detail.issue(layout_id, room_id)),
            None => {
                self.detail.clear();
                None
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.state = self.state.with_selected_room(None);
        self.detail.clear();
    }

    /// Performs the room-detail fetch for `ticket`.
    pub fn fetch_room_detail(
        &self,
        ticket: DetailTicket,
    ) -> Result<Vec<MaintenanceRequest>, BackendError> {
        self.backend.room_requests(ticket.room_id())
    }

    /// Delivers a room-detail result. Stale tickets are dropped.
    pub fn accept_room_detail(
        &mut self,
        ticket: DetailTicket,
        result: Result<Vec<MaintenanceRequest>, BackendError>,
    ) -> bool {
        self.detail.accept(ticket, result)
    }

    /// [`select_room`](Self::select_room) followed by the fetch, for callers
    /// that do not defer the detail request.
    pub fn open_room(&mut self, layout_id: &str) {
        if let Some(ticket) = self.select_room(layout_id) {
            let result = self.fetch_room_detail(ticket);
            self.accept_room_detail(ticket, result);
        }
    }

    /// Files a maintenance request against the selected room.
    ///
    /// Nothing reaches the backend unless a room is selected, the
    /// description is not blank and the room is registered. On success the
    /// floor and the room detail are fetched again.
    pub fn submit_request(
        &mut self,
        description: &str,
        requester_name: Option<&str>,
    ) -> Result<MaintenanceRequest, FacilityError> {
        let room = self.selected_room().ok_or(FacilityError::NoRoomSelected)?;
        let payload = match self.view.location() {
            Some((building, floor)) => {
                prepare_request(room, building, floor, description, requester_name)?
            }
            None if room.is_registered() => return Err(FacilityError::NoActiveFloor),
            None => {
                return Err(FacilityError::UnregisteredRoom {
                    room: room.layout.room_number.clone(),
                })
            }
        };
        let layout_id = room.id().to_string();

        let created = self
            .backend
            .create_maintenance_request(&payload)
            .map_err(FacilityError::fetch(FetchStep::CreateRequest))?;
        tracing::info!(
            request_id = created.id,
            room = %layout_id,
            "submitted maintenance request"
        );

        self.reload();
        self.open_room(&layout_id);
        Ok(created)
    }
}
