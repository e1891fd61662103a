use crate::engine::{RoomQuery, StatusFilter};

/// What the user is looking at. Never mutated in place: every transition
/// returns a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    building: Option<String>,
    floor: Option<String>,
    query: RoomQuery,
    selected_room: Option<String>,
    hovered_room: Option<String>,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn building(&self) -> Option<&str> {
        self.building.as_deref()
    }

    #[must_use]
    pub fn floor(&self) -> Option<&str> {
        self.floor.as_deref()
    }

    /// Building and floor, once both are chosen.
    #[must_use]
    pub fn location(&self) -> Option<(&str, &str)> {
        Some((self.building()?, self.floor()?))
    }

    #[must_use]
    pub fn query(&self) -> &RoomQuery {
        &self.query
    }

    /// Layout id of the selected room.
    #[must_use]
    pub fn selected_room(&self) -> Option<&str> {
        self.selected_room.as_deref()
    }

    #[must_use]
    pub fn hovered_room(&self) -> Option<&str> {
        self.hovered_room.as_deref()
    }

    /// Switches building. The floor and any room selection belong to the
    /// old building and are dropped.
    #[must_use]
    pub fn with_building(&self, building: impl Into<String>) -> Self {
        Self {
            building: Some(building.into()),
            floor: None,
            selected_room: None,
            hovered_room: None,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_floor(&self, floor: impl Into<String>) -> Self {
        Self {
            floor: Some(floor.into()),
            selected_room: None,
            hovered_room: None,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_query(&self, query: RoomQuery) -> Self {
        Self {
            query,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_status_filter(&self, status: StatusFilter) -> Self {
        self.with_query(RoomQuery::new(status, self.query.search.clone()))
    }

    #[must_use]
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        self.with_query(RoomQuery::new(self.query.status, search))
    }

    #[must_use]
    pub fn with_selected_room(&self, room: Option<String>) -> Self {
        Self {
            selected_room: room,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_hovered_room(&self, room: Option<String>) -> Self {
        Self {
            hovered_room: room,
            ..self.clone()
        }
    }

    /// Whether moving to `other` requires fetching the floor again.
    #[must_use]
    pub fn location_changed(&self, other: &Self) -> bool {
        self.building != other.building || self.floor != other.floor
    }
}
