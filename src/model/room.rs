use super::RoomId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-maintainable layout elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialKind {
    Hallway,
    Stairs,
    Cr,
    Title,
    Scale,
}

impl SpecialKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hallway => "hallway",
            Self::Stairs => "stairs",
            Self::Cr => "cr",
            Self::Title => "title",
            Self::Scale => "scale",
        }
    }
}

/// One rectangle of a hand-authored floor plan, in canvas pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRoom {
    pub id: String,
    pub room_number: String,
    pub room_name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub special: Option<SpecialKind>,
}

impl LayoutRoom {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        room_number: impl Into<String>,
        room_name: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            room_number: room_number.into(),
            room_name: room_name.into(),
            x,
            y,
            width,
            height,
            special: None,
        }
    }

    #[must_use]
    pub fn with_special(mut self, kind: SpecialKind) -> Self {
        self.special = Some(kind);
        self
    }

    #[must_use]
    pub fn is_special(&self) -> bool {
        self.special.is_some()
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Display status of a room on the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Pending,
    InProgress,
    Completed,
    #[default]
    NoRequest,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::NoRequest,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::NoRequest => "No Request",
        }
    }

    /// Wire name, as used by filters and exports.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::NoRequest => "no_request",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A layout room enriched with backend identity and derived status.
///
/// Status and request count are only ever written by the status aggregator
/// in [`crate::engine`]; a room without a backend id always reports
/// [`RoomStatus::NoRequest`] with a count of zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRoom {
    #[serde(flatten)]
    pub layout: LayoutRoom,
    backend_id: Option<RoomId>,
    backend_name: Option<String>,
    status: RoomStatus,
    request_count: usize,
}

impl MergedRoom {
    /// A layout-only room: no backend record, no requests.
    #[must_use]
    pub fn unregistered(layout: LayoutRoom) -> Self {
        Self {
            layout,
            backend_id: None,
            backend_name: None,
            status: RoomStatus::NoRequest,
            request_count: 0,
        }
    }

    pub(crate) fn registered(layout: LayoutRoom, backend_id: RoomId, backend_name: String) -> Self {
        Self {
            layout,
            backend_id: Some(backend_id),
            backend_name: Some(backend_name),
            status: RoomStatus::NoRequest,
            request_count: 0,
        }
    }

    pub(crate) fn set_summary(&mut self, status: RoomStatus, request_count: usize) {
        if self.backend_id.is_some() {
            self.status = status;
            self.request_count = request_count;
        }
    }

    #[must_use]
    pub fn backend_id(&self) -> Option<RoomId> {
        self.backend_id
    }

    #[must_use]
    pub fn backend_name(&self) -> Option<&str> {
        self.backend_name.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> RoomStatus {
        self.status
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.request_count
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.layout.id
    }

    #[must_use]
    pub fn is_special(&self) -> bool {
        self.layout.is_special()
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.backend_id.is_some()
    }

    /// Backend name when the room is registered, layout name otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.backend_name
            .as_deref()
            .unwrap_or(&self.layout.room_name)
    }
}
