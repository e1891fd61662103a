use crate::error::UnknownStatusFilter;
use crate::model::{MergedRoom, RoomStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status filter of the room query. `All` keeps every room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(RoomStatus),
}

impl StatusFilter {
    /// Every filter in the order the UI cycles through them.
    pub const CYCLE: [StatusFilter; 5] = [
        Self::All,
        Self::Only(RoomStatus::Pending),
        Self::Only(RoomStatus::InProgress),
        Self::Only(RoomStatus::Completed),
        Self::Only(RoomStatus::NoRequest),
    ];

    #[must_use]
    pub fn matches(self, status: RoomStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::CYCLE.iter().position(|f| *f == self).unwrap_or(0);
        Self::CYCLE[(index + 1) % Self::CYCLE.len()]
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.key(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatusFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        if key == "all" {
            return Ok(Self::All);
        }
        RoomStatus::ALL
            .into_iter()
            .find(|status| status.key() == key)
            .map(Self::Only)
            .ok_or_else(|| UnknownStatusFilter(s.to_string()))
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.key().to_string()
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = UnknownStatusFilter;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Status filter plus free-text search over room number and name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomQuery {
    pub status: StatusFilter,
    pub search: String,
}

impl RoomQuery {
    #[must_use]
    pub fn new(status: StatusFilter, search: impl Into<String>) -> Self {
        Self {
            status,
            search: search.into(),
        }
    }

    /// Whether the query hides anything at all.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status != StatusFilter::All || !self.search.trim().is_empty()
    }

    #[must_use]
    pub fn apply<'a>(&self, rooms: &'a [MergedRoom]) -> Vec<&'a MergedRoom> {
        filter_rooms(rooms, self.status, &self.search)
    }
}

/// Rooms whose status passes `status` and whose number or name contains
/// the trimmed `search` term (case-insensitive). Order is preserved;
/// special rooms are not excluded.
#[must_use]
pub fn filter_rooms<'a>(
    rooms: &'a [MergedRoom],
    status: StatusFilter,
    search: &str,
) -> Vec<&'a MergedRoom> {
    let term = search.trim().to_lowercase();
    rooms
        .iter()
        .filter(|room| status.matches(room.status()))
        .filter(|room| term.is_empty() || matches_term(room, &term))
        .collect()
}

fn matches_term(room: &MergedRoom, term: &str) -> bool {
    room.layout.room_number.to_lowercase().contains(term)
        || room.layout.room_name.to_lowercase().contains(term)
}

/// Rooms that belong on a status board: everything except hallways,
/// stairs, restrooms flagged as special and labels.
pub fn maintainable<'a, I>(rooms: I) -> impl Iterator<Item = &'a MergedRoom>
where
    I: IntoIterator<Item = &'a MergedRoom>,
{
    rooms.into_iter().filter(|room| !room.is_special())
}
