use crate::error::BackendError;
use crate::model::{MaintenanceRequest, RequestStatus, RoomId};

/// Proof of which selection a room-detail fetch was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket {
    generation: u64,
    room_id: RoomId,
}

impl DetailTicket {
    #[must_use]
    pub fn room_id(self) -> RoomId {
        self.room_id
    }

    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Tickets of the selected room as shown in the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDetail {
    pub layout_id: String,
    pub room_id: RoomId,
    /// Every ticket except approved ones, in backend order.
    pub requests: Vec<MaintenanceRequest>,
}

/// Tracks the latest room-detail fetch so that a late answer for an
/// earlier selection cannot overwrite the current one.
#[derive(Debug, Default)]
pub struct RoomDetailTracker {
    generation: u64,
    current: Option<(DetailTicket, String)>,
    detail: Option<RoomDetail>,
    error: Option<String>,
}

impl RoomDetailTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch for `room_id`. Any ticket issued earlier becomes stale.
    pub fn issue(&mut self, layout_id: &str, room_id: RoomId) -> DetailTicket {
        self.generation += 1;
        let ticket = DetailTicket {
            generation: self.generation,
            room_id,
        };
        self.current = Some((ticket, layout_id.to_string()));
        self.detail = None;
        self.error = None;
        ticket
    }

    /// Forgets the selection. Outstanding tickets become stale.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.current = None;
        self.detail = None;
        self.error = None;
    }

    #[must_use]
    pub fn is_current(&self, ticket: DetailTicket) -> bool {
        self.current.as_ref().is_some_and(|(t, _)| *t == ticket)
    }

    /// Applies the outcome of a fetch. Returns `false` and leaves the panel
    /// alone when `ticket` is no longer current.
    pub fn accept(
        &mut self,
        ticket: DetailTicket,
        result: Result<Vec<MaintenanceRequest>, BackendError>,
    ) -> bool {
        let Some((current, layout_id)) = &self.current else {
            tracing::warn!(
                generation = ticket.generation,
                room_id = ticket.room_id,
                "dropping room detail, nothing selected"
            );
            return false;
        };
        if *current != ticket {
            tracing::warn!(
                generation = ticket.generation,
                current = current.generation,
                room_id = ticket.room_id,
                "dropping stale room detail"
            );
            return false;
        }

        match result {
            Ok(requests) => {
                self.detail = Some(RoomDetail {
                    layout_id: layout_id.clone(),
                    room_id: ticket.room_id,
                    requests: requests
                        .into_iter()
                        .filter(|r| r.status != RequestStatus::Approved)
                        .collect(),
                });
                self.error = None;
            }
            Err(err) => {
                tracing::error!(room_id = ticket.room_id, error = %err, "failed to fetch room requests");
                self.detail = None;
                self.error = Some(err.to_string());
            }
        }
        true
    }

    #[must_use]
    pub fn detail(&self) -> Option<&RoomDetail> {
        self.detail.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a fetch has been issued and not yet answered.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.current.is_some() && self.detail.is_none() && self.error.is_none()
    }
}
