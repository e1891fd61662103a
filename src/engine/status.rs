use crate::model::{BuildingId, FloorId, MaintenanceRequest, MergedRoom, RequestStatus, RoomId, RoomStatus};
use serde::Serialize;
use std::collections::HashMap;

/// Display status of one room plus the number of tickets behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusSummary {
    pub status: RoomStatus,
    pub count: usize,
}

/// Collapses a room's tickets into one display status.
///
/// Approved and rejected tickets are ignored entirely. Of the rest, any
/// pending ticket wins, then any in-progress ticket; a room shows completed
/// only when every remaining ticket is completed. `count` is the number of
/// tickets that were considered, whichever rule decided the status.
pub fn compute_status<'a, I>(requests: I) -> StatusSummary
where
    I: IntoIterator<Item = &'a MaintenanceRequest>,
{
    summarize(requests.into_iter().map(|r| r.status))
}

/// [`compute_status`] over bare statuses.
pub fn summarize<I>(statuses: I) -> StatusSummary
where
    I: IntoIterator<Item = RequestStatus>,
{
    let mut count = 0;
    let mut pending = false;
    let mut in_progress = false;
    let mut all_completed = true;

    for status in statuses.into_iter().filter(|s| s.is_visible_on_plan()) {
        match status {
            RequestStatus::Pending => pending = true,
            RequestStatus::InProgress => in_progress = true,
            RequestStatus::Approved | RequestStatus::Rejected | RequestStatus::Completed => {}
        }
        count += 1;
        all_completed &= status == RequestStatus::Completed;
    }

    let status = if pending {
        RoomStatus::Pending
    } else if in_progress {
        RoomStatus::InProgress
    } else if count > 0 && all_completed {
        RoomStatus::Completed
    } else {
        RoomStatus::NoRequest
    };

    StatusSummary { status, count }
}

/// Building and floor the request list is narrowed to before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestScope {
    pub building_id: BuildingId,
    pub floor_id: FloorId,
}

impl RequestScope {
    #[must_use]
    pub fn contains(&self, request: &MaintenanceRequest) -> bool {
        request.building_id == Some(self.building_id) && request.floor_id == Some(self.floor_id)
    }
}

/// Derives status and request count of every registered room from the
/// unfiltered request list.
#[must_use]
pub fn apply_requests(
    mut rooms: Vec<MergedRoom>,
    requests: &[MaintenanceRequest],
    scope: RequestScope,
) -> Vec<MergedRoom> {
    let mut by_room: HashMap<RoomId, Vec<&MaintenanceRequest>> = HashMap::new();
    for request in requests.iter().filter(|r| scope.contains(r)) {
        if let Some(room_id) = request.room_id {
            by_room.entry(room_id).or_default().push(request);
        }
    }

    for room in &mut rooms {
        let Some(backend_id) = room.backend_id() else {
            continue;
        };
        let summary = by_room
            .get(&backend_id)
            .map(|tickets| compute_status(tickets.iter().copied()))
            .unwrap_or_default();
        room.set_summary(summary.status, summary.count);
    }

    rooms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BackendRoom, LayoutRoom};
    use crate::engine::reconcile;
    use pretty_assertions::assert_eq;

    fn request(id: u64, room: RoomId, status: RequestStatus) -> MaintenanceRequest {
        MaintenanceRequest {
            id,
            room_id: Some(room),
            building_id: Some(1),
            floor_id: Some(2),
            status,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            description: String::new(),
            requester_name: None,
        }
    }

    fn of(statuses: &[RequestStatus]) -> StatusSummary {
        summarize(statuses.iter().copied())
    }

    #[test]
    fn pending_dominates() {
        assert_eq!(
            of(&[RequestStatus::Pending, RequestStatus::Completed]),
            StatusSummary {
                status: RoomStatus::Pending,
                count: 2
            }
        );
        assert_eq!(
            of(&[RequestStatus::InProgress, RequestStatus::Pending]).status,
            RoomStatus::Pending
        );
    }

    #[test]
    fn in_progress_beats_completed() {
        assert_eq!(
            of(&[RequestStatus::Completed, RequestStatus::InProgress]),
            StatusSummary {
                status: RoomStatus::InProgress,
                count: 2
            }
        );
    }

    #[test]
    fn all_completed() {
        assert_eq!(
            of(&[RequestStatus::Completed, RequestStatus::Completed]),
            StatusSummary {
                status: RoomStatus::Completed,
                count: 2
            }
        );
    }

    #[test]
    fn empty_is_no_request() {
        assert_eq!(of(&[]), StatusSummary::default());
        assert_eq!(of(&[]).status, RoomStatus::NoRequest);
    }

    #[test]
    fn approved_and_rejected_are_invisible() {
        assert_eq!(of(&[RequestStatus::Approved]), StatusSummary::default());
        assert_eq!(
            of(&[
                RequestStatus::Rejected,
                RequestStatus::Completed,
                RequestStatus::Approved
            ]),
            StatusSummary {
                status: RoomStatus::Completed,
                count: 1
            }
        );
    }

    #[test]
    fn compute_status_reads_request_status() {
        let requests = [
            request(1, 7, RequestStatus::Pending),
            request(2, 7, RequestStatus::Completed),
        ];
        assert_eq!(
            compute_status(&requests),
            StatusSummary {
                status: RoomStatus::Pending,
                count: 2
            }
        );
    }

    #[test]
    fn apply_requests_scopes_by_building_floor_and_room() {
        let layout = [
            LayoutRoom::new("NB1", "NB1", "Room NB1", 0.0, 0.0, 10.0, 10.0),
            LayoutRoom::new("NB2", "NB2", "Room NB2", 20.0, 0.0, 10.0, 10.0),
            LayoutRoom::new("NB3", "NB3", "Room NB3", 40.0, 0.0, 10.0, 10.0),
        ];
        let backend = [BackendRoom::new(7, "NB1", 2), BackendRoom::new(8, "NB2", 2)];
        let mut other_floor = request(3, 7, RequestStatus::Pending);
        other_floor.floor_id = Some(99);
        let requests = vec![
            request(1, 7, RequestStatus::InProgress),
            request(2, 7, RequestStatus::Completed),
            other_floor,
            request(4, 8, RequestStatus::Approved),
        ];

        let rooms = apply_requests(
            reconcile(&layout, &backend),
            &requests,
            RequestScope {
                building_id: 1,
                floor_id: 2,
            },
        );

        let summary: Vec<(RoomStatus, usize)> = rooms
            .iter()
            .map(|r| (r.status(), r.request_count()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (RoomStatus::InProgress, 2),
                (RoomStatus::NoRequest, 0),
                (RoomStatus::NoRequest, 0),
            ]
        );
    }
}
