use facility_inspector::engine::{
    apply_requests, compute_statistics, compute_status, filter_rooms, maintainable, reconcile,
    RequestScope, StatusFilter,
};
use facility_inspector::layout::get_layout;
use facility_inspector::model::{
    BackendRoom, MaintenanceRequest, MergedRoom, RequestStatus, RoomStatus,
};
use proptest::prelude::*;

const STATUSES: [RequestStatus; 5] = [
    RequestStatus::Pending,
    RequestStatus::Approved,
    RequestStatus::Rejected,
    RequestStatus::InProgress,
    RequestStatus::Completed,
];

fn request_status() -> impl Strategy<Value = RequestStatus> {
    (0..STATUSES.len()).prop_map(|i| STATUSES[i])
}

fn status_filter() -> impl Strategy<Value = StatusFilter> {
    (0..StatusFilter::CYCLE.len()).prop_map(|i| StatusFilter::CYCLE[i])
}

/// Annex ground floor with every maintainable room registered and a random
/// ticket list spread over them.
fn annex_floor(tickets: &[(usize, RequestStatus)]) -> Vec<MergedRoom> {
    let layout = get_layout("Annex Building", "Ground Floor");
    let backend: Vec<BackendRoom> = layout
        .rooms
        .iter()
        .filter(|r| !r.is_special())
        .enumerate()
        .map(|(i, r)| BackendRoom::new(i as u64, r.room_number.clone(), 1))
        .collect();
    let requests: Vec<MaintenanceRequest> = tickets
        .iter()
        .enumerate()
        .map(|(id, (room, status))| MaintenanceRequest {
            id: id as u64,
            room_id: Some((*room % backend.len()) as u64),
            building_id: Some(1),
            floor_id: Some(1),
            status: *status,
            created_at: String::new(),
            description: String::new(),
            requester_name: None,
        })
        .collect();
    apply_requests(
        reconcile(&layout.rooms, &backend),
        &requests,
        RequestScope {
            building_id: 1,
            floor_id: 1,
        },
    )
}

fn ids(rooms: &[&MergedRoom]) -> Vec<String> {
    rooms.iter().map(|r| r.id().to_string()).collect()
}

proptest! {
    #[test]
    fn status_and_search_commute(
        tickets in prop::collection::vec((0usize..64, request_status()), 0..40),
        filter in status_filter(),
        search in "[a-zA-Z0-9 ]{0,4}",
    ) {
        let rooms = annex_floor(&tickets);

        let combined = filter_rooms(&rooms, filter, &search);

        let by_status: Vec<MergedRoom> = filter_rooms(&rooms, filter, "")
            .into_iter()
            .cloned()
            .collect();
        let status_first = filter_rooms(&by_status, StatusFilter::All, &search);

        let by_search: Vec<MergedRoom> = filter_rooms(&rooms, StatusFilter::All, &search)
            .into_iter()
            .cloned()
            .collect();
        let search_first = filter_rooms(&by_search, filter, "");

        prop_assert_eq!(ids(&combined), ids(&status_first));
        prop_assert_eq!(ids(&combined), ids(&search_first));
    }

    #[test]
    fn statistics_partition_the_rooms(
        tickets in prop::collection::vec((0usize..64, request_status()), 0..40),
    ) {
        let rooms = annex_floor(&tickets);
        let stats = compute_statistics(maintainable(&rooms));

        let maintainable_count = maintainable(&rooms).count();
        prop_assert_eq!(stats.total, maintainable_count);

        let no_request = maintainable(&rooms)
            .filter(|r| r.status() == RoomStatus::NoRequest)
            .count();
        prop_assert_eq!(
            stats.pending + stats.in_progress + stats.completed + no_request,
            stats.total
        );
        prop_assert_eq!(stats.no_request(), no_request);
    }

    #[test]
    fn status_filters_split_the_floor(
        tickets in prop::collection::vec((0usize..64, request_status()), 0..40),
    ) {
        let rooms = annex_floor(&tickets);
        let split: usize = RoomStatus::ALL
            .into_iter()
            .map(|status| filter_rooms(&rooms, StatusFilter::Only(status), "").len())
            .sum();
        prop_assert_eq!(split, rooms.len());
    }

    #[test]
    fn count_ignores_administrative_tickets(
        statuses in prop::collection::vec(request_status(), 0..20),
    ) {
        let requests: Vec<MaintenanceRequest> = statuses
            .iter()
            .enumerate()
            .map(|(id, status)| MaintenanceRequest {
                id: id as u64,
                room_id: Some(1),
                building_id: Some(1),
                floor_id: Some(1),
                status: *status,
                created_at: String::new(),
                description: String::new(),
                requester_name: None,
            })
            .collect();
        let summary = compute_status(&requests);

        let visible: Vec<RequestStatus> = statuses
            .iter()
            .copied()
            .filter(|s| !matches!(s, RequestStatus::Approved | RequestStatus::Rejected))
            .collect();
        prop_assert_eq!(summary.count, visible.len());

        let expected = if visible.contains(&RequestStatus::Pending) {
            RoomStatus::Pending
        } else if visible.contains(&RequestStatus::InProgress) {
            RoomStatus::InProgress
        } else if visible.is_empty() {
            RoomStatus::NoRequest
        } else {
            RoomStatus::Completed
        };
        prop_assert_eq!(summary.status, expected);
    }

    #[test]
    fn special_rooms_never_register(
        names in prop::collection::vec("[A-Z]{1,6}[0-9]{0,3}", 0..30),
    ) {
        let layout = get_layout("New Building", "Ground Floor");
        let backend: Vec<BackendRoom> = names
            .iter()
            .enumerate()
            .map(|(i, name)| BackendRoom::new(i as u64, name.clone(), 1))
            .collect();
        for room in reconcile(&layout.rooms, &backend) {
            if room.is_special() {
                prop_assert!(room.backend_id().is_none());
            }
        }
    }
}
