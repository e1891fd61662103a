use crate::model::{BackendRoom, LayoutRoom, MergedRoom, RoomId};
use serde::Serialize;

/// A layout room whose winning match tier had more than one backend
/// candidate. The first candidate in backend list order was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmbiguousMatch {
    pub layout_id: String,
    pub chosen: RoomId,
    pub candidates: Vec<RoomId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reconciliation {
    pub rooms: Vec<MergedRoom>,
    pub ambiguities: Vec<AmbiguousMatch>,
}

impl Reconciliation {
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.is_registered()).count()
    }
}

/// Merges the layout with the backend's rooms for the same floor.
///
/// Special rooms pass through without a match attempt. Every other room
/// takes the first backend room whose name equals its number or name
/// (case-insensitive), or, failing that, the first whose name contains its
/// number. Rooms with no match stay unregistered.
#[must_use]
pub fn reconcile(layout_rooms: &[LayoutRoom], backend_rooms: &[BackendRoom]) -> Vec<MergedRoom> {
    reconcile_with_report(layout_rooms, backend_rooms).rooms
}

/// [`reconcile`], also reporting rooms that had several candidates.
#[must_use]
pub fn reconcile_with_report(
    layout_rooms: &[LayoutRoom],
    backend_rooms: &[BackendRoom],
) -> Reconciliation {
    let folded: Vec<(String, &BackendRoom)> = backend_rooms
        .iter()
        .filter(|r| !r.name.is_empty())
        .map(|r| (r.name.to_lowercase(), r))
        .collect();

    let mut rooms = Vec::with_capacity(layout_rooms.len());
    let mut ambiguities = Vec::new();

    for layout in layout_rooms {
        if layout.is_special() {
            rooms.push(MergedRoom::unregistered(layout.clone()));
            continue;
        }

        let candidates = match_candidates(layout, &folded);
        let Some(chosen) = candidates.first().copied() else {
            rooms.push(MergedRoom::unregistered(layout.clone()));
            continue;
        };

        if candidates.len() > 1 {
            let ids: Vec<RoomId> = candidates.iter().map(|r| r.id).collect();
            tracing::warn!(
                layout_id = %layout.id,
                chosen = chosen.id,
                candidates = ?ids,
                "room matches several backend rooms, keeping the first"
            );
            ambiguities.push(AmbiguousMatch {
                layout_id: layout.id.clone(),
                chosen: chosen.id,
                candidates: ids,
            });
        }

        rooms.push(MergedRoom::registered(
            layout.clone(),
            chosen.id,
            chosen.name.clone(),
        ));
    }

    let result = Reconciliation { rooms, ambiguities };
    tracing::debug!(
        layout_rooms = layout_rooms.len(),
        backend_rooms = backend_rooms.len(),
        matched = result.matched_count(),
        "reconciled floor"
    );
    result
}

/// Backend rooms in the first non-empty match tier, in list order.
fn match_candidates<'a>(layout: &LayoutRoom, folded: &[(String, &'a BackendRoom)]) -> Vec<&'a BackendRoom> {
    let number = layout.room_number.to_lowercase();
    let name = layout.room_name.to_lowercase();

    let exact: Vec<&BackendRoom> = folded
        .iter()
        .filter(|(backend, _)| *backend == number || *backend == name)
        .map(|(_, room)| *room)
        .collect();
    if !exact.is_empty() || number.is_empty() {
        return exact;
    }

    folded
        .iter()
        .filter(|(backend, _)| backend.contains(&number))
        .map(|(_, room)| *room)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RoomStatus, SpecialKind};
    use pretty_assertions::assert_eq;

    fn room(number: &str, name: &str) -> LayoutRoom {
        LayoutRoom::new(number, number, name, 0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn matches_room_number_case_insensitively() {
        let merged = reconcile(&[room("NB2", "Room NB2")], &[BackendRoom::new(7, "nb2", 1)]);
        assert_eq!(merged[0].backend_id(), Some(7));
        assert_eq!(merged[0].backend_name(), Some("nb2"));
        assert_eq!(merged[0].display_name(), "nb2");
    }

    #[test]
    fn matches_room_name() {
        let merged = reconcile(
            &[room("GUIDANCE", "Guidance Office")],
            &[BackendRoom::new(3, "GUIDANCE OFFICE", 1)],
        );
        assert_eq!(merged[0].backend_id(), Some(3));
    }

    #[test]
    fn falls_back_to_substring_of_room_number() {
        let merged = reconcile(&[room("101", "Room 101")], &[BackendRoom::new(9, "Annex 101", 1)]);
        assert_eq!(merged[0].backend_id(), Some(9));
    }

    #[test]
    fn exact_match_beats_earlier_substring_match() {
        let backend = [BackendRoom::new(1, "NB10", 1), BackendRoom::new(2, "NB1", 1)];
        let merged = reconcile(&[room("NB1", "Room NB1")], &backend);
        assert_eq!(merged[0].backend_id(), Some(2));
    }

    #[test]
    fn no_match_leaves_room_unregistered() {
        let merged = reconcile(&[room("A12", "Room A12")], &[BackendRoom::new(4, "B7", 1)]);
        assert_eq!(merged[0].backend_id(), None);
        assert_eq!(merged[0].status(), RoomStatus::NoRequest);
        assert_eq!(merged[0].request_count(), 0);
        assert_eq!(merged[0].display_name(), "Room A12");
    }

    #[test]
    fn special_rooms_are_never_matched() {
        let stairs = LayoutRoom::new("STAIRS", "STAIRS", "Stairs", 0.0, 0.0, 10.0, 10.0)
            .with_special(SpecialKind::Stairs);
        let merged = reconcile(&[stairs], &[BackendRoom::new(1, "stairs", 1)]);
        assert_eq!(merged[0].backend_id(), None);
    }

    #[test]
    fn blank_backend_names_are_ignored() {
        let merged = reconcile(&[room("X", "")], &[BackendRoom::new(1, "", 1)]);
        assert_eq!(merged[0].backend_id(), None);
    }

    #[test]
    fn ambiguous_substring_keeps_first_and_reports() {
        let backend = [
            BackendRoom::new(10, "Room 1010", 1),
            BackendRoom::new(11, "Lab 10", 1),
        ];
        let report = reconcile_with_report(&[room("10", "Room Ten")], &backend);
        assert_eq!(report.rooms[0].backend_id(), Some(10));
        assert_eq!(
            report.ambiguities,
            vec![AmbiguousMatch {
                layout_id: "10".to_string(),
                chosen: 10,
                candidates: vec![10, 11],
            }]
        );
    }

    #[test]
    fn output_preserves_layout_order() {
        let layout = [room("A", "Room A"), room("B", "Room B"), room("C", "Room C")];
        let merged = reconcile(&layout, &[BackendRoom::new(5, "b", 1)]);
        let ids: Vec<&str> = merged.iter().map(MergedRoom::id).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(reconcile_with_report(&layout, &[]).matched_count(), 0);
    }
}
