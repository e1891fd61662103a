//! DFA Building: a single corridor with two rows of rooms.

use super::{Layout, LayoutRegistry};
use crate::model::{LayoutRoom, SpecialKind};

const BUILDING: &str = "DFA Building";

const START_X: f64 = 50.0;
const START_Y: f64 = 50.0;
const ROW_HEIGHT: f64 = 80.0;
const A_WIDTH: f64 = 80.0;
const STAIRS_WIDTH: f64 = 220.0;
const HALLWAY_HEIGHT: f64 = 100.0;
const OFFICE_WIDTH: f64 = 100.0;
const DLL_WIDTH: f64 = 90.0;
const GAP: f64 = 15.0;

struct Slot {
    id: &'static str,
    number: &'static str,
    name: &'static str,
    width: f64,
    special: Option<SpecialKind>,
}

const fn slot(id: &'static str, number: &'static str, name: &'static str, width: f64) -> Slot {
    Slot {
        id,
        number,
        name,
        width,
        special: None,
    }
}

const fn special(
    id: &'static str,
    number: &'static str,
    name: &'static str,
    width: f64,
    kind: SpecialKind,
) -> Slot {
    Slot {
        id,
        number,
        name,
        width,
        special: Some(kind),
    }
}

const TOP_ROW: [Slot; 8] = [
    special("STAIRS_TOP", "STAIRS", "Stairs", STAIRS_WIDTH, SpecialKind::Stairs),
    slot("A12", "A12", "Room A12", A_WIDTH),
    slot("A10", "A10", "Room A10", A_WIDTH),
    slot("A8", "A8", "Room A8", A_WIDTH),
    slot("A6", "A6", "Room A6", A_WIDTH),
    slot("A4", "A4", "Room A4", A_WIDTH),
    slot("A2", "A2", "Room A2", A_WIDTH),
    slot("DLL_MUSIC_ARTS", "DLL", "DLL Music & Arts", DLL_WIDTH),
];

const BOTTOM_ROW: [Slot; 9] = [
    slot("SSC_OFFICE", "SSC", "SSC Office", OFFICE_WIDTH),
    special("CR_FEMALE", "CR F", "Female CR", OFFICE_WIDTH, SpecialKind::Cr),
    special("CR_MALE", "CR M", "Male CR", OFFICE_WIDTH, SpecialKind::Cr),
    slot("A11", "A11", "Room A11", A_WIDTH),
    slot("A9", "A9", "Room A9", A_WIDTH),
    slot("A7", "A7", "Room A7", A_WIDTH),
    slot("A5", "A5", "Room A5", A_WIDTH),
    slot("A3", "A3", "Room A3", A_WIDTH),
    slot("A1", "A1", "Room A1", A_WIDTH),
];

pub(super) fn register(registry: &mut LayoutRegistry) {
    registry.register(BUILDING, "2nd Floor", second_floor);
}

/// Lays `slots` out left to right at `y`; returns the x where the next slot
/// would start.
fn place_row(rooms: &mut Vec<LayoutRoom>, slots: &[Slot], y: f64) -> f64 {
    let mut x = START_X;
    for slot in slots {
        let mut room = LayoutRoom::new(slot.id, slot.number, slot.name, x, y, slot.width, ROW_HEIGHT);
        room.special = slot.special;
        rooms.push(room);
        x += slot.width + GAP;
    }
    x
}

fn second_floor() -> Layout {
    let mut rooms = Vec::with_capacity(TOP_ROW.len() + BOTTOM_ROW.len() + 1);

    let top_end = place_row(&mut rooms, &TOP_ROW, START_Y);

    let hallway_y = START_Y + ROW_HEIGHT + GAP;
    rooms.push(
        LayoutRoom::new(
            "HALLWAY",
            "HALL",
            "Main Hallway",
            START_X,
            hallway_y,
            top_end - START_X - GAP,
            HALLWAY_HEIGHT,
        )
        .with_special(SpecialKind::Hallway),
    );

    let bottom_y = hallway_y + HALLWAY_HEIGHT + GAP;
    let bottom_end = place_row(&mut rooms, &BOTTOM_ROW, bottom_y);

    Layout {
        rooms,
        canvas_width: bottom_end + START_X,
        canvas_height: bottom_y + ROW_HEIGHT + START_Y,
    }
}
