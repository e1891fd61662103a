//! New Building: three identical wings stacked on top of each other.

use super::{suffixed, Layout, LayoutRegistry};
use crate::model::{LayoutRoom, SpecialKind};

const BUILDING: &str = "New Building";

const START_X: f64 = 40.0;
const START_Y: f64 = 40.0;
const ROOM_WIDTH: f64 = 140.0;
const ROOM_HEIGHT: f64 = 100.0;
const HALLWAY_HEIGHT: f64 = 60.0;
const LEFT_STAIRS_WIDTH: f64 = 80.0;
const LEFT_STAIRS_HEIGHT: f64 = 120.0;
const RIGHT_STAIRS_WIDTH: f64 = ROOM_WIDTH;
const RIGHT_STAIRS_HEIGHT: f64 = 80.0;
const CR_WIDTH: f64 = 70.0;
const CR_HEIGHT: f64 = 60.0;
const GAP: f64 = 20.0;
const CR_INSET: f64 = 60.0;

pub(super) fn register(registry: &mut LayoutRegistry) {
    registry
        .register(BUILDING, "Ground Floor", ground_floor)
        .register(BUILDING, "2nd Floor", second_floor)
        .register(BUILDING, "3rd Floor", third_floor);
}

fn ground_floor() -> Layout {
    wing(None, "GF", ["NB1", "NB2", "NB3"])
}

fn second_floor() -> Layout {
    wing(Some("2F"), "2F", ["NB4", "NB5", "NB6"])
}

fn third_floor() -> Layout {
    wing(Some("3F"), "3F", ["NB7", "NB8", "NB9"])
}

/// One wing: stairs, male CR and the first classroom along the top, a
/// hallway below them, two stacked classrooms on the right followed by the
/// female CR, the second stairwell and a side corridor.
///
/// `suffix` tags hallway/stairs ids; restrooms are always tagged with
/// `cr_tag`.
fn wing(suffix: Option<&str>, cr_tag: &str, numbers: [&str; 3]) -> Layout {
    let [first, second, third] = numbers;
    let mut rooms = Vec::with_capacity(9);

    rooms.push(
        LayoutRoom::new(
            suffixed("STAIRS_LEFT", suffix),
            "STAIRS",
            "Stairs",
            START_X,
            START_Y,
            LEFT_STAIRS_WIDTH,
            LEFT_STAIRS_HEIGHT,
        )
        .with_special(SpecialKind::Stairs),
    );

    let cr_male_x = START_X + LEFT_STAIRS_WIDTH + GAP;
    rooms.push(LayoutRoom::new(
        format!("CR_MALE_{cr_tag}"),
        "CR M",
        "Male CR",
        cr_male_x,
        START_Y,
        CR_WIDTH,
        CR_HEIGHT,
    ));

    let first_x = cr_male_x + CR_WIDTH + GAP;
    rooms.push(LayoutRoom::new(
        first,
        first,
        format!("Room {first}"),
        first_x,
        START_Y,
        ROOM_WIDTH,
        ROOM_HEIGHT,
    ));

    let hallway_width = first_x + ROOM_WIDTH - START_X;
    let hallway_y = START_Y + LEFT_STAIRS_HEIGHT + GAP / 2.0;
    rooms.push(
        LayoutRoom::new(
            suffixed("HALLWAY_TOP", suffix),
            "HALL",
            "Hallway",
            START_X,
            hallway_y,
            hallway_width,
            HALLWAY_HEIGHT,
        )
        .with_special(SpecialKind::Hallway),
    );

    let right_x = first_x + ROOM_WIDTH + GAP;
    rooms.push(LayoutRoom::new(
        second,
        second,
        format!("Room {second}"),
        right_x,
        START_Y,
        ROOM_WIDTH,
        ROOM_HEIGHT,
    ));

    let third_y = START_Y + ROOM_HEIGHT + GAP;
    rooms.push(LayoutRoom::new(
        third,
        third,
        format!("Room {third}"),
        right_x,
        third_y,
        ROOM_WIDTH,
        ROOM_HEIGHT,
    ));

    let cr_female_x = right_x + CR_INSET;
    let cr_female_y = third_y + ROOM_HEIGHT + GAP;
    rooms.push(LayoutRoom::new(
        format!("CR_FEMALE_{cr_tag}"),
        "CR F",
        "Female CR",
        cr_female_x,
        cr_female_y,
        CR_WIDTH,
        CR_HEIGHT,
    ));

    let cr_bottom = cr_female_y + CR_HEIGHT;
    let right_stairs_y = cr_bottom + GAP;
    rooms.push(
        LayoutRoom::new(
            suffixed("STAIRS_RIGHT", suffix),
            "STAIRS",
            "Stairs",
            right_x,
            right_stairs_y,
            RIGHT_STAIRS_WIDTH,
            RIGHT_STAIRS_HEIGHT,
        )
        .with_special(SpecialKind::Stairs),
    );

    // Side corridor hangs off the right end of the top hallway and runs
    // down to the bottom of the right stairwell.
    let side_x = START_X + hallway_width - LEFT_STAIRS_WIDTH;
    let side_height = right_stairs_y + RIGHT_STAIRS_HEIGHT - cr_female_y;
    rooms.push(
        LayoutRoom::new(
            suffixed("HALLWAY_LEFT_SIDE", suffix),
            "HALL",
            "Hallway",
            side_x,
            cr_female_y,
            CR_WIDTH,
            side_height,
        )
        .with_special(SpecialKind::Hallway),
    );

    let canvas_width = (right_x + ROOM_WIDTH + GAP * 2.0).max(cr_female_x + CR_WIDTH + GAP);
    let canvas_height = (hallway_y + HALLWAY_HEIGHT + GAP)
        .max(cr_bottom + GAP + RIGHT_STAIRS_HEIGHT + GAP * 2.0);

    Layout {
        rooms,
        canvas_width,
        canvas_height,
    }
}
