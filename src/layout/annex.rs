//! Annex Building: offices on the left, numbered classrooms along a
//! corridor on the right.

use super::{Layout, LayoutRegistry};
use crate::model::{LayoutRoom, SpecialKind};

const BUILDING: &str = "Annex Building";

const START_X: f64 = 50.0;
const START_Y: f64 = 50.0;

pub(super) fn register(registry: &mut LayoutRegistry) {
    registry
        .register(BUILDING, "Ground Floor", ground_floor)
        .register(BUILDING, "2nd Floor", second_floor)
        .register(BUILDING, "3rd Floor", third_floor)
        .register(BUILDING, "4th Floor", fourth_floor);
}

// Ground and 2nd floor share the same grid.
const OFFICE_WIDTH: f64 = 120.0;
const OFFICE_HEIGHT: f64 = 80.0;
const STAIRS_WIDTH: f64 = 60.0;
const STAIRS_HEIGHT: f64 = 60.0;
const ROOM_WIDTH: f64 = 80.0;
const ROOM_HEIGHT: f64 = 100.0;
const CR_WIDTH: f64 = 70.0;
const CR_HEIGHT: f64 = 50.0;
const GAP: f64 = 15.0;
const HALLWAY_HEIGHT: f64 = 50.0;

/// Left edge of the classroom strip, right of the office and stairwell.
const CLASSROOMS_X: f64 = START_X + OFFICE_WIDTH + STAIRS_WIDTH + GAP * 2.0;

fn classroom(number: &str, x: f64, y: f64) -> LayoutRoom {
    LayoutRoom::new(
        number,
        number,
        format!("Room {number}"),
        x,
        y,
        ROOM_WIDTH,
        ROOM_HEIGHT,
    )
}

/// Classrooms left to right from `x`; returns the x after the last one.
fn classroom_row(rooms: &mut Vec<LayoutRoom>, numbers: &[&str], x: f64, y: f64) -> f64 {
    let mut x = x;
    for number in numbers {
        rooms.push(classroom(number, x, y));
        x += ROOM_WIDTH + GAP;
    }
    x
}

/// Female and male CR stacked and vertically centred on the classroom row.
/// Returns the right edge of the pair.
fn restroom_pair(rooms: &mut Vec<LayoutRoom>, tag: &str, x: f64) -> f64 {
    let stack_height = CR_HEIGHT * 2.0 + GAP;
    let y = START_Y + (ROOM_HEIGHT - stack_height) / 2.0;
    rooms.push(LayoutRoom::new(
        format!("CR_FEMALE_{tag}"),
        "CR F",
        "Female CR",
        x,
        y,
        CR_WIDTH,
        CR_HEIGHT,
    ));
    rooms.push(LayoutRoom::new(
        format!("CR_MALE_{tag}"),
        "CR M",
        "Male CR",
        x,
        y + CR_HEIGHT + GAP,
        CR_WIDTH,
        CR_HEIGHT,
    ));
    x + CR_WIDTH
}

fn stairs(id: &str, x: f64, y: f64, width: f64, height: f64) -> LayoutRoom {
    LayoutRoom::new(id, "STAIRS", "Stairs", x, y, width, height).with_special(SpecialKind::Stairs)
}

fn hallway(id: &str, x: f64, y: f64, width: f64, height: f64) -> LayoutRoom {
    LayoutRoom::new(id, "HALL", "Hallway", x, y, width, height).with_special(SpecialKind::Hallway)
}

fn office(id: &str, number: &str, name: &str, x: f64, y: f64) -> LayoutRoom {
    LayoutRoom::new(id, number, name, x, y, OFFICE_WIDTH, OFFICE_HEIGHT)
}

fn ground_floor() -> Layout {
    let mut rooms = Vec::with_capacity(16);

    rooms.push(office("GUIDANCE", "GUIDANCE", "Guidance Office", START_X, START_Y));
    rooms.push(stairs(
        "STAIRS",
        START_X + OFFICE_WIDTH + GAP,
        START_Y,
        STAIRS_WIDTH,
        STAIRS_HEIGHT,
    ));
    rooms.push(office(
        "CLINIC",
        "CLINIC",
        "Clinic",
        START_X,
        START_Y + OFFICE_HEIGHT + GAP,
    ));

    let row_end = classroom_row(
        &mut rooms,
        &["101", "102", "103", "104", "105"],
        CLASSROOMS_X,
        START_Y,
    );
    let cr_right = restroom_pair(&mut rooms, "GF", row_end);

    let hallway_y = START_Y + ROOM_HEIGHT + GAP;
    rooms.push(hallway(
        "HALLWAY_GF",
        CLASSROOMS_X,
        hallway_y,
        cr_right - CLASSROOMS_X,
        HALLWAY_HEIGHT,
    ));

    let property_y = hallway_y + HALLWAY_HEIGHT + GAP;
    rooms.push(office(
        "PROPERTY",
        "PROPERTY",
        "Property Office",
        CLASSROOMS_X,
        property_y,
    ));

    let lobby_y = property_y + OFFICE_HEIGHT + GAP * 2.0;
    let lobby_width = OFFICE_WIDTH * 3.0 + GAP * 2.0;
    rooms.push(LayoutRoom::new(
        "LOBBY",
        "LOBBY",
        "Lobby",
        START_X,
        lobby_y,
        lobby_width,
        OFFICE_HEIGHT,
    ));

    // Bottom offices are numbered by the first word of their name.
    let bottom_y = lobby_y + OFFICE_HEIGHT + GAP;
    let mut x = START_X;
    for (id, name) in [
        ("REGISTRATION", "Registration Office"),
        ("PRESIDENTS_OFFICE", "President's Office"),
        ("FINANCE", "Finance Office"),
    ] {
        let number = name
            .split(' ')
            .next()
            .unwrap_or(name)
            .to_uppercase();
        rooms.push(office(id, &number, name, x, bottom_y));
        x += OFFICE_WIDTH + GAP;
    }

    let right_extent = cr_right.max(CLASSROOMS_X + OFFICE_WIDTH);
    Layout {
        rooms,
        canvas_width: lobby_width.max(right_extent) + START_X * 2.0,
        canvas_height: bottom_y + OFFICE_HEIGHT + START_Y,
    }
}

fn second_floor() -> Layout {
    let mut rooms = Vec::with_capacity(19);

    rooms.push(office("219", "219", "Room 219", START_X, START_Y));
    rooms.push(stairs(
        "STAIRS_2F",
        START_X + OFFICE_WIDTH + GAP,
        START_Y,
        STAIRS_WIDTH,
        STAIRS_HEIGHT,
    ));

    let row_end = classroom_row(
        &mut rooms,
        &["201", "202", "203", "204", "205", "206"],
        CLASSROOMS_X,
        START_Y,
    );
    let cr_right = restroom_pair(&mut rooms, "2F", row_end);

    let hallway_y = START_Y + ROOM_HEIGHT + GAP;
    rooms.push(hallway(
        "HALLWAY_2F",
        CLASSROOMS_X,
        hallway_y,
        cr_right - CLASSROOMS_X,
        HALLWAY_HEIGHT,
    ));

    // Far side of the corridor is numbered right to left.
    let bottom_y = hallway_y + HALLWAY_HEIGHT + GAP;
    let bottom_end = classroom_row(
        &mut rooms,
        &["213", "212", "211", "210", "209", "208", "207"],
        CLASSROOMS_X,
        bottom_y,
    );

    let avr_width = OFFICE_WIDTH + STAIRS_WIDTH + GAP;
    rooms.push(LayoutRoom::new(
        "AVR_ROOM",
        "AVR",
        "AVR Room",
        START_X,
        bottom_y,
        avr_width,
        ROOM_HEIGHT,
    ));

    let right_extent = cr_right.max(bottom_end);
    Layout {
        rooms,
        canvas_width: (avr_width + GAP).max(right_extent) + START_X * 2.0,
        canvas_height: bottom_y + ROOM_HEIGHT + START_Y,
    }
}

fn third_floor() -> Layout {
    const STAIRS_WIDTH: f64 = 60.0;
    const STAIRS_HEIGHT: f64 = 80.0;
    const GAP: f64 = 20.0;
    const SPEECH_LAB_WIDTH: f64 = 120.0;
    const SPEECH_LAB_HEIGHT: f64 = 100.0;
    const LAB_WIDTH: f64 = SPEECH_LAB_WIDTH + STAIRS_WIDTH + GAP;
    const LAB_HEIGHT: f64 = 120.0;
    const HALLWAY_HEIGHT: f64 = 40.0;

    let lab = |id: &str, number: &str, name: &str, x: f64, y: f64| {
        LayoutRoom::new(id, number, name, x, y, LAB_WIDTH, LAB_HEIGHT)
    };

    let mut rooms = Vec::with_capacity(8);

    rooms.push(LayoutRoom::new(
        "SPEECH_LAB",
        "SPEECH LAB",
        "Speech Laboratory",
        START_X,
        START_Y,
        SPEECH_LAB_WIDTH,
        SPEECH_LAB_HEIGHT,
    ));
    rooms.push(stairs(
        "STAIRS_3F",
        START_X + SPEECH_LAB_WIDTH + GAP,
        START_Y,
        STAIRS_WIDTH,
        STAIRS_HEIGHT,
    ));

    let lab3_x = START_X + SPEECH_LAB_WIDTH + STAIRS_WIDTH + GAP * 2.0;
    let lab5_x = lab3_x + LAB_WIDTH + GAP;
    rooms.push(lab("COMLAB_3", "COMLAB 3", "Computer Lab 3", lab3_x, START_Y));
    rooms.push(lab("COMLAB_5", "COMLAB 5", "Computer Lab 5", lab5_x, START_Y));

    let hallway_y = START_Y + LAB_HEIGHT + GAP;
    rooms.push(hallway(
        "HALLWAY_3F",
        lab3_x,
        hallway_y,
        LAB_WIDTH * 2.0 + GAP,
        HALLWAY_HEIGHT,
    ));

    let bottom_y = hallway_y + HALLWAY_HEIGHT + GAP;
    rooms.push(lab("COMLAB_1", "COMLAB 1", "Computer Lab 1", START_X, bottom_y));
    rooms.push(lab(
        "COMLAB_2",
        "COMLAB 2",
        "Computer Lab 2",
        START_X + LAB_WIDTH + GAP,
        bottom_y,
    ));
    rooms.push(lab("COMLAB_4", "COMLAB 4", "Computer Lab 4", lab5_x, bottom_y));

    let total_width = (START_X + LAB_WIDTH * 2.0 + GAP).max(lab5_x + LAB_WIDTH);
    Layout {
        rooms,
        canvas_width: total_width + START_X,
        canvas_height: bottom_y + LAB_HEIGHT + START_Y,
    }
}

fn fourth_floor() -> Layout {
    const OFFICE_HEIGHT: f64 = 100.0;
    const STAIRS_HEIGHT: f64 = 80.0;
    const GAP: f64 = 20.0;
    const TALL_HEIGHT: f64 = OFFICE_HEIGHT * 2.0;
    const WIDE_WIDTH: f64 = OFFICE_WIDTH * 2.0;
    const WIDE_HEIGHT: f64 = TALL_HEIGHT / 2.0;
    const BOTTOM_MARGIN: f64 = 40.0;

    let mut rooms = Vec::with_capacity(4);

    rooms.push(LayoutRoom::new(
        "OFFICE_4F",
        "OFFICE",
        "Office",
        START_X,
        START_Y,
        OFFICE_WIDTH,
        OFFICE_HEIGHT,
    ));
    rooms.push(stairs(
        "STAIRS_4F",
        START_X + OFFICE_WIDTH + GAP,
        START_Y + (OFFICE_HEIGHT - STAIRS_HEIGHT) / 2.0,
        STAIRS_WIDTH,
        STAIRS_HEIGHT,
    ));

    let lower_y = START_Y + OFFICE_HEIGHT + GAP;
    rooms.push(LayoutRoom::new(
        "401",
        "401",
        "Room 401",
        START_X,
        lower_y,
        OFFICE_WIDTH,
        TALL_HEIGHT,
    ));
    // 402 sits flush with the bottom of 401.
    rooms.push(LayoutRoom::new(
        "402",
        "402",
        "Room 402",
        START_X + OFFICE_WIDTH + GAP,
        lower_y + TALL_HEIGHT - WIDE_HEIGHT,
        WIDE_WIDTH,
        WIDE_HEIGHT,
    ));

    let top_width = OFFICE_WIDTH + STAIRS_WIDTH + GAP;
    let bottom_width = OFFICE_WIDTH + WIDE_WIDTH + GAP;
    Layout {
        rooms,
        canvas_width: top_width.max(bottom_width) + START_X * 2.0,
        canvas_height: lower_y + TALL_HEIGHT + BOTTOM_MARGIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbers(layout: &Layout) -> Vec<&str> {
        layout.rooms.iter().map(|r| r.room_number.as_str()).collect()
    }

    #[test]
    fn ground_floor_geometry() {
        let layout = ground_floor();
        assert_eq!(layout.rooms.len(), 16);
        assert_eq!(layout.canvas_width, 905.0);
        assert_eq!(layout.canvas_height, 565.0);

        let cr = layout.room("CR_FEMALE_GF").unwrap();
        assert_eq!((cr.x, cr.y), (735.0, 42.5));

        let hallway = layout.room("HALLWAY_GF").unwrap();
        assert_eq!((hallway.x, hallway.width), (260.0, 545.0));

        assert_eq!(layout.room("LOBBY").unwrap().width, 390.0);
        assert_eq!(
            layout.room("PRESIDENTS_OFFICE").unwrap().room_number,
            "PRESIDENT'S"
        );
    }

    #[test]
    fn second_floor_geometry() {
        let layout = second_floor();
        assert_eq!(layout.rooms.len(), 19);
        assert_eq!(layout.canvas_width, 1025.0);
        assert_eq!(layout.canvas_height, 380.0);
        assert_eq!(layout.room("207").unwrap().x, 830.0);
        assert_eq!(layout.room("AVR_ROOM").unwrap().width, 195.0);
        assert!(numbers(&layout).contains(&"219"));
    }

    #[test]
    fn third_floor_geometry() {
        let layout = third_floor();
        assert_eq!(layout.canvas_width, 740.0);
        assert_eq!(layout.canvas_height, 420.0);
        assert_eq!(layout.room("COMLAB_5").unwrap().x, 490.0);
        assert_eq!(layout.room("HALLWAY_3F").unwrap().width, 420.0);
    }

    #[test]
    fn fourth_floor_geometry() {
        let layout = fourth_floor();
        assert_eq!(layout.canvas_width, 480.0);
        assert_eq!(layout.canvas_height, 410.0);
        let wide = layout.room("402").unwrap();
        assert_eq!((wide.x, wide.y, wide.width, wide.height), (190.0, 270.0, 240.0, 100.0));
    }
}
