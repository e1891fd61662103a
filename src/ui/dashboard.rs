use crate::backend::FacilityBackend;
use crate::model::{MergedRoom, RoomStatus};
use crate::ui::app::{App, CatalogEntry, FocusPanel, InputMode};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Rectangle},
        Block, Borders, List, ListItem, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table,
    },
    Frame,
};
use std::collections::HashSet;

// Brandbook colors
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C);
const BRAND_ACCENT: Color = Color::Rgb(0x58, 0x6B, 0x71);
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0);
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68);
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C);
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65);
const BRAND_ERROR: Color = Color::Rgb(0xA6, 0x3D, 0x40);

// Styles
const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);

const fn status_color(status: RoomStatus) -> Color {
    match status {
        RoomStatus::Pending => BRAND_ORANGE,
        RoomStatus::InProgress => BRAND_ACCENT,
        RoomStatus::Completed => BRAND_GREEN,
        RoomStatus::NoRequest => BRAND_MUTED,
    }
}

pub fn draw_dashboard<B: FacilityBackend>(frame: &mut Frame, app: &App<B>) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Main content
        Constraint::Length(1), // Message / prompt
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_main_content(frame, chunks[1], app);
    draw_message(frame, chunks[2], app);

    let keys = " ←→ Panel | ↑↓ Move | Enter Select | f Filter | / Search | n New request | q Quit ";
    let help = if app.orchestrator.state().query().is_active() {
        format!(
            "{keys}| Showing {} of {} rooms ",
            app.table_rooms().len(),
            app.maintainable_count()
        )
    } else {
        keys.to_string()
    };
    draw_footer(frame, chunks[3], &help);
}

fn draw_header<B: FacilityBackend>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let state = app.orchestrator.state();
    let stats = app.orchestrator.view().statistics;
    let location = match state.location() {
        Some((building, floor)) => format!("{building} / {floor}"),
        None => "No floor selected".to_string(),
    };
    let title = format!(
        " Facility Inspector | {location} | {} rooms | {} pending | {} in progress | {} completed ",
        stats.total, stats.pending, stats.in_progress, stats.completed
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_main_content<B: FacilityBackend>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(20), // Catalog
        Constraint::Percentage(50), // Floor plan
        Constraint::Percentage(30), // Rooms
    ])
    .split(area);

    draw_catalog(frame, chunks[0], app);
    draw_floor_plan(frame, chunks[1], app);
    draw_rooms(frame, chunks[2], app);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(BRAND_ORANGE)
    } else {
        Style::default()
    }
}

fn draw_catalog<B: FacilityBackend>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let is_focused = app.focus_panel == FocusPanel::Catalog;
    let state = app.orchestrator.state();
    let registry = app.orchestrator.registry();

    let items: Vec<ListItem> = app
        .catalog_entries()
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_cursor = i == app.catalog_cursor;
            let (text, is_current, has_plan) = match &entry {
                CatalogEntry::Building(name) => {
                    (name.clone(), state.building() == Some(name.as_str()), true)
                }
                CatalogEntry::Floor { building, floor } => (
                    format!("  {floor}"),
                    state.location() == Some((building.as_str(), floor.as_str())),
                    registry.contains(building, floor),
                ),
            };

            let style = if is_cursor && is_focused {
                SELECTED_STYLE
            } else if is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else if !has_plan {
                Style::default().fg(BRAND_MUTED)
            } else {
                Style::default()
            };
            let marker = if is_cursor && is_focused { " ◄" } else { "" };
            let no_plan = if has_plan { "" } else { " (no plan)" };

            ListItem::new(Line::from(vec![
                Span::styled(text, style),
                Span::styled(no_plan, Style::default().fg(BRAND_MUTED)),
                Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Buildings ")
            .borders(Borders::ALL)
            .border_style(border_style(is_focused)),
    );

    frame.render_widget(list, area);
}

fn draw_floor_plan<B: FacilityBackend>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let view = app.orchestrator.view();
    let visible_ids: HashSet<&str> = app
        .orchestrator
        .visible_rooms()
        .into_iter()
        .map(MergedRoom::id)
        .collect();
    let selected = app.orchestrator.state().selected_room();
    let highlighted = app.highlighted_room().map(MergedRoom::id);
    let height = view.canvas_height;

    let title = match &view.floor {
        Some(floor) => format!(" Floor plan: {} ", floor.label),
        None => " Floor plan ".to_string(),
    };

    let canvas = Canvas::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .marker(Marker::Braille)
        .x_bounds([0.0, view.canvas_width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for room in &view.rooms {
                if !room.is_special() && !visible_ids.contains(room.id()) {
                    continue;
                }
                let focused = Some(room.id()) == selected || Some(room.id()) == highlighted;
                let color = if focused {
                    BRAND_SELECT_BG
                } else if room.is_special() {
                    BRAND_DARK
                } else {
                    status_color(room.status())
                };
                // Layout y grows downwards, canvas y grows upwards.
                let y = height - room.layout.y - room.layout.height;
                ctx.draw(&Rectangle {
                    x: room.layout.x,
                    y,
                    width: room.layout.width,
                    height: room.layout.height,
                    color,
                });
                if !room.is_special() {
                    ctx.print(
                        room.layout.x + 4.0,
                        y + room.layout.height / 2.0,
                        Span::styled(
                            room.layout.room_number.clone(),
                            Style::default().fg(color),
                        ),
                    );
                }
            }
        });

    frame.render_widget(canvas, area);
}

fn draw_rooms<B: FacilityBackend>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let is_focused = app.focus_panel == FocusPanel::Rooms;
    let rooms = app.table_rooms();

    // Borders and header row
    let visible_rows = (area.height as usize).saturating_sub(3);
    let scroll_offset = if app.room_cursor >= visible_rows {
        app.room_cursor - visible_rows + 1
    } else {
        0
    };

    let header = Row::new(vec!["Room", "Name", "Status", "Req"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = rooms
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, room)| {
            let is_selected = i == app.room_cursor;
            let style = if is_selected && is_focused {
                SELECTED_STYLE
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else if room.is_registered() {
                Style::default()
            } else {
                Style::default().fg(BRAND_MUTED)
            };

            Row::new(vec![
                Span::raw(room.layout.room_number.clone()),
                Span::raw(room.display_name().to_string()),
                Span::styled(
                    room.status().label(),
                    Style::default().fg(status_color(room.status())),
                ),
                Span::raw(room.request_count().to_string()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(20),
        Constraint::Percentage(40),
        Constraint::Percentage(28),
        Constraint::Percentage(12),
    ];

    let title = format!(
        " Rooms ({}) [{}] ",
        rooms.len(),
        app.orchestrator.state().query().status
    );
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style(is_focused)),
    );

    frame.render_widget(table, area);

    if rooms.len() > visible_rows {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state = ScrollbarState::new(rooms.len()).position(app.room_cursor);

        let scrollbar_area = Rect {
            x: area.x + area.width - 1,
            y: area.y + 2,
            width: 1,
            height: area.height.saturating_sub(3),
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

/// Prompt while typing, otherwise the last message or the floor error.
fn draw_message<B: FacilityBackend>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let line = match app.input_mode {
        InputMode::Search => Line::from(vec![
            Span::styled(" Search: ", HEADER_STYLE),
            Span::raw(format!("{}_", app.input)),
        ]),
        InputMode::NewRequest => {
            let room = app
                .orchestrator
                .selected_room()
                .map_or("-", |r| r.layout.room_number.as_str());
            Line::from(vec![
                Span::styled(format!(" New request for {room}: "), HEADER_STYLE),
                Span::raw(format!("{}_", app.input)),
            ])
        }
        InputMode::Normal => {
            let text = app
                .message
                .as_deref()
                .or(app.orchestrator.view().error.as_deref());
            match text {
                Some(text) => Line::styled(format!(" {text}"), Style::default().fg(BRAND_ERROR)),
                None => Line::default(),
            }
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

pub fn draw_room_detail<B: FacilityBackend>(frame: &mut Frame, app: &App<B>) {
    let Some(room) = app.orchestrator.selected_room() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header: room identity
        Constraint::Length(3), // Info: status | requests | backend id
        Constraint::Min(6),    // Requests
        Constraint::Length(1), // Message / prompt
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    let header = Paragraph::new(format!(
        " Room: {} - {} ",
        room.layout.room_number,
        room.display_name()
    ))
    .style(HEADER_STYLE)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let backend = room
        .backend_id()
        .map_or_else(|| "not registered".to_string(), |id| format!("#{id}"));
    let info = Line::from(vec![
        Span::raw("Status: "),
        Span::styled(
            room.status().label(),
            Style::default().fg(status_color(room.status())),
        ),
        Span::raw(format!(
            "  |  Requests: {}  |  Backend ID: {backend}",
            room.request_count()
        )),
    ]);
    frame.render_widget(
        Paragraph::new(info).block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    let requests = app
        .orchestrator
        .room_detail()
        .map(|d| d.requests.as_slice())
        .unwrap_or_default();
    let rows: Vec<Row> = requests
        .iter()
        .map(|r| {
            Row::new(vec![
                Span::raw(format!("#{}", r.id)),
                Span::raw(r.status.label()),
                Span::raw(r.created_at.clone()),
                Span::raw(r.description.clone()),
            ])
        })
        .collect();

    let title = if app.orchestrator.is_detail_loading() {
        " Requests (loading) ".to_string()
    } else {
        format!(" Requests ({}) ", requests.len())
    };
    let widths = [
        Constraint::Length(6),
        Constraint::Length(12),
        Constraint::Length(22),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths)
        .header(Row::new(vec!["ID", "Status", "Created", "Description"]).style(HEADER_STYLE))
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(table, chunks[2]);

    let message = match app.input_mode {
        InputMode::NewRequest => Line::from(vec![
            Span::styled(
                format!(" New request for {}: ", room.layout.room_number),
                HEADER_STYLE,
            ),
            Span::raw(format!("{}_", app.input)),
        ]),
        _ => app
            .message
            .as_deref()
            .or(app.orchestrator.room_detail_error())
            .map_or_else(Line::default, |text| {
                Line::styled(format!(" {text}"), Style::default().fg(BRAND_ERROR))
            }),
    };
    frame.render_widget(Paragraph::new(message), chunks[3]);

    draw_footer(frame, chunks[4], " Esc Back | n New request | q Quit ");
}
