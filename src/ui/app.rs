use crate::backend::FacilityBackend;
use crate::engine::{maintainable, RoomQuery};
use crate::error::FacilityError;
use crate::layout::FacilityCatalog;
use crate::model::MergedRoom;
use crate::view::Orchestrator;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    RoomDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Catalog,
    Rooms,
}

/// What typed characters are doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    NewRequest,
}

/// One line of the catalog panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEntry {
    Building(String),
    Floor { building: String, floor: String },
}

pub struct App<B> {
    pub orchestrator: Orchestrator<B>,
    pub catalog: FacilityCatalog,
    pub view: View,
    pub focus_panel: FocusPanel,
    pub input_mode: InputMode,
    pub catalog_cursor: usize,
    pub room_cursor: usize,
    pub input: String,
    /// Outcome of the last user action, shown until the next one.
    pub message: Option<String>,
    pub should_quit: bool,
}

impl<B: FacilityBackend> App<B> {
    #[must_use]
    pub fn new(orchestrator: Orchestrator<B>, catalog: FacilityCatalog) -> Self {
        let mut app = Self {
            orchestrator,
            catalog,
            view: View::Dashboard,
            focus_panel: FocusPanel::Catalog,
            input_mode: InputMode::Normal,
            catalog_cursor: 0,
            room_cursor: 0,
            input: String::new(),
            message: None,
            should_quit: false,
        };
        app.catalog_cursor = app.current_catalog_index().unwrap_or(0);
        if app.orchestrator.state().location().is_some() {
            app.focus_panel = FocusPanel::Rooms;
        }
        app
    }

    pub fn into_orchestrator(self) -> Orchestrator<B> {
        self.orchestrator
    }

    pub fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => super::dashboard::draw_dashboard(frame, self),
            View::RoomDetail => super::dashboard::draw_room_detail(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                self.handle_key(key.code);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match self.input_mode {
            InputMode::Search => self.handle_search_keys(code),
            InputMode::NewRequest => self.handle_request_keys(code),
            InputMode::Normal => match self.view {
                View::Dashboard => self.handle_dashboard_keys(code),
                View::RoomDetail => self.handle_detail_keys(code),
            },
        }
    }

    fn handle_dashboard_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                self.message = None;
                self.focus_panel = FocusPanel::Catalog;
            }
            KeyCode::Up | KeyCode::Char('k') => self.navigate_up(),
            KeyCode::Down | KeyCode::Char('j') => self.navigate_down(),
            KeyCode::Left | KeyCode::Char('h') => self.focus_panel = FocusPanel::Catalog,
            KeyCode::Right | KeyCode::Char('l') => self.focus_panel = FocusPanel::Rooms,
            KeyCode::Enter => match self.focus_panel {
                FocusPanel::Catalog => self.activate_catalog_entry(),
                FocusPanel::Rooms => self.open_highlighted_room(),
            },
            KeyCode::Char('f') => self.cycle_status_filter(),
            KeyCode::Char('/') => {
                self.input = self.orchestrator.state().query().search.clone();
                self.input_mode = InputMode::Search;
            }
            KeyCode::Char('n') => {
                if let Some(id) = self.highlighted_room().map(|r| r.id().to_string()) {
                    self.orchestrator.open_room(&id);
                    self.start_request();
                }
            }
            _ => {}
        }
    }

    fn handle_detail_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => {
                self.orchestrator.clear_selection();
                self.view = View::Dashboard;
            }
            KeyCode::Char('n') => self.start_request(),
            _ => {}
        }
    }

    fn handle_search_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Esc => {
                self.input.clear();
                self.apply_search();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.apply_search();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.apply_search();
            }
            _ => {}
        }
    }

    fn handle_request_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                self.submit_request();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Esc => {
                self.input.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn navigate_up(&mut self) {
        match self.focus_panel {
            FocusPanel::Catalog => self.catalog_cursor = self.catalog_cursor.saturating_sub(1),
            FocusPanel::Rooms => self.room_cursor = self.room_cursor.saturating_sub(1),
        }
    }

    fn navigate_down(&mut self) {
        match self.focus_panel {
            FocusPanel::Catalog => {
                if self.catalog_cursor < self.catalog_entries().len().saturating_sub(1) {
                    self.catalog_cursor += 1;
                }
            }
            FocusPanel::Rooms => {
                if self.room_cursor < self.table_rooms().len().saturating_sub(1) {
                    self.room_cursor += 1;
                }
            }
        }
    }

    fn activate_catalog_entry(&mut self) {
        let Some(entry) = self.catalog_entries().get(self.catalog_cursor).cloned() else {
            return;
        };
        match entry {
            CatalogEntry::Building(building) => {
                self.orchestrator.select_building(&building);
            }
            CatalogEntry::Floor { building, floor } => {
                if self.orchestrator.state().building() != Some(building.as_str()) {
                    self.orchestrator.select_building(&building);
                }
                self.orchestrator.select_floor(&floor);
                self.focus_panel = FocusPanel::Rooms;
            }
        }
        self.room_cursor = 0;
        self.message = None;
    }

    fn open_highlighted_room(&mut self) {
        let Some(id) = self.highlighted_room().map(|r| r.id().to_string()) else {
            return;
        };
        self.orchestrator.open_room(&id);
        if self.orchestrator.state().selected_room() == Some(id.as_str()) {
            self.view = View::RoomDetail;
        }
    }

    fn cycle_status_filter(&mut self) {
        let query = self.orchestrator.state().query();
        let next = RoomQuery::new(query.status.next(), query.search.clone());
        self.orchestrator.set_query(next);
        self.room_cursor = 0;
    }

    fn apply_search(&mut self) {
        let status = self.orchestrator.state().query().status;
        self.orchestrator
            .set_query(RoomQuery::new(status, self.input.clone()));
        self.room_cursor = 0;
    }

    fn start_request(&mut self) {
        let Some(room) = self.orchestrator.selected_room() else {
            return;
        };
        if room.is_registered() {
            self.input.clear();
            self.input_mode = InputMode::NewRequest;
        } else {
            let err = FacilityError::UnregisteredRoom {
                room: room.layout.room_number.clone(),
            };
            self.message = Some(err.to_string());
        }
    }

    fn submit_request(&mut self) {
        let description = std::mem::take(&mut self.input);
        self.message = Some(
            match self.orchestrator.submit_request(&description, None) {
                Ok(created) => format!("Request #{} submitted", created.id),
                Err(err) => err.to_string(),
            },
        );
    }

    /// Buildings with their floors, in catalog order.
    #[must_use]
    pub fn catalog_entries(&self) -> Vec<CatalogEntry> {
        self.catalog
            .buildings
            .iter()
            .flat_map(|b| {
                std::iter::once(CatalogEntry::Building(b.name.clone())).chain(
                    b.floors.iter().map(|f| CatalogEntry::Floor {
                        building: b.name.clone(),
                        floor: f.clone(),
                    }),
                )
            })
            .collect()
    }

    fn current_catalog_index(&self) -> Option<usize> {
        let state = self.orchestrator.state();
        let building = state.building()?;
        self.catalog_entries().iter().position(|entry| match entry {
            CatalogEntry::Floor {
                building: b,
                floor: f,
            } => b == building && Some(f.as_str()) == state.floor(),
            CatalogEntry::Building(b) => b == building && state.floor().is_none(),
        })
    }

    /// Rooms listed in the table: those passing the query, minus special
    /// rooms.
    #[must_use]
    pub fn table_rooms(&self) -> Vec<&MergedRoom> {
        maintainable(self.orchestrator.visible_rooms()).collect()
    }

    #[must_use]
    pub fn highlighted_room(&self) -> Option<&MergedRoom> {
        self.table_rooms().get(self.room_cursor).copied()
    }

    /// Maintainable rooms on the floor, ignoring the query.
    #[must_use]
    pub fn maintainable_count(&self) -> usize {
        maintainable(&self.orchestrator.view().rooms).count()
    }
}
