//! View orchestration: the explicit state behind the floor plan, the
//! fetch chain that feeds the engine, and room-detail bookkeeping.

pub mod floor;
pub mod orchestrator;
pub mod selection;
pub mod state;

pub use floor::{load_floor_view, FloorView};
pub use orchestrator::Orchestrator;
pub use selection::{DetailTicket, RoomDetail, RoomDetailTracker};
pub use state::ViewState;
