//! # Facility Inspector
//!
//! A terminal floor-plan viewer that maps maintenance requests onto
//! hand-authored building layouts.
//!
//! ## Features
//!
//! - Built-in floor plans for every building in the catalog
//! - Reconciles layout rooms with the backend's room records
//! - Derives one display status per room from its open tickets
//! - Filter by status, search by room number or name
//! - File maintenance requests against registered rooms
//! - Export to CSV and JSON
//!
//! ## Example
//!
//! ```no_run
//! use facility_inspector::backend::SnapshotBackend;
//! use facility_inspector::view::Orchestrator;
//!
//! let backend = SnapshotBackend::open("facility.json").expect("Failed to load");
//! let mut orchestrator = Orchestrator::with_builtin_layouts(backend);
//! orchestrator.select_building("New Building");
//! orchestrator.select_floor("Ground Floor");
//! println!("Pending rooms: {}", orchestrator.view().statistics.pending);
//! ```

pub mod backend;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod layout;
pub mod logging;
pub mod model;
pub mod ui;
pub mod view;
