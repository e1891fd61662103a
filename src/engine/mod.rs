//! Pure reconciliation, aggregation, filtering and counting over a floor.
//!
//! Nothing in here performs I/O or keeps state; every function can be
//! called repeatedly and its result thrown away.

pub mod filter;
pub mod reconcile;
pub mod stats;
pub mod status;
pub mod submit;

pub use filter::{filter_rooms, maintainable, RoomQuery, StatusFilter};
pub use reconcile::{reconcile, reconcile_with_report, AmbiguousMatch, Reconciliation};
pub use stats::{compute_statistics, Statistics};
pub use status::{apply_requests, compute_status, summarize, RequestScope, StatusSummary};
pub use submit::prepare_request;
