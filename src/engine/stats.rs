use crate::model::{MergedRoom, RoomStatus};
use serde::Serialize;

/// Room counts per display status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl Statistics {
    /// Rooms counted in `total` that carry no visible ticket.
    #[must_use]
    pub fn no_request(&self) -> usize {
        self.total - self.pending - self.in_progress - self.completed
    }
}

/// Counts `rooms` by status.
///
/// No rooms are skipped here: callers that want a status board pass
/// [`maintainable`](super::maintainable) rooms so that hallways and stairs
/// stay out of the totals.
pub fn compute_statistics<'a, I>(rooms: I) -> Statistics
where
    I: IntoIterator<Item = &'a MergedRoom>,
{
    rooms
        .into_iter()
        .fold(Statistics::default(), |mut stats, room| {
            stats.total += 1;
            match room.status() {
                RoomStatus::Pending => stats.pending += 1,
                RoomStatus::InProgress => stats.in_progress += 1,
                RoomStatus::Completed => stats.completed += 1,
                RoomStatus::NoRequest => {}
            }
            stats
        })
}
