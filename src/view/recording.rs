//! A view that keeps everything it is shown.

use im::Vector;

use super::GameView;
use crate::engine::{Outcome, Table};

/// Records every refresh and announcement.
///
/// Snapshots are cheap: `Table` hands are persistent vectors.
#[derive(Clone, Debug, Default)]
pub struct RecordingView {
    snapshots: Vector<Table>,
    announcements: Vec<Outcome>,
}

impl RecordingView {
    /// Create an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every table shown so far, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> &Vector<Table> {
        &self.snapshots
    }

    /// The most recent table shown.
    #[must_use]
    pub fn latest(&self) -> Option<&Table> {
        self.snapshots.last()
    }

    /// Every outcome announced so far.
    #[must_use]
    pub fn announcements(&self) -> &[Outcome] {
        &self.announcements
    }

    /// Forget everything recorded.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.announcements.clear();
    }
}

impl GameView for RecordingView {
    fn refresh(&mut self, table: &Table) {
        self.snapshots.push_back(table.clone());
    }

    fn announce(&mut self, outcome: Outcome) {
        self.announcements.push(outcome);
    }
}
