//! The display seam.
//!
//! The engine pushes every state change into a [`GameView`] and announces
//! the outcome once per game. Views only ever see `&Table`, so they cannot
//! touch hands, pool or tally.
//!
//! A view offers exactly one [`Control`] at a time: `Start` while the game
//! is not complete, `Reset` once it is.

pub mod recording;

pub use recording::RecordingView;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::{Outcome, Table};

/// The button a view offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    /// Deal and run a game.
    Start,
    /// Deal a fresh table after a finished game.
    Reset,
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::Start => f.write_str("start"),
            Control::Reset => f.write_str("reset"),
        }
    }
}

/// Read-only consumer of engine state.
pub trait GameView {
    /// Called after every state change.
    fn refresh(&mut self, table: &Table);

    /// Called once when a game ends, before the final refresh.
    fn announce(&mut self, outcome: Outcome);
}

/// A view that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullView;

impl GameView for NullView {
    fn refresh(&mut self, _table: &Table) {}

    fn announce(&mut self, _outcome: Outcome) {}
}

impl<V: GameView + ?Sized> GameView for &mut V {
    fn refresh(&mut self, table: &Table) {
        (**self).refresh(table);
    }

    fn announce(&mut self, outcome: Outcome) {
        (**self).announce(outcome);
    }
}

impl<V: GameView + ?Sized> GameView for Box<V> {
    fn refresh(&mut self, table: &Table) {
        (**self).refresh(table);
    }

    fn announce(&mut self, outcome: Outcome) {
        (**self).announce(outcome);
    }
}
