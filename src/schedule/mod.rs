//! Scheduling for the round engine.
//!
//! The engine never sleeps. It owns a [`Timeline`] that records when the
//! next round tick and the next hand-off are due, and whoever drives the
//! engine decides how virtual time maps onto wall-clock time.

pub mod timeline;

pub use timeline::{Timeline, TimerKind};
