//! Virtual timeline with one repeating timer and one one-shot timer.
//!
//! Time only moves when the owner says so. A real-time driver asks for
//! [`Timeline::until_next`], sleeps that long, and then pops every timer
//! that has come due. Tests skip the sleeping.
//!
//! ```
//! use std::time::Duration;
//! use war_engine::schedule::{Timeline, TimerKind};
//!
//! let mut timeline = Timeline::new();
//! timeline.start_interval(Duration::from_millis(100));
//! timeline.schedule_once(Duration::from_millis(50));
//!
//! let until = Duration::from_millis(100);
//! assert_eq!(timeline.pop_due(until), Some(TimerKind::HandOff));
//! assert_eq!(timeline.pop_due(until), Some(TimerKind::Round));
//! assert_eq!(timeline.pop_due(until), None);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which timer fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// The one-shot hand-off of a decided round.
    HandOff,
    /// A tick of the repeating round timer.
    Round,
}

/// Repeating timer state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Interval {
    period: Duration,
    next_at: Duration,
}

/// Virtual clock plus the engine's two timers.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    now: Duration,
    interval: Option<Interval>,
    once_at: Option<Duration>,
}

impl Timeline {
    /// Create a timeline at time zero with no timers armed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Arm the repeating timer. The first tick is one `period` from now.
    ///
    /// Replaces any repeating timer that was already armed.
    pub fn start_interval(&mut self, period: Duration) {
        self.interval = Some(Interval {
            period,
            next_at: self.now + period,
        });
    }

    /// Disarm the repeating timer. Returns whether one was armed.
    pub fn cancel_interval(&mut self) -> bool {
        self.interval.take().is_some()
    }

    /// Whether the repeating timer is armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Arm the one-shot timer `delay` from now, replacing any pending one.
    pub fn schedule_once(&mut self, delay: Duration) {
        self.once_at = Some(self.now + delay);
    }

    /// Disarm the one-shot timer. Returns whether one was armed.
    pub fn cancel_once(&mut self) -> bool {
        self.once_at.take().is_some()
    }

    /// Earliest armed deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        let round = self.interval.map(|i| i.next_at);
        match (self.once_at, round) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Time left until the earliest armed deadline.
    #[must_use]
    pub fn until_next(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.now))
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// The clock moves to the popped deadline. A repeating tick re-arms one
    /// period later. When both timers share a deadline the hand-off goes
    /// first, since it belongs to the previous round.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerKind> {
        let once = self.once_at.filter(|&at| at <= until);
        let round = self.interval.map(|i| i.next_at).filter(|&at| at <= until);

        match (once, round) {
            (Some(at), Some(tick)) if at <= tick => self.fire_once(at),
            (Some(at), None) => self.fire_once(at),
            (_, Some(tick)) => {
                self.now = self.now.max(tick);
                if let Some(interval) = self.interval.as_mut() {
                    interval.next_at = tick + interval.period;
                }
                Some(TimerKind::Round)
            }
            (None, None) => None,
        }
    }

    /// Move the clock forward to `until` without firing anything.
    ///
    /// Call after draining [`Timeline::pop_due`]. The clock never runs
    /// backwards.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    fn fire_once(&mut self, at: Duration) -> Option<TimerKind> {
        self.once_at = None;
        self.now = self.now.max(at);
        Some(TimerKind::HandOff)
    }
}
