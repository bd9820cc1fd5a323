//! Engine error type.
//!
//! Running out of cards is a game outcome, not an error. The only failures
//! are misconfiguration and pressing a control that is currently hidden.

use std::time::Duration;

use crate::view::Control;

/// Errors returned by the round engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The round timer period must be non-zero.
    #[error("round period must be greater than zero")]
    ZeroRoundPeriod,

    /// The hand-off must complete before the next round tick.
    #[error("hand-off delay {delay:?} must be shorter than the round period {period:?}")]
    HandoffTooSlow { delay: Duration, period: Duration },

    /// A control was triggered while the view does not offer it.
    #[error("{requested} is not available (the view currently offers {available})")]
    ControlUnavailable { requested: Control, available: Control },
}
