//! Engine configuration.
//!
//! `EngineConfig` carries the timer cadence and the RNG seed. Build it with
//! the `with_*` methods and check it with [`EngineConfig::validate`] (the
//! engine constructor does this for you).

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::EngineError;

/// Default time between two rounds.
pub const DEFAULT_ROUND_PERIOD: Duration = Duration::from_millis(100);

/// Default delay before the cards of a decided round change hands.
pub const DEFAULT_HANDOFF_DELAY: Duration = Duration::from_millis(50);

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 0x5EED;

/// Round engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Period of the repeating round timer.
    pub round_period: Duration,

    /// Delay of the one-shot hand-off after a decided round.
    ///
    /// Must be strictly shorter than `round_period`.
    pub handoff_delay: Duration,

    /// Seed for the per-side draw streams.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            round_period: DEFAULT_ROUND_PERIOD,
            handoff_delay: DEFAULT_HANDOFF_DELAY,
            seed: DEFAULT_SEED,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round timer period.
    #[must_use]
    pub fn with_round_period(mut self, period: Duration) -> Self {
        self.round_period = period;
        self
    }

    /// Set the hand-off delay.
    #[must_use]
    pub fn with_handoff_delay(mut self, delay: Duration) -> Self {
        self.handoff_delay = delay;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the timer settings.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.round_period.is_zero() {
            return Err(EngineError::ZeroRoundPeriod);
        }
        if self.handoff_delay >= self.round_period {
            return Err(EngineError::HandoffTooSlow {
                delay: self.handoff_delay,
                period: self.round_period,
            });
        }
        Ok(())
    }
}
