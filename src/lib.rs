//! # war-engine
//!
//! A timer-driven round engine for the card game War.
//!
//! Two hands draw a random card each round. Equal values go into a shared
//! pool; otherwise the higher card, together with the whole pool, goes to
//! the other side. The first side to run out of cards is done: an empty
//! local hand is a victory, an empty opponent hand a defeat.
//!
//! ## Design Principles
//!
//! 1. **Live state**: every timer tick reads the engine's current hands and
//!    pool, never a copy taken when the timer was armed.
//!
//! 2. **No races**: the delayed hand-off of a decided round is settled before
//!    the next round looks at the table.
//!
//! 3. **Read-only views**: views receive `&Table` after every change and can
//!    only answer with a `Control`.
//!
//! ## Modules
//!
//! - `core`: Cards, sides, deck source, RNG, configuration, errors
//! - `engine`: Table state, round results and the `RoundEngine`
//! - `schedule`: Virtual timeline for the round and hand-off timers
//! - `view`: The `GameView` seam and a recording view

pub mod core;
pub mod engine;
pub mod schedule;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Card, Suit, Side, SideMap,
    GameRng, EngineConfig, EngineError,
    standard_deck, STANDARD_DECK_SIZE,
};

pub use crate::engine::{Outcome, Pool, RoundEngine, RoundRecord, RoundResult, Table};

pub use crate::schedule::{Timeline, TimerKind};

pub use crate::view::{Control, GameView, NullView, RecordingView};
