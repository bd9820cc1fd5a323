//! Core engine types: cards, sides, deck source, RNG, configuration, errors.
//!
//! Nothing in here knows about rounds or timers; the engine module builds on
//! these value types.

pub mod card;
pub mod side;
pub mod deck;
pub mod rng;
pub mod config;
pub mod error;

pub use card::{Card, ParseSuitError, Suit};
pub use side::{Side, SideMap};
pub use deck::{shuffled_deck, split, standard_deck, STANDARD_DECK_SIZE};
pub use rng::GameRng;
pub use config::EngineConfig;
pub use error::EngineError;
