//! Card value type.
//!
//! A `Card` is nothing more than a suit and a value. Two cards with the same
//! suit and value are indistinguishable, and decks may contain several cards
//! sharing a value across suits (that is what makes ties possible).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five card suits.
///
/// Serialized as lowercase names, which are also the prefixes of the card
/// image resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spade,
    Clover,
    Dia,
    Heart,
    Joker,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 5] = [Suit::Spade, Suit::Clover, Suit::Dia, Suit::Heart, Suit::Joker];

    /// The four regular suits (everything except the joker).
    pub const REGULAR: [Suit; 4] = [Suit::Spade, Suit::Clover, Suit::Dia, Suit::Heart];

    /// Lowercase name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spade => "spade",
            Suit::Clover => "clover",
            Suit::Dia => "dia",
            Suit::Heart => "heart",
            Suit::Joker => "joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown suit name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown suit `{0}`")]
pub struct ParseSuitError(pub String);

impl FromStr for Suit {
    type Err = ParseSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| ParseSuitError(s.to_string()))
    }
}

/// An immutable playing card.
///
/// Ordering between cards only ever looks at `value`; suits never break ties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Card suit.
    pub suit: Suit,
    /// Card rank. Higher wins.
    pub value: u8,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(suit: Suit, value: u8) -> Self {
        Self { suit, value }
    }

    /// Resource identifier for the card face, e.g. `spade_5`.
    #[must_use]
    pub fn image_key(&self) -> String {
        format!("{}_{}", self.suit, self.value)
    }

    /// Path of the card face image, e.g. `/images/spade_5.png`.
    #[must_use]
    pub fn image_path(&self) -> String {
        format!("/images/{}.png", self.image_key())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.value)
    }
}
