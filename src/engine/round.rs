//! Round results, game outcomes and the round history.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Card, Side};

/// How a finished game ended, from the local player's point of view.
///
/// The goal is to get rid of your cards: an empty hand of your own is a
/// victory, an empty opponent hand is a defeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The local player ran out of cards.
    Victory,
    /// The opponent ran out of cards.
    Defeat,
}

impl Outcome {
    /// One-shot announcement shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Outcome::Victory => "You win!!",
            Outcome::Defeat => "You lose!!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What a single round did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// Equal values: both cards went to the pool.
    Tie,
    /// The local card was higher.
    MineHigher,
    /// The opponent's card was higher.
    OpponentHigher,
    /// A hand was empty; the game is over.
    Finished(Outcome),
}

impl RoundResult {
    /// Classify two drawn cards. Only values are compared.
    #[must_use]
    pub fn compare(mine: Card, opponent: Card) -> Self {
        use std::cmp::Ordering;

        match mine.value.cmp(&opponent.value) {
            Ordering::Equal => RoundResult::Tie,
            Ordering::Greater => RoundResult::MineHigher,
            Ordering::Less => RoundResult::OpponentHigher,
        }
    }

    /// The side whose drawn card changes hands, for decided rounds.
    #[must_use]
    pub fn giver(self) -> Option<Side> {
        match self {
            RoundResult::MineHigher => Some(Side::Mine),
            RoundResult::OpponentHigher => Some(Side::Opponent),
            RoundResult::Tie | RoundResult::Finished(_) => None,
        }
    }
}

/// A resolved round, kept in the engine history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (the tally after the round).
    pub round: u64,
    /// Local card drawn, if any.
    pub mine: Option<Card>,
    /// Opponent card drawn, if any.
    pub opponent: Option<Card>,
    /// Result of the round.
    pub result: RoundResult,
}

/// A decided round whose cards have not changed hands yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Transfer {
    /// Side giving up its drawn card.
    pub from: Side,
    /// Index of that card in the giver's hand.
    pub index: usize,
    /// The card itself.
    pub card: Card,
}
