//! Table state: hands, pool, drawn cards, tally, completion.
//!
//! `Table` is what views get to see. It is only mutated by the round engine;
//! views receive `&Table` and can clone it cheaply (the hands are `im`
//! vectors) if they want to keep a copy.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{split, Card, Side, SideMap};

/// Cards waiting in the pool after tied rounds.
///
/// Ties are rare enough that the pool normally fits inline.
pub type Pool = SmallVec<[Card; 4]>;

/// Observable game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub(crate) hands: SideMap<Vector<Card>>,
    pub(crate) pool: Pool,
    pub(crate) drawn: SideMap<Option<Card>>,
    pub(crate) tally: u64,
    pub(crate) complete: bool,
}

impl Table {
    /// Deal a fresh table from `deck`.
    #[must_use]
    pub fn deal(deck: &[Card]) -> Self {
        Self {
            hands: split(deck),
            ..Self::default()
        }
    }

    /// A side's hand, in order.
    #[must_use]
    pub fn hand(&self, side: Side) -> &Vector<Card> {
        &self.hands[side]
    }

    /// Local player's hand.
    #[must_use]
    pub fn my_hand(&self) -> &Vector<Card> {
        self.hand(Side::Mine)
    }

    /// Opponent's hand.
    #[must_use]
    pub fn opponent_hand(&self) -> &Vector<Card> {
        self.hand(Side::Opponent)
    }

    /// Cards held back by ties, oldest first.
    #[must_use]
    pub fn pool(&self) -> &[Card] {
        &self.pool
    }

    /// The card currently shown for a side.
    #[must_use]
    pub fn drawn(&self, side: Side) -> Option<Card> {
        self.drawn[side]
    }

    /// Local player's shown card.
    #[must_use]
    pub fn my_card(&self) -> Option<Card> {
        self.drawn(Side::Mine)
    }

    /// Opponent's shown card.
    #[must_use]
    pub fn opponent_card(&self) -> Option<Card> {
        self.drawn(Side::Opponent)
    }

    /// Rounds played since the last deal.
    #[must_use]
    pub fn tally(&self) -> u64 {
        self.tally
    }

    /// Whether the round loop has stopped for good.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Cards in both hands plus the pool.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hands[Side::Mine].len() + self.hands[Side::Opponent].len() + self.pool.len()
    }
}
