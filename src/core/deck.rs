//! Deck source and the opening split.
//!
//! The deck composition is fixed: the four regular suits with values 1-13,
//! plus a single joker worth 14. That gives 53 cards, so the local player
//! starts with 26 and the opponent with 27.

use im::Vector;

use super::card::{Card, Suit};
use super::rng::GameRng;
use super::side::SideMap;

/// Lowest regular card value.
pub const MIN_VALUE: u8 = 1;

/// Highest regular card value.
pub const MAX_VALUE: u8 = 13;

/// Value of the joker. Beats every regular card.
pub const JOKER_VALUE: u8 = 14;

/// Number of cards in [`standard_deck`].
pub const STANDARD_DECK_SIZE: usize = Suit::REGULAR.len() * MAX_VALUE as usize + 1;

/// Build the standard deck in canonical order (suit by suit, ascending value,
/// joker last).
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(STANDARD_DECK_SIZE);

    for suit in Suit::REGULAR {
        for value in MIN_VALUE..=MAX_VALUE {
            deck.push(Card::new(suit, value));
        }
    }
    deck.push(Card::new(Suit::Joker, JOKER_VALUE));

    deck
}

/// Build the standard deck and shuffle it with the given RNG.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    deck
}

/// Split a deck at its midpoint.
///
/// The local player receives the first `len / 2` cards, the opponent the
/// rest. Order is preserved on both sides.
#[must_use]
pub fn split(deck: &[Card]) -> SideMap<Vector<Card>> {
    let (mine, opponent) = deck.split_at(deck.len() / 2);
    SideMap::from_pair(mine.iter().copied().collect(), opponent.iter().copied().collect())
}
