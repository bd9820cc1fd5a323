//! The round engine.
//!
//! ## Round resolution
//!
//! Each round draws one uniformly random card from each hand and compares
//! values:
//!
//! - **Tie**: both cards leave their hands and are appended to the pool
//!   (local card first). Immediate.
//! - **Decided**: the side with the higher card gives it away. After the
//!   hand-off delay the other side's hand becomes its current cards, then the
//!   given card, then the whole pool; the giver loses the card at the drawn
//!   index and the pool empties.
//!
//! A round that finds the local hand empty ends the game in victory; one that
//! finds the opponent hand empty ends it in defeat.
//!
//! ## Hand-off ordering
//!
//! The hand-off is a one-shot timer on the engine's [`Timeline`]. It is
//! settled when it comes due, and in any case before the next round reads
//! the hands and before [`RoundEngine::stop`] marks the game complete. A
//! round therefore always observes the fully transferred state of the
//! previous round, whatever the timer cadence.

use im::Vector;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

use super::round::{Outcome, RoundRecord, RoundResult, Transfer};
use super::table::Table;
use crate::core::{standard_deck, Card, EngineConfig, EngineError, GameRng, Side, SideMap};
use crate::schedule::{Timeline, TimerKind};
use crate::view::{Control, GameView};

/// Timer-driven War engine reporting to a [`GameView`].
///
/// ## Example
///
/// ```
/// use war_engine::core::{EngineConfig, STANDARD_DECK_SIZE};
/// use war_engine::engine::RoundEngine;
/// use war_engine::view::RecordingView;
///
/// let mut engine = RoundEngine::with_standard_deck(EngineConfig::new(), RecordingView::new())
///     .unwrap();
///
/// engine.start();
/// let outcome = engine.run_until_complete(1_000_000);
///
/// assert!(outcome.is_some());
/// assert!(engine.table().is_complete());
/// assert_eq!(engine.table().card_count(), STANDARD_DECK_SIZE);
/// assert_eq!(engine.view().announcements().len(), 1);
/// ```
pub struct RoundEngine<V: GameView> {
    config: EngineConfig,
    deck: Vec<Card>,
    table: Table,
    pending: Option<Transfer>,
    timeline: Timeline,
    /// One draw stream per side so the two picks are independent.
    draws: SideMap<GameRng>,
    history: Vector<RoundRecord>,
    view: V,
}

impl<V: GameView> RoundEngine<V> {
    /// Create an engine over `deck` and deal the opening table.
    pub fn new(deck: Vec<Card>, config: EngineConfig, view: V) -> Result<Self, EngineError> {
        config.validate()?;

        let rng = GameRng::new(config.seed);
        let draws = SideMap::new(|side| rng.for_context(side.label()));

        let mut engine = Self {
            config,
            deck,
            table: Table::default(),
            pending: None,
            timeline: Timeline::new(),
            draws,
            history: Vector::new(),
            view,
        };
        engine.initialize();

        Ok(engine)
    }

    /// Create an engine over the standard 53-card deck.
    pub fn with_standard_deck(config: EngineConfig, view: V) -> Result<Self, EngineError> {
        Self::new(standard_deck(), config, view)
    }

    // === Accessors ===

    /// Current table state.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The deck every deal starts from.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Rounds resolved since the last deal.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// How the current game ended, if it has.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.history.last()?.result {
            RoundResult::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The attached view.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The attached view, mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Detach the view.
    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    /// Whether the round timer is armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timeline.is_running()
    }

    /// Whether a decided round is still waiting for its hand-off.
    #[must_use]
    pub fn has_pending_handoff(&self) -> bool {
        self.pending.is_some()
    }

    /// Time until the next timer is due, or `None` when nothing is armed.
    #[must_use]
    pub fn until_next_timer(&self) -> Option<Duration> {
        self.timeline.until_next()
    }

    // === Lifecycle ===

    /// Deal a fresh table from the engine's deck.
    ///
    /// Clears the pool, tally, completion flag, shown cards and history.
    /// Any hand-off still pending belongs to the discarded table and is
    /// dropped. Does not touch the round timer.
    pub fn initialize(&mut self) {
        if self.pending.take().is_some() {
            self.timeline.cancel_once();
            trace!("pending hand-off dropped by new deal");
        }

        self.table = Table::deal(&self.deck);
        self.history.clear();

        info!(
            mine = self.table.my_hand().len(),
            opponent = self.table.opponent_hand().len(),
            "table dealt"
        );
        self.publish();
    }

    /// Replace the deck and deal from it.
    pub fn initialize_with(&mut self, deck: Vec<Card>) {
        self.deck = deck;
        self.initialize();
    }

    /// Deal, resolve the first round immediately, then arm the round timer.
    ///
    /// Starting while already running restarts the game on a single timer.
    pub fn start(&mut self) {
        if self.timeline.cancel_interval() {
            warn!("start requested while running, restarting");
        }

        self.initialize();
        info!(period = ?self.config.round_period, "game started");

        self.resolve_round();
        if !self.table.complete {
            self.timeline.start_interval(self.config.round_period);
        }
    }

    /// Cancel the round timer and mark the game complete.
    ///
    /// Safe to call at any time. A pending hand-off is completed, not
    /// cancelled, and the shown cards are cleared.
    pub fn stop(&mut self) {
        if self.timeline.cancel_interval() {
            debug!("round timer cancelled");
        }
        self.settle_handoff();

        self.table.complete = true;
        self.table.drawn = SideMap::default();

        info!(tally = self.table.tally, "game stopped");
        self.publish();
    }

    // === Rounds ===

    /// Resolve one round.
    ///
    /// Returns `None` without touching anything once the game is complete.
    pub fn resolve_round(&mut self) -> Option<RoundResult> {
        if self.table.complete {
            return None;
        }
        self.settle_handoff();

        self.table.tally += 1;
        let round = self.table.tally;

        let drawn = SideMap::from_pair(self.draw(Side::Mine), self.draw(Side::Opponent));
        self.table.drawn = SideMap::new(|side| drawn[side].map(|(_, card)| card));

        let (mine, opponent) = match (drawn[Side::Mine], drawn[Side::Opponent]) {
            (None, _) => return Some(self.finish(round, Outcome::Victory)),
            (_, None) => return Some(self.finish(round, Outcome::Defeat)),
            (Some(mine), Some(opponent)) => (mine, opponent),
        };

        let result = RoundResult::compare(mine.1, opponent.1);
        match result.giver() {
            Some(from) => {
                let (index, card) = if from == Side::Mine { mine } else { opponent };
                self.pending = Some(Transfer { from, index, card });
                self.timeline.schedule_once(self.config.handoff_delay);
            }
            None => {
                self.table.hands[Side::Mine].remove(mine.0);
                self.table.hands[Side::Opponent].remove(opponent.0);
                self.table.pool.push(mine.1);
                self.table.pool.push(opponent.1);
            }
        }

        debug!(
            round,
            mine = %mine.1,
            opponent = %opponent.1,
            ?result,
            pool = self.table.pool.len(),
            "round resolved"
        );
        self.record(round, result);
        self.publish();

        Some(result)
    }

    /// Complete the pending hand-off now, if there is one.
    ///
    /// Returns whether anything changed hands.
    pub fn settle_handoff(&mut self) -> bool {
        let Some(Transfer { from, index, card }) = self.pending.take() else {
            return false;
        };
        self.timeline.cancel_once();

        let removed = self.table.hands[from].remove(index);
        debug_assert_eq!(removed, card);

        let pool = std::mem::take(&mut self.table.pool);
        let pooled = pool.len();
        let receiver = &mut self.table.hands[from.other()];
        receiver.push_back(card);
        receiver.extend(pool);

        trace!(%from, %card, pooled, "hand-off settled");
        self.publish();

        true
    }

    // === Driving ===

    /// Move virtual time forward, firing every timer that comes due.
    ///
    /// Returns how many timers fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let until = self.timeline.now() + elapsed;
        let mut fired = 0;

        while let Some(kind) = self.timeline.pop_due(until) {
            match kind {
                TimerKind::HandOff => {
                    self.settle_handoff();
                }
                TimerKind::Round => {
                    self.resolve_round();
                }
            }
            fired += 1;
        }
        self.timeline.advance_to(until);

        fired
    }

    /// Drive the game until it completes or `max_rounds` have been played.
    ///
    /// Follows the timers when they are armed and resolves rounds directly
    /// otherwise. Returns the outcome if the game finished.
    pub fn run_until_complete(&mut self, max_rounds: u64) -> Option<Outcome> {
        while !self.table.complete && self.table.tally < max_rounds {
            match self.timeline.until_next() {
                Some(wait) => {
                    self.advance(wait);
                }
                None => {
                    self.resolve_round();
                }
            }
        }
        self.outcome()
    }

    // === Controls ===

    /// The control the view should currently offer.
    #[must_use]
    pub fn available_control(&self) -> Control {
        if self.table.complete {
            Control::Reset
        } else {
            Control::Start
        }
    }

    /// Act on a control pressed in the view.
    pub fn trigger(&mut self, control: Control) -> Result<(), EngineError> {
        let available = self.available_control();
        if control != available {
            return Err(EngineError::ControlUnavailable {
                requested: control,
                available,
            });
        }

        match control {
            Control::Start => self.start(),
            Control::Reset => self.initialize(),
        }
        Ok(())
    }

    // === Internals ===

    fn draw(&mut self, side: Side) -> Option<(usize, Card)> {
        let hand = &self.table.hands[side];
        let index = self.draws[side].gen_index(hand.len())?;
        Some((index, hand[index]))
    }

    fn finish(&mut self, round: u64, outcome: Outcome) -> RoundResult {
        let result = RoundResult::Finished(outcome);
        self.record(round, result);

        info!(round, %outcome, "game over");
        self.view.announce(outcome);
        self.stop();

        result
    }

    fn record(&mut self, round: u64, result: RoundResult) {
        self.history.push_back(RoundRecord {
            round,
            mine: self.table.drawn[Side::Mine],
            opponent: self.table.drawn[Side::Opponent],
            result,
        });
    }

    fn publish(&mut self) {
        self.view.refresh(&self.table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;
    use crate::view::RecordingView;

    fn card(suit: Suit, value: u8) -> Card {
        Card::new(suit, value)
    }

    fn engine(deck: Vec<Card>) -> RoundEngine<RecordingView> {
        RoundEngine::new(deck, EngineConfig::new(), RecordingView::new()).unwrap()
    }

    /// Engine whose table is set up by hand.
    fn engine_with(mine: &[Card], opponent: &[Card], pool: &[Card]) -> RoundEngine<RecordingView> {
        seeded_engine_with(EngineConfig::new().seed, mine, opponent, pool)
    }

    fn seeded_engine_with(
        seed: u64,
        mine: &[Card],
        opponent: &[Card],
        pool: &[Card],
    ) -> RoundEngine<RecordingView> {
        let config = EngineConfig::new().with_seed(seed);
        let mut engine = RoundEngine::new(Vec::new(), config, RecordingView::new()).unwrap();
        engine.table.hands = SideMap::from_pair(
            mine.iter().copied().collect(),
            opponent.iter().copied().collect(),
        );
        engine.table.pool = pool.iter().copied().collect();
        engine
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = EngineConfig::new().with_round_period(Duration::ZERO);
        let result = RoundEngine::new(standard_deck(), config, RecordingView::new());
        assert_eq!(result.err(), Some(EngineError::ZeroRoundPeriod));
    }

    #[test]
    fn test_new_deals_and_publishes() {
        let engine = engine(standard_deck());

        assert_eq!(engine.table().my_hand().len(), 26);
        assert_eq!(engine.table().opponent_hand().len(), 27);
        assert_eq!(engine.view().snapshots().len(), 1);
        assert_eq!(engine.available_control(), Control::Start);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_tie_moves_both_cards_to_pool() {
        let mut engine = engine_with(&[card(Suit::Spade, 5)], &[card(Suit::Heart, 5)], &[]);

        assert_eq!(engine.resolve_round(), Some(RoundResult::Tie));

        let table = engine.table();
        assert_eq!(table.pool(), &[card(Suit::Spade, 5), card(Suit::Heart, 5)]);
        assert!(table.my_hand().is_empty());
        assert!(table.opponent_hand().is_empty());
        assert_eq!(table.tally(), 1);
        assert!(!engine.has_pending_handoff());
    }

    #[test]
    fn test_tie_removes_by_index() {
        // Duplicate cards: only one copy may leave the hand.
        let five = card(Suit::Spade, 5);
        let mut engine = engine_with(&[five, five], &[card(Suit::Heart, 5)], &[]);

        assert_eq!(engine.resolve_round(), Some(RoundResult::Tie));
        assert_eq!(engine.table().my_hand().len(), 1);
    }

    #[test]
    fn test_drawn_card_leaves_middle_of_hand_in_order() {
        let (a, b, c) = (card(Suit::Spade, 1), card(Suit::Spade, 9), card(Suit::Spade, 2));
        let five = card(Suit::Heart, 5);

        // Search for a seed whose first draw takes the middle card.
        let mut engine = (0..10_000)
            .map(|seed| {
                let mut engine = seeded_engine_with(seed, &[a, b, c], &[five], &[]);
                engine.resolve_round();
                engine
            })
            .find(|engine| engine.history()[0].mine == Some(b))
            .expect("some seed draws the middle card");

        assert_eq!(engine.history()[0].result, RoundResult::MineHigher);
        assert!(engine.settle_handoff());

        let table = engine.table();
        assert_eq!(table.my_hand().iter().copied().collect::<Vec<_>>(), vec![a, c]);
        assert_eq!(table.opponent_hand().iter().copied().collect::<Vec<_>>(), vec![five, b]);
    }

    #[test]
    fn test_tie_leaves_middle_of_hand_in_order() {
        let (a, b, c) = (card(Suit::Heart, 1), card(Suit::Heart, 5), card(Suit::Heart, 2));
        let five = card(Suit::Spade, 5);

        let engine = (0..10_000)
            .map(|seed| {
                let mut engine = seeded_engine_with(seed, &[five], &[a, b, c], &[]);
                engine.resolve_round();
                engine
            })
            .find(|engine| engine.history()[0].result == RoundResult::Tie)
            .expect("some seed draws the matching five");

        let table = engine.table();
        assert!(table.my_hand().is_empty());
        assert_eq!(table.opponent_hand().iter().copied().collect::<Vec<_>>(), vec![a, c]);
        assert_eq!(table.pool(), &[five, b]);
    }

    #[test]
    fn test_mine_higher_hands_card_and_pool_to_opponent() {
        let mut engine = engine_with(
            &[card(Suit::Spade, 9)],
            &[card(Suit::Heart, 2)],
            &[card(Suit::Dia, 3), card(Suit::Clover, 3)],
        );

        assert_eq!(engine.resolve_round(), Some(RoundResult::MineHigher));
        assert!(engine.has_pending_handoff());
        assert_eq!(engine.table().my_card(), Some(card(Suit::Spade, 9)));
        assert_eq!(engine.table().opponent_card(), Some(card(Suit::Heart, 2)));

        assert!(engine.settle_handoff());
        let table = engine.table();
        assert!(table.my_hand().is_empty());
        assert!(table.pool().is_empty());
        assert_eq!(
            table.opponent_hand().iter().copied().collect::<Vec<_>>(),
            vec![
                card(Suit::Heart, 2),
                card(Suit::Spade, 9),
                card(Suit::Dia, 3),
                card(Suit::Clover, 3),
            ]
        );
    }

    #[test]
    fn test_opponent_higher_hands_card_to_me() {
        let mut engine = engine_with(&[card(Suit::Spade, 1)], &[card(Suit::Joker, 14)], &[]);

        assert_eq!(engine.resolve_round(), Some(RoundResult::OpponentHigher));
        assert!(engine.settle_handoff());

        let table = engine.table();
        assert!(table.opponent_hand().is_empty());
        assert_eq!(
            table.my_hand().iter().copied().collect::<Vec<_>>(),
            vec![card(Suit::Spade, 1), card(Suit::Joker, 14)]
        );
    }

    #[test]
    fn test_settle_without_pending_is_noop() {
        let mut engine = engine(standard_deck());
        let before = engine.table().clone();
        assert!(!engine.settle_handoff());
        assert_eq!(engine.table(), &before);
    }

    #[test]
    fn test_next_round_settles_pending_handoff_first() {
        let mut engine = engine_with(&[card(Suit::Spade, 9)], &[card(Suit::Heart, 2)], &[]);

        engine.resolve_round();
        assert!(engine.has_pending_handoff());

        // The hand-off empties my hand, so the next round is a victory.
        assert_eq!(
            engine.resolve_round(),
            Some(RoundResult::Finished(Outcome::Victory))
        );
        assert_eq!(engine.table().opponent_hand().len(), 2);
    }

    #[test]
    fn test_empty_hands_finish_game() {
        let mut engine = engine_with(&[], &[card(Suit::Heart, 2)], &[]);
        assert_eq!(
            engine.resolve_round(),
            Some(RoundResult::Finished(Outcome::Victory))
        );
        assert!(engine.table().is_complete());
        assert_eq!(engine.view().announcements(), &[Outcome::Victory]);

        let mut engine = engine_with(&[card(Suit::Heart, 2)], &[], &[]);
        assert_eq!(
            engine.resolve_round(),
            Some(RoundResult::Finished(Outcome::Defeat))
        );
        assert_eq!(engine.outcome(), Some(Outcome::Defeat));
    }

    #[test]
    fn test_complete_game_ignores_further_rounds() {
        let mut engine = engine_with(&[], &[card(Suit::Heart, 2)], &[]);
        engine.resolve_round();

        assert_eq!(engine.resolve_round(), None);
        assert_eq!(engine.table().tally(), 1);
        assert_eq!(engine.view().announcements().len(), 1);
    }

    #[test]
    fn test_stop_clears_shown_cards_and_settles() {
        let nine = card(Suit::Spade, 9);
        let mut engine = engine_with(&[nine, nine], &[card(Suit::Heart, 2)], &[]);
        engine.resolve_round();
        assert!(engine.table().my_card().is_some());

        engine.stop();
        assert!(!engine.has_pending_handoff());
        assert!(engine.table().is_complete());
        assert_eq!(engine.table().my_card(), None);
        assert_eq!(engine.table().opponent_card(), None);
        assert_eq!(engine.table().card_count(), 3);

        // Idempotent.
        engine.stop();
        assert!(engine.table().is_complete());
    }

    #[test]
    fn test_initialize_drops_pending_handoff() {
        let mut engine = engine(standard_deck());
        engine.resolve_round();
        engine.resolve_round();

        engine.initialize();
        assert!(!engine.has_pending_handoff());
        assert!(engine.history().is_empty());
        assert_eq!(engine.table(), &Table::deal(&standard_deck()));
        assert_eq!(engine.until_next_timer(), None);
    }

    #[test]
    fn test_history_records_rounds() {
        let mut engine = engine_with(&[card(Suit::Spade, 5)], &[card(Suit::Heart, 5)], &[]);
        engine.resolve_round();
        engine.resolve_round();

        let rounds: Vec<_> = engine.history().iter().map(|r| (r.round, r.result)).collect();
        assert_eq!(
            rounds,
            vec![
                (1, RoundResult::Tie),
                (2, RoundResult::Finished(Outcome::Victory)),
            ]
        );
        assert_eq!(engine.history()[0].mine, Some(card(Suit::Spade, 5)));
        assert_eq!(engine.history()[1].mine, None);
    }
}
