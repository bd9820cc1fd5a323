//! Terminal runner: plays War games in real time and prints the table.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use war_engine::core::{shuffled_deck, standard_deck};
use war_engine::{Card, Control, EngineConfig, GameRng, GameView, Outcome, RoundEngine, Table};

#[derive(Parser, Debug)]
#[command(name = "war", about = "Watch two hands play War")]
struct Args {
    /// RNG seed for the draws (and the shuffle).
    #[arg(long, default_value_t = war_engine::core::config::DEFAULT_SEED)]
    seed: u64,

    /// Milliseconds between rounds.
    #[arg(long, default_value_t = 100)]
    period_ms: u64,

    /// Milliseconds before a decided round's cards change hands.
    #[arg(long, default_value_t = 50)]
    delay_ms: u64,

    /// Number of games to play back to back.
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Shuffle the deck before dealing.
    #[arg(long)]
    shuffle: bool,

    /// Run on virtual time without sleeping.
    #[arg(long)]
    instant: bool,
}

/// Prints one line per round and the final message.
#[derive(Default)]
struct TerminalView {
    last_tally: Option<u64>,
}

fn shown(card: Option<Card>) -> String {
    card.map_or_else(|| "-".to_string(), |c| c.image_key())
}

impl GameView for TerminalView {
    fn refresh(&mut self, table: &Table) {
        if self.last_tally == Some(table.tally()) && !table.is_complete() {
            return;
        }
        self.last_tally = Some(table.tally());

        println!(
            "round {:>5} | mine {:>2} [{:>9}] vs [{:<9}] {:<2} opponent | pool {}",
            table.tally(),
            table.my_hand().len(),
            shown(table.my_card()),
            shown(table.opponent_card()),
            table.opponent_hand().len(),
            table.pool().len(),
        );
    }

    fn announce(&mut self, outcome: Outcome) {
        println!("{outcome}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = EngineConfig::new()
        .with_seed(args.seed)
        .with_round_period(Duration::from_millis(args.period_ms))
        .with_handoff_delay(Duration::from_millis(args.delay_ms));

    let deck = if args.shuffle {
        shuffled_deck(&mut GameRng::new(args.seed).for_context("deck"))
    } else {
        standard_deck()
    };

    let mut engine = RoundEngine::new(deck, config, TerminalView::default())?;

    for game in 1..=args.games {
        if engine.available_control() == Control::Reset {
            engine.trigger(Control::Reset)?;
        }
        engine.trigger(Control::Start)?;

        while !engine.table().is_complete() {
            match engine.until_next_timer() {
                Some(wait) => {
                    if !args.instant {
                        tokio::time::sleep(wait).await;
                    }
                    engine.advance(wait);
                }
                None => {
                    engine.resolve_round();
                }
            }
        }

        tracing::info!(
            game,
            rounds = engine.table().tally(),
            outcome = ?engine.outcome(),
            "game finished"
        );
    }

    Ok(())
}
