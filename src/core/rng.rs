//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for different purposes
//!
//! The round engine keeps one context stream per side, so the index drawn
//! from one hand never depends on the other hand's draw.
//!
//! ```
//! use war_engine::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut mine = rng.for_context("mine");
//! let mut theirs = rng.for_context("opponent");
//!
//! let a = mine.gen_index(52);
//! let b = theirs.gen_index(52);
//! assert!(a.is_some() && b.is_some());
//!
//! // An empty hand has nothing to draw.
//! assert_eq!(mine.gen_index(0), None);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment used to spread context bytes over the seed.
const GOLDEN_GAMMA: u64 = 0x9E3779B97F4A7C15;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on every platform and toolchain: the context seed is a fixed mix of
    /// the seed and the label bytes, finished with the splitmix64 avalanche.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut mixed = self.seed;
        for &byte in context.as_bytes() {
            mixed = (mixed ^ u64::from(byte)).wrapping_mul(GOLDEN_GAMMA).rotate_left(23);
        }
        mixed ^= context.len() as u64;

        mixed = (mixed ^ (mixed >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94D049BB133111EB);
        mixed ^= mixed >> 31;

        Self::new(mixed)
    }

    /// Pick a uniformly random index into a sequence of length `len`.
    ///
    /// Returns `None` when `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.inner.gen_range(0..len))
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
