//! Table sides and per-side data storage.
//!
//! ## Side
//!
//! The two seats at the table: the local player (`Mine`) and the
//! `Opponent`.
//!
//! ## SideMap
//!
//! A pair of values, one per side, indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Mine,
    Opponent,
}

impl Side {
    /// Both sides, local player first.
    pub const BOTH: [Side; 2] = [Side::Mine, Side::Opponent];

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Mine => Side::Opponent,
            Side::Opponent => Side::Mine,
        }
    }

    /// Label used for RNG context streams and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Side::Mine => "mine",
            Side::Opponent => "opponent",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use war_engine::core::{Side, SideMap};
///
/// let mut counts: SideMap<usize> = SideMap::new(|_| 26);
/// counts[Side::Opponent] += 1;
///
/// assert_eq!(counts[Side::Mine], 26);
/// assert_eq!(counts[Side::Opponent], 27);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    mine: T,
    opponent: T,
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            mine: factory(Side::Mine),
            opponent: factory(Side::Opponent),
        }
    }

    /// Create a map from explicit values.
    pub const fn from_pair(mine: T, opponent: T) -> Self {
        Self { mine, opponent }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Mine => &self.mine,
            Side::Opponent => &self.opponent,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Mine => &mut self.mine,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Iterate over (Side, &T) pairs, local player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().map(move |side| (side, self.get(side)))
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
