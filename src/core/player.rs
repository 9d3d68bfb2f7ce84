//! Player identity and per-side data storage.
//!
//! ## Player
//!
//! A player owns a name, a fixed side of the board, a monotonically
//! increasing score, and a derived "currently leading" flag.
//!
//! ## SideMap
//!
//! Per-side data storage with O(1) access, indexable by [`Side`].
//! The two entries are fixed for the life of a game.
//!
//! ```
//! use awale::core::{Side, SideMap};
//!
//! let mut scores: SideMap<u32> = SideMap::new(|_| 0);
//! scores[Side::Lower] = 7;
//! assert_eq!(scores[Side::Upper], 0);
//! assert_eq!(scores[Side::Lower], 7);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::slot::Side;

/// A player: name, assigned side, running score, leading flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    side: Side,
    score: u32,
    leading: bool,
}

impl Player {
    /// Create a player with zero score on the given side.
    #[must_use]
    pub fn new(name: impl Into<String>, side: Side) -> Self {
        Self {
            name: name.into(),
            side,
            score: 0,
            leading: false,
        }
    }

    /// Credit captured seeds to this player.
    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Whether this player is strictly ahead on score.
    ///
    /// Recomputed via [`update_leading`] after every score-affecting event;
    /// on equal scores neither player leads.
    #[must_use]
    pub const fn is_leading(&self) -> bool {
        self.leading
    }

    pub fn set_leading(&mut self, leading: bool) {
        self.leading = leading;
    }
}

/// Recompute both players' leading flags by comparing scores.
pub fn update_leading(players: &mut SideMap<Player>) {
    let upper = players[Side::Upper].score();
    let lower = players[Side::Lower].score();
    players[Side::Upper].set_leading(upper > lower);
    players[Side::Lower].set_leading(lower > upper);
}

/// Per-side data storage with O(1) access.
///
/// Backed by a fixed two-element array, one entry per side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Upper), factory(Side::Lower)],
        }
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to one side's entry.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to one side's entry.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, upper first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::both().into_iter().zip(self.data.iter())
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
