//! Board state: seed counts for the 12 slots.
//!
//! The board is a plain value owned by the game session; rules operations
//! take it explicitly so they can be unit-tested without a live session.
//!
//! ## Invariants
//!
//! - Counts are unsigned, so a negative count is unrepresentable.
//! - Seeds are only created at initialization (4 per slot, 48 total) and
//!   only leave the board through capture, so `total_seeds()` never exceeds
//!   [`TOTAL_SEEDS`] and never increases.

use serde::{Deserialize, Serialize};

use super::slot::{Side, Slot, SLOT_COUNT};

/// Seeds in every slot at the start of a game.
pub const INITIAL_SEEDS: u8 = 4;

/// Total seeds on a freshly seeded board.
pub const TOTAL_SEEDS: u32 = INITIAL_SEEDS as u32 * SLOT_COUNT as u32;

/// Seed counts for the 12 slots, indexed by slot label order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    counts: [u8; SLOT_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a fully seeded board (4 seeds in every slot).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [INITIAL_SEEDS; SLOT_COUNT],
        }
    }

    /// Create a board with explicit per-slot counts, in label order A-L.
    ///
    /// Used by tests and simulations to craft positions.
    #[must_use]
    pub const fn from_counts(counts: [u8; SLOT_COUNT]) -> Self {
        Self { counts }
    }

    /// Seed count currently in `slot`.
    #[must_use]
    pub const fn get(self, slot: Slot) -> u8 {
        self.counts[slot.index()]
    }

    /// Overwrite the count in `slot`.
    pub fn set(&mut self, slot: Slot, count: u8) {
        debug_assert!(
            count as u32 <= TOTAL_SEEDS,
            "slot count exceeds total seeds"
        );
        self.counts[slot.index()] = count;
    }

    /// Add one seed to `slot`.
    pub fn increment(&mut self, slot: Slot) {
        self.counts[slot.index()] += 1;
    }

    /// Remove and return every seed in `slot`.
    pub fn take(&mut self, slot: Slot) -> u8 {
        std::mem::take(&mut self.counts[slot.index()])
    }

    /// True iff every slot on `side` holds zero seeds.
    #[must_use]
    pub fn is_side_empty(&self, side: Side) -> bool {
        side.slots().iter().all(|&s| self.get(s) == 0)
    }

    /// True iff all 12 slots hold zero seeds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Sum of seeds across all slots.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }

    /// Reseed every slot back to its initial count.
    pub fn reset(&mut self) {
        self.counts = [INITIAL_SEEDS; SLOT_COUNT];
    }

    /// Counts for one side, in that side's slot order.
    #[must_use]
    pub fn side_counts(&self, side: Side) -> [u8; 6] {
        side.slots().map(|s| self.get(s))
    }
}
