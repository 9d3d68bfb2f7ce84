//! Sowing, capture, and terminal-condition rules.
//!
//! All operations take the [`Board`] explicitly; nothing here touches
//! session state, so every rule is unit-testable on a crafted position.
//!
//! ## Sowing
//!
//! A sow empties the origin slot and drops one seed into each successive
//! slot along the turn-order cycle. The origin itself never receives a
//! seed: with 12 or more seeds the walk steps past it on every lap, so N
//! seeds always land in the N slots following the origin in cyclic order.
//!
//! ## Capture
//!
//! A capture triggers when the last seed lands in an opponent slot whose
//! resulting count is 1 or 2. The harvest then walks the cycle backward
//! from that terminus, emptying each slot into the capturer's score, and
//! stops at the first slot holding more than 3 seeds or belonging to the
//! capturer's own side. Self-capture is forbidden even mid-chain.

use smallvec::SmallVec;

use crate::core::{Board, Side, Slot, SLOT_COUNT};

use super::outcome::{GameOverReason, SowRecord};

/// Games end once this few seeds remain on the board.
pub const LOW_SEED_THRESHOLD: u32 = 3;

/// Board mutation of a single sow, before capture resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sowing {
    /// Last slot to receive a seed.
    pub terminus: Slot,
    /// Number of seeds distributed.
    pub seeds_moved: u32,
}

/// Distribute every seed in `origin` along the turn-order cycle.
///
/// ## Panics
///
/// Panics if `origin` is empty. Callers validate emptiness first; an empty
/// origin here is a programming error, not a user error.
pub fn sow(board: &mut Board, origin: Slot) -> Sowing {
    let seeds = u32::from(board.take(origin));
    assert!(seeds > 0, "sow from empty slot {origin}");

    let start = origin.cycle_index();
    let mut pos = start;
    let mut terminus = origin;

    for _ in 0..seeds {
        pos = (pos + 1) % SLOT_COUNT;
        if pos == start {
            pos = (pos + 1) % SLOT_COUNT;
        }
        terminus = Slot::from_cycle_index(pos);
        board.increment(terminus);
    }

    Sowing {
        terminus,
        seeds_moved: seeds,
    }
}

/// Where the last seed of a sow from `origin` would land, without mutating
/// the board. Returns `None` for an empty origin.
#[must_use]
pub fn terminus_of(board: &Board, origin: Slot) -> Option<Slot> {
    let seeds = u32::from(board.get(origin));
    if seeds == 0 {
        return None;
    }

    let start = origin.cycle_index();
    let mut pos = start;
    for _ in 0..seeds {
        pos = (pos + 1) % SLOT_COUNT;
        if pos == start {
            pos = (pos + 1) % SLOT_COUNT;
        }
    }
    Some(Slot::from_cycle_index(pos))
}

/// Whether a sow ending at `terminus` captures for `mover`.
///
/// Reads the post-sow board: the terminus count already includes the last
/// seed, and must be 1 or 2 on an opponent slot.
#[must_use]
pub fn capture_triggered(board: &Board, terminus: Slot, mover: Side) -> bool {
    terminus.side() != mover && (1..=2).contains(&board.get(terminus))
}

/// Empty a chain of opponent slots, walking the cycle backward from `start`.
///
/// Stops at the first slot holding more than 3 seeds or owned by
/// `capturer`. Returns the emptied slots in harvest order and the total
/// seeds taken.
pub fn harvest(board: &mut Board, start: Slot, capturer: Side) -> (SmallVec<[Slot; 4]>, u32) {
    let mut captured = SmallVec::new();
    let mut points = 0u32;
    let mut pos = start.cycle_index();

    loop {
        let slot = Slot::from_cycle_index(pos);
        // The capturer's six slots are contiguous in the cycle, so this
        // break is reached within one lap.
        if slot.side() == capturer || board.get(slot) > 3 {
            break;
        }
        points += u32::from(board.take(slot));
        captured.push(slot);
        pos = (pos + SLOT_COUNT - 1) % SLOT_COUNT;
    }

    (captured, points)
}

/// Run one full move: sow from `origin`, then resolve any capture.
///
/// The mover is the side owning `origin`; callers have already validated
/// ownership and non-emptiness.
pub fn apply_move(board: &mut Board, origin: Slot) -> SowRecord {
    let mover = origin.side();
    let sowing = sow(board, origin);

    let (captured, points) = if capture_triggered(board, sowing.terminus, mover) {
        harvest(board, sowing.terminus, mover)
    } else {
        (SmallVec::new(), 0)
    };

    SowRecord {
        origin,
        seeds_moved: sowing.seeds_moved,
        terminus: sowing.terminus,
        captured,
        points,
    }
}

/// Check the board-driven terminal conditions.
///
/// `ForcedTermination` is never produced here; only the session handle can
/// signal it.
#[must_use]
pub fn check_terminal(board: &Board) -> Option<GameOverReason> {
    if board.is_empty() {
        Some(GameOverReason::BoardFullyEmpty)
    } else if board.total_seeds() <= LOW_SEED_THRESHOLD {
        Some(GameOverReason::LowSeedTermination)
    } else {
        None
    }
}
