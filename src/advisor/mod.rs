//! Heuristic move selection for the automated opponent.
//!
//! A one-ply greedy policy: simulate each candidate sow on a copy of the
//! board and score it by the capture yield it would collect immediately.
//! When no candidate has an edge (every yield is equal, typically all
//! zero), the choice falls back to a uniform random pick among the
//! non-empty slots so the opponent has no deterministic pattern to
//! exploit. The random source is injected, so a fixed seed gives
//! reproducible games.

use crate::core::{Board, GameRng, Side, Slot};
use crate::rules::apply_move;

use serde::{Deserialize, Serialize};

/// What the advisor proposes for a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advice {
    /// Sow this slot.
    Play(Slot),
    /// The side has no non-empty slot; its turn must pass.
    Skip,
}

/// Immediate capture yield of sowing `origin` on a copy of the board.
///
/// Zero when the sow ends on the mover's own side or no capture triggers.
#[must_use]
pub fn capture_yield(board: &Board, origin: Slot) -> u32 {
    let mut scratch = *board;
    apply_move(&mut scratch, origin).points
}

/// Propose a slot for `side` to sow.
pub fn advise(board: &Board, side: Side, rng: &mut GameRng) -> Advice {
    let candidates: Vec<Slot> = side
        .slots()
        .into_iter()
        .filter(|&slot| board.get(slot) > 0)
        .collect();

    if candidates.is_empty() {
        return Advice::Skip;
    }

    let yields: Vec<u32> = candidates
        .iter()
        .map(|&slot| capture_yield(board, slot))
        .collect();

    let best = yields.iter().copied().max().unwrap_or(0);
    let worst = yields.iter().copied().min().unwrap_or(0);

    if best == worst {
        // Nothing to gain anywhere; pick uniformly at random.
        let index = rng.gen_range_usize(0..candidates.len());
        return Advice::Play(candidates[index]);
    }

    let choice = candidates
        .iter()
        .zip(&yields)
        .max_by_key(|(_, &points)| points)
        .map(|(&slot, _)| slot)
        .unwrap_or(candidates[0]);

    Advice::Play(choice)
}
