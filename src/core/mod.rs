//! Core value types: slots, sides, board, players, RNG.
//!
//! These are the building blocks the rules engine operates on. Nothing here
//! knows about sowing or captures; the `rules` module owns those.

pub mod board;
pub mod player;
pub mod rng;
pub mod slot;

pub use board::{Board, INITIAL_SEEDS, TOTAL_SEEDS};
pub use player::{update_leading, Player, SideMap};
pub use rng::{GameRng, GameRngState};
pub use slot::{Side, Slot, SIDE_LEN, SLOT_COUNT};
