//! Game rules: sowing, captures, terminal detection, outcome records.
//!
//! The rules are free functions over [`Board`](crate::core::Board) values;
//! the `game` module sequences them into turns.

pub mod engine;
pub mod outcome;

pub use engine::{
    apply_move, capture_triggered, check_terminal, harvest, sow, terminus_of, Sowing,
    LOW_SEED_THRESHOLD,
};
pub use outcome::{GameOverReason, MoveOutcome, SowRecord, TurnStart};
