//! # awale
//!
//! Rules engine for Awalé, a two-player Mancala variant: 12 slots in two
//! opposing rows of 6, seeds sown counter-clockwise, captures triggered by
//! landing on low-count opponent slots.
//!
//! The crate is engine-only. It exposes observable state and structured
//! move outcomes so an external driver can prompt, render, and pace the
//! game; no presentation happens here.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: one [`Game`] value owns a session; rules are
//!    free functions over [`Board`] values, unit-testable without a
//!    session.
//!
//! 2. **Closed slot type**: [`Slot`] is an enum, so side and turn-order
//!    logic is exhaustiveness-checked and invalid slots stop at the
//!    parsing boundary.
//!
//! 3. **Injected randomness**: the first-mover draw and the advisor's
//!    tie-break go through a seedable [`GameRng`]; a fixed seed gives a
//!    fully reproducible game.
//!
//! ## Modules
//!
//! - `core`: slots, sides, board, players, RNG
//! - `rules`: sowing, chain captures, terminal detection, outcome records
//! - `advisor`: heuristic move selection for the automated opponent
//! - `game`: session handle and turn coordinator
//! - `error`: recoverable move-rejection errors

pub mod advisor;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    update_leading, Board, GameRng, GameRngState, Player, Side, SideMap, Slot, INITIAL_SEEDS,
    SIDE_LEN, SLOT_COUNT, TOTAL_SEEDS,
};

pub use crate::rules::{
    apply_move, capture_triggered, check_terminal, harvest, sow, terminus_of, GameOverReason,
    MoveOutcome, SowRecord, Sowing, TurnStart, LOW_SEED_THRESHOLD,
};

pub use crate::advisor::{advise, capture_yield, Advice};

pub use crate::game::{Game, ScoreEntry};

pub use crate::error::MoveError;
