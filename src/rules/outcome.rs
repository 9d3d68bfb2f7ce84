//! Structured results of turn processing.
//!
//! Every outcome carries enough detail for an external renderer to
//! reproduce its informational messages: which slot was sown, where the
//! last seed landed, which slots a capture chain emptied and for how many
//! points. The engine itself performs no presentation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Side, Slot};

/// Result of one completed sow, including any capture it triggered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SowRecord {
    /// Slot the seeds were taken from.
    pub origin: Slot,

    /// Number of seeds distributed.
    pub seeds_moved: u32,

    /// Last slot to receive a seed.
    pub terminus: Slot,

    /// Slots emptied by the capture chain, in harvest order.
    /// Empty when no capture occurred.
    pub captured: SmallVec<[Slot; 4]>,

    /// Total seeds captured (0 if no capture).
    pub points: u32,
}

impl SowRecord {
    /// Whether this sow triggered a capture.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

/// What happened when a turn was processed.
///
/// `Skipped` is deliberately its own variant rather than a sentinel slot
/// value: no user token parses into it, and it never appears in a table of
/// playable slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A sow completed (possibly with a capture).
    Sowed(SowRecord),
    /// The side to move had no legal move; the turn passed silently.
    Skipped { side: Side },
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Every slot on the board is empty.
    BoardFullyEmpty,
    /// Three or fewer seeds remain; too few for meaningful play.
    LowSeedTermination,
    /// The driver signaled an external forcing condition.
    ForcedTermination,
}

impl std::fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOverReason::BoardFullyEmpty => write!(f, "the board is empty"),
            GameOverReason::LowSeedTermination => write!(f, "too few seeds remain"),
            GameOverReason::ForcedTermination => write!(f, "the game was ended externally"),
        }
    }
}

/// What the coordinator reports at the top of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnStart {
    /// The given side must submit a move.
    Move(Side),
    /// The given side had no seeds; its turn passed without a move.
    Skipped(Side),
    /// The game is over; no further moves are accepted.
    Over(GameOverReason),
}
