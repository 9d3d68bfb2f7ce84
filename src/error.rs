use crate::core::{Side, Slot};

/// Errors a submitted move can be rejected with.
///
/// All variants are recoverable: the board is untouched, the turn counter
/// does not advance, and the same side is asked to move again. Terminal
/// game states are not errors; they are reported through
/// [`GameOverReason`](crate::rules::GameOverReason).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("'{0}' is not a valid slot (expected a letter A-L)")]
    InvalidSlot(String),

    #[error("slot {slot} does not belong to the {side} side")]
    NotYourSlot { slot: Slot, side: Side },

    #[error("slot {slot} is empty")]
    EmptySlot { slot: Slot },
}
