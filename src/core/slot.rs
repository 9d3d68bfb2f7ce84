//! Slot and side identification.
//!
//! ## Slot
//!
//! One of the 12 fixed board positions, labeled `A`-`L`. Slots are a closed
//! enum so side/turn-order logic is exhaustiveness-checked and an invalid
//! slot is unrepresentable past the parsing boundary.
//!
//! ## Turn order
//!
//! Sowing and harvesting walk a fixed cycle over all 12 slots:
//!
//! ```text
//! F E D C B A G H I J K L   (then wraps back to F)
//! ```
//!
//! Sowing steps forward through this cycle (counter-clockwise on a physical
//! board); harvesting steps backward from the sow terminus.
//!
//! ```
//! use awale::core::{Side, Slot};
//!
//! assert_eq!(Slot::A.side(), Side::Upper);
//! assert_eq!(Slot::G.side(), Side::Lower);
//! assert_eq!(Slot::F.cycle_index(), 0);
//! assert_eq!(Slot::from_cycle_index(11), Slot::L);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

/// Number of slots on the board.
pub const SLOT_COUNT: usize = 12;

/// Number of slots per side.
pub const SIDE_LEN: usize = 6;

/// One of the 12 fixed board positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
}

/// All slots in label order.
const ALL: [Slot; SLOT_COUNT] = [
    Slot::A,
    Slot::B,
    Slot::C,
    Slot::D,
    Slot::E,
    Slot::F,
    Slot::G,
    Slot::H,
    Slot::I,
    Slot::J,
    Slot::K,
    Slot::L,
];

/// The turn-order cycle: upper side walked F->A, then lower side G->L.
const CYCLE: [Slot; SLOT_COUNT] = [
    Slot::F,
    Slot::E,
    Slot::D,
    Slot::C,
    Slot::B,
    Slot::A,
    Slot::G,
    Slot::H,
    Slot::I,
    Slot::J,
    Slot::K,
    Slot::L,
];

impl Slot {
    /// Iterate over all 12 slots in label order (A-L).
    pub fn all() -> impl Iterator<Item = Slot> {
        ALL.into_iter()
    }

    /// Parse a raw input token into a slot.
    ///
    /// Accepts a single letter `A`-`L`, case-insensitive, ignoring
    /// surrounding whitespace. Anything else fails with
    /// [`MoveError::InvalidSlot`] carrying the rejected token.
    pub fn parse(token: &str) -> Result<Slot, MoveError> {
        let trimmed = token.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => match c.to_ascii_uppercase() {
                'A' => Ok(Slot::A),
                'B' => Ok(Slot::B),
                'C' => Ok(Slot::C),
                'D' => Ok(Slot::D),
                'E' => Ok(Slot::E),
                'F' => Ok(Slot::F),
                'G' => Ok(Slot::G),
                'H' => Ok(Slot::H),
                'I' => Ok(Slot::I),
                'J' => Ok(Slot::J),
                'K' => Ok(Slot::K),
                'L' => Ok(Slot::L),
                _ => Err(MoveError::InvalidSlot(trimmed.to_string())),
            },
            _ => Err(MoveError::InvalidSlot(trimmed.to_string())),
        }
    }

    /// Index in label order: A=0 .. L=11.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Position of this slot in the turn-order cycle.
    #[must_use]
    pub fn cycle_index(self) -> usize {
        // CYCLE is a permutation of ALL, so the position always exists.
        CYCLE.iter().position(|&s| s == self).unwrap_or(0)
    }

    /// Slot at the given turn-order cycle position.
    ///
    /// ## Panics
    ///
    /// Panics if `index >= 12`.
    #[must_use]
    pub fn from_cycle_index(index: usize) -> Slot {
        CYCLE[index]
    }

    /// Which side owns this slot: A-F upper, G-L lower.
    #[must_use]
    pub const fn side(self) -> Side {
        if (self as usize) < SIDE_LEN {
            Side::Upper
        } else {
            Side::Lower
        }
    }

    /// Single-letter label.
    #[must_use]
    pub const fn label(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One of the two fixed sides of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Slots A-F.
    Upper,
    /// Slots G-L.
    Lower,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Upper => Side::Lower,
            Side::Lower => Side::Upper,
        }
    }

    /// The ordered 6-slot sequence owned by this side.
    #[must_use]
    pub const fn slots(self) -> [Slot; SIDE_LEN] {
        match self {
            Side::Upper => [Slot::A, Slot::B, Slot::C, Slot::D, Slot::E, Slot::F],
            Side::Lower => [Slot::G, Slot::H, Slot::I, Slot::J, Slot::K, Slot::L],
        }
    }

    /// Both sides, upper first.
    #[must_use]
    pub const fn both() -> [Side; 2] {
        [Side::Upper, Side::Lower]
    }

    /// Index used for per-side storage: upper=0, lower=1.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Upper => write!(f, "upper"),
            Side::Lower => write!(f, "lower"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_all_labels() {
        for slot in Slot::all() {
            let upper = slot.label().to_string();
            let lower = slot.label().to_ascii_lowercase().to_string();
            assert_eq!(Slot::parse(&upper), Ok(slot));
            assert_eq!(Slot::parse(&lower), Ok(slot));
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Slot::parse("  c "), Ok(Slot::C));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for token in ["", "M", "Z", "AB", "1", "slot A"] {
            assert!(matches!(
                Slot::parse(token),
                Err(MoveError::InvalidSlot(_))
            ));
        }
    }

    #[test]
    fn test_cycle_is_a_permutation() {
        let mut seen = [false; SLOT_COUNT];
        for i in 0..SLOT_COUNT {
            seen[Slot::from_cycle_index(i).index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_cycle_index_round_trips() {
        for slot in Slot::all() {
            assert_eq!(Slot::from_cycle_index(slot.cycle_index()), slot);
        }
    }

    #[test]
    fn test_cycle_order_matches_board_layout() {
        // Upper side is walked F down to A, then the lower side G up to L.
        assert_eq!(Slot::F.cycle_index(), 0);
        assert_eq!(Slot::A.cycle_index(), 5);
        assert_eq!(Slot::G.cycle_index(), 6);
        assert_eq!(Slot::L.cycle_index(), 11);
    }

    #[test]
    fn test_side_ownership() {
        for slot in Side::Upper.slots() {
            assert_eq!(slot.side(), Side::Upper);
        }
        for slot in Side::Lower.slots() {
            assert_eq!(slot.side(), Side::Lower);
        }
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Upper.opponent(), Side::Lower);
        assert_eq!(Side::Lower.opponent(), Side::Upper);
    }

    #[test]
    fn test_display() {
        assert_eq!(Slot::A.to_string(), "A");
        assert_eq!(Slot::L.to_string(), "L");
        assert_eq!(Side::Upper.to_string(), "upper");
    }

    #[test]
    fn test_slot_serde() {
        let json = serde_json::to_string(&Slot::D).unwrap();
        let back: Slot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Slot::D);
    }
}
