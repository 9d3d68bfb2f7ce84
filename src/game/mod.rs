//! Game session: the handle a driver plays through.
//!
//! [`Game`] owns the whole state of one in-memory session (board, players,
//! turn counter, RNG) and sequences the rules into turns. The expected
//! driver loop:
//!
//! ```
//! use awale::{Advice, Game, TurnStart};
//!
//! let mut game = Game::new("Laure", "Sam", 42);
//! let mut quiet_moves = 0;
//!
//! loop {
//!     match game.begin_turn() {
//!         TurnStart::Over(_) => break,
//!         TurnStart::Skipped(_) => continue,
//!         TurnStart::Move(_) => {
//!             // A human driver would prompt here; this one always asks
//!             // the advisor.
//!             match game.request_automated_move() {
//!                 Advice::Play(slot) => {
//!                     let record = game.submit_move(slot).expect("advisor picks legal moves");
//!                     quiet_moves = if record.is_capture() { 0 } else { quiet_moves + 1 };
//!                     if quiet_moves > 100 {
//!                         game.signal_forced_termination();
//!                     }
//!                 }
//!                 Advice::Skip => unreachable!("begin_turn already handled it"),
//!             }
//!         }
//!     }
//! }
//!
//! assert!(game.is_terminal().is_some());
//! ```
//!
//! Rejected moves (`InvalidSlot`, `NotYourSlot`, `EmptySlot`) leave every
//! piece of state untouched, including the turn counter: the same side is
//! asked again. A sow is atomic; validation completes before any mutation
//! begins.

use serde::{Deserialize, Serialize};

use crate::advisor::{advise, Advice};
use crate::core::{update_leading, Board, GameRng, Player, Side, SideMap, Slot};
use crate::error::MoveError;
use crate::rules::{
    apply_move, check_terminal, GameOverReason, MoveOutcome, SowRecord, TurnStart,
};

/// One player's line in the score report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    /// Strictly ahead on score; on a tie neither side leads.
    pub leading: bool,
}

/// A single in-memory game session.
///
/// All mutation flows through [`Game::submit_move`], [`Game::begin_turn`],
/// and [`Game::signal_forced_termination`]; everything else is read-only.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    players: SideMap<Player>,
    first_side: Side,
    turn_count: u32,
    rng: GameRng,
    over: Option<GameOverReason>,
}

impl Game {
    /// Start a fresh game: fully seeded board, first mover drawn from the
    /// seeded RNG.
    #[must_use]
    pub fn new(upper_name: impl Into<String>, lower_name: impl Into<String>, seed: u64) -> Self {
        Self::from_position(upper_name, lower_name, seed, Board::new(), None)
    }

    /// Start from a crafted position, optionally forcing the first mover.
    ///
    /// Used by tests and simulations; `Game::new` is the normal entry.
    #[must_use]
    pub fn from_position(
        upper_name: impl Into<String>,
        lower_name: impl Into<String>,
        seed: u64,
        board: Board,
        first_side: Option<Side>,
    ) -> Self {
        let mut rng = GameRng::new(seed);
        let first_side = first_side.unwrap_or(if rng.gen_bool(0.5) {
            Side::Upper
        } else {
            Side::Lower
        });

        let upper = upper_name.into();
        let lower = lower_name.into();
        let players = SideMap::new(|side| match side {
            Side::Upper => Player::new(upper.clone(), side),
            Side::Lower => Player::new(lower.clone(), side),
        });

        Self {
            board,
            players,
            first_side,
            turn_count: 0,
            rng,
            over: None,
        }
    }

    // === Read-only queries ===

    /// The side whose turn it is.
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        if self.turn_count % 2 == 0 {
            self.first_side
        } else {
            self.first_side.opponent()
        }
    }

    /// Current seed count in a slot.
    #[must_use]
    pub fn slot_count(&self, slot: Slot) -> u8 {
        self.board.get(slot)
    }

    /// The full board, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Completed turns, including skipped ones.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// The player on a side.
    #[must_use]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side]
    }

    /// Name, score, and leading flag for both sides.
    #[must_use]
    pub fn scores(&self) -> SideMap<ScoreEntry> {
        SideMap::new(|side| {
            let player = &self.players[side];
            ScoreEntry {
                name: player.name().to_string(),
                score: player.score(),
                leading: player.is_leading(),
            }
        })
    }

    /// `Some(reason)` once the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> Option<GameOverReason> {
        self.over
    }

    // === Turn sequencing ===

    /// Open the next turn.
    ///
    /// Handles the forced-skip rule: a side with no seeds cannot move, so
    /// its turn passes silently. The turn counter still advances and the
    /// terminal conditions are re-checked, exactly as after a real move.
    pub fn begin_turn(&mut self) -> TurnStart {
        if let Some(reason) = self.over {
            return TurnStart::Over(reason);
        }

        let side = self.side_to_move();
        if self.board.is_side_empty(side) {
            self.turn_count += 1;
            self.over = check_terminal(&self.board);
            return TurnStart::Skipped(side);
        }

        TurnStart::Move(side)
    }

    /// Submit a move for the side to move.
    ///
    /// Re-validates what the driver should already have checked: the slot
    /// must belong to the mover (`NotYourSlot`) and hold seeds
    /// (`EmptySlot`). On success the sow and any capture run atomically,
    /// the capturer is credited, leading flags are recomputed, the turn
    /// advances, and terminal conditions are checked.
    ///
    /// ## Panics
    ///
    /// Panics if called after the game is over; drivers gate on
    /// [`Game::begin_turn`] first.
    pub fn submit_move(&mut self, slot: Slot) -> Result<SowRecord, MoveError> {
        assert!(self.over.is_none(), "move submitted after game over");

        let side = self.side_to_move();
        if slot.side() != side {
            return Err(MoveError::NotYourSlot { slot, side });
        }
        if self.board.get(slot) == 0 {
            return Err(MoveError::EmptySlot { slot });
        }

        let record = apply_move(&mut self.board, slot);
        self.players[side].add_points(record.points);
        update_leading(&mut self.players);

        self.turn_count += 1;
        self.over = check_terminal(&self.board);

        Ok(record)
    }

    /// Parse a raw input token and submit it as a move.
    ///
    /// The extra failure mode over [`Game::submit_move`] is
    /// [`MoveError::InvalidSlot`] for tokens that are not slot labels.
    pub fn submit_token(&mut self, token: &str) -> Result<SowRecord, MoveError> {
        let slot = Slot::parse(token)?;
        self.submit_move(slot)
    }

    /// Ask the advisor for the side to move.
    ///
    /// Does not apply anything; the driver feeds the proposed slot back
    /// through [`Game::submit_move`]. `Advice::Skip` means the side has no
    /// legal move, the same situation [`Game::begin_turn`] reports as
    /// [`TurnStart::Skipped`].
    pub fn request_automated_move(&mut self) -> Advice {
        advise(&self.board, self.side_to_move(), &mut self.rng)
    }

    /// Run one automated turn end to end: skip handling, advice, sow.
    ///
    /// Returns what happened so the driver can render it after its pacing
    /// delay, or `None` once the game is over. Equivalent to
    /// [`Game::begin_turn`] followed by [`Game::request_automated_move`]
    /// and [`Game::submit_move`].
    pub fn play_automated_turn(&mut self) -> Option<MoveOutcome> {
        match self.begin_turn() {
            TurnStart::Over(_) => None,
            TurnStart::Skipped(side) => Some(MoveOutcome::Skipped { side }),
            TurnStart::Move(_) => {
                let slot = match self.request_automated_move() {
                    Advice::Play(slot) => slot,
                    // begin_turn already skipped an empty side.
                    Advice::Skip => unreachable!("advisor skipped a non-empty side"),
                };
                match self.submit_move(slot) {
                    Ok(record) => Some(MoveOutcome::Sowed(record)),
                    Err(err) => unreachable!("advisor proposed an illegal move: {err}"),
                }
            }
        }
    }

    /// Record an externally signaled end of game, e.g. too many
    /// consecutive non-capturing automated moves or an explicit quit.
    ///
    /// No-op if the game already ended for another reason.
    pub fn signal_forced_termination(&mut self) {
        if self.over.is_none() {
            self.over = Some(GameOverReason::ForcedTermination);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(board: Board, first: Side) -> Game {
        Game::from_position("Up", "Down", 7, board, Some(first))
    }

    #[test]
    fn test_first_mover_is_seed_deterministic() {
        let a = Game::new("Up", "Down", 3);
        let b = Game::new("Up", "Down", 3);
        assert_eq!(a.side_to_move(), b.side_to_move());
    }

    #[test]
    fn test_both_sides_can_start() {
        let mut seen = std::collections::HashSet::new();
        for seed in 0..32 {
            seen.insert(Game::new("Up", "Down", seed).side_to_move());
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_turn_alternates_after_each_move() {
        let mut game = game_with(Board::new(), Side::Upper);

        assert_eq!(game.begin_turn(), TurnStart::Move(Side::Upper));
        game.submit_move(Slot::A).unwrap();
        assert_eq!(game.side_to_move(), Side::Lower);

        assert_eq!(game.begin_turn(), TurnStart::Move(Side::Lower));
        game.submit_move(Slot::G).unwrap();
        assert_eq!(game.side_to_move(), Side::Upper);
        assert_eq!(game.turn_count(), 2);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = game_with(Board::new(), Side::Upper);
        let board_before = *game.board();

        assert_eq!(
            game.submit_move(Slot::G),
            Err(MoveError::NotYourSlot {
                slot: Slot::G,
                side: Side::Upper,
            })
        );

        assert_eq!(*game.board(), board_before);
        assert_eq!(game.turn_count(), 0);
        assert_eq!(game.side_to_move(), Side::Upper);
    }

    #[test]
    fn test_empty_slot_rejected_without_consuming_turn() {
        let mut board = Board::new();
        board.set(Slot::C, 0);
        let mut game = game_with(board, Side::Upper);

        assert_eq!(
            game.submit_move(Slot::C),
            Err(MoveError::EmptySlot { slot: Slot::C })
        );
        assert_eq!(game.turn_count(), 0);

        // The same side immediately plays a valid slot instead.
        assert!(game.submit_move(Slot::A).is_ok());
        assert_eq!(game.turn_count(), 1);
    }

    #[test]
    fn test_submit_token_parses_and_plays() {
        let mut game = game_with(Board::new(), Side::Lower);

        assert!(matches!(
            game.submit_token("seven"),
            Err(MoveError::InvalidSlot(_))
        ));
        assert_eq!(game.turn_count(), 0);

        let record = game.submit_token(" g ").unwrap();
        assert_eq!(record.origin, Slot::G);
        assert_eq!(game.turn_count(), 1);
    }

    #[test]
    fn test_skip_passes_the_turn_and_counts_it() {
        // Upper has nothing to play; plenty of seeds remain on the board.
        let board = Board::from_counts([0, 0, 0, 0, 0, 0, 4, 4, 4, 4, 4, 4]);
        let mut game = game_with(board, Side::Upper);

        assert_eq!(game.begin_turn(), TurnStart::Skipped(Side::Upper));
        assert_eq!(game.turn_count(), 1);
        assert_eq!(game.side_to_move(), Side::Lower);
        assert_eq!(game.is_terminal(), None);

        assert_eq!(game.begin_turn(), TurnStart::Move(Side::Lower));
    }

    #[test]
    fn test_capture_credits_the_mover_and_updates_leading() {
        // Upper sows A (1 seed) onto G holding 1: captures 2.
        let board = Board::from_counts([1, 4, 4, 4, 4, 4, 1, 8, 8, 8, 8, 8]);
        let mut game = game_with(board, Side::Upper);

        let record = game.submit_move(Slot::A).unwrap();
        assert_eq!(record.points, 2);
        assert_eq!(game.player(Side::Upper).score(), 2);
        assert!(game.player(Side::Upper).is_leading());
        assert!(!game.player(Side::Lower).is_leading());

        let scores = game.scores();
        assert_eq!(scores[Side::Upper].score, 2);
        assert!(scores[Side::Upper].leading);
        assert_eq!(scores[Side::Upper].name, "Up");
    }

    #[test]
    fn test_low_seed_termination_fires_right_after_the_move() {
        // Upper sows A onto G (1 -> 2) and captures it; 3 seeds remain.
        let board = Board::from_counts([1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 3]);
        let mut game = game_with(board, Side::Upper);

        let record = game.submit_move(Slot::A).unwrap();
        assert_eq!(record.points, 2);
        assert_eq!(
            game.is_terminal(),
            Some(GameOverReason::LowSeedTermination)
        );
        assert_eq!(
            game.begin_turn(),
            TurnStart::Over(GameOverReason::LowSeedTermination)
        );
    }

    #[test]
    fn test_forced_termination() {
        let mut game = game_with(Board::new(), Side::Upper);
        game.signal_forced_termination();

        assert_eq!(game.is_terminal(), Some(GameOverReason::ForcedTermination));
        assert_eq!(
            game.begin_turn(),
            TurnStart::Over(GameOverReason::ForcedTermination)
        );
    }

    #[test]
    fn test_forced_termination_does_not_mask_an_earlier_end() {
        let board = Board::from_counts([1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 3]);
        let mut game = game_with(board, Side::Upper);
        game.submit_move(Slot::A).unwrap();

        game.signal_forced_termination();
        assert_eq!(
            game.is_terminal(),
            Some(GameOverReason::LowSeedTermination)
        );
    }

    #[test]
    #[should_panic(expected = "move submitted after game over")]
    fn test_move_after_game_over_panics() {
        let mut game = game_with(Board::new(), Side::Upper);
        game.signal_forced_termination();
        let _ = game.submit_move(Slot::A);
    }

    #[test]
    fn test_automated_move_is_playable() {
        let mut game = game_with(Board::new(), Side::Lower);

        match game.request_automated_move() {
            Advice::Play(slot) => {
                assert_eq!(slot.side(), Side::Lower);
                assert!(game.submit_move(slot).is_ok());
            }
            Advice::Skip => panic!("fresh board always has a move"),
        }
    }

    #[test]
    fn test_play_automated_turn_reports_skip_and_sow() {
        let board = Board::from_counts([0, 0, 0, 0, 0, 0, 4, 4, 4, 4, 4, 4]);
        let mut game = game_with(board, Side::Upper);

        assert_eq!(
            game.play_automated_turn(),
            Some(MoveOutcome::Skipped { side: Side::Upper })
        );

        match game.play_automated_turn() {
            Some(MoveOutcome::Sowed(record)) => assert_eq!(record.origin.side(), Side::Lower),
            other => panic!("lower should have sown, got {other:?}"),
        }

        game.signal_forced_termination();
        assert_eq!(game.play_automated_turn(), None);
    }

    #[test]
    fn test_automated_move_skip_matches_begin_turn() {
        let board = Board::from_counts([0, 0, 0, 0, 0, 0, 4, 4, 4, 4, 4, 4]);
        let mut game = game_with(board, Side::Upper);

        assert_eq!(game.request_automated_move(), Advice::Skip);
        assert_eq!(game.begin_turn(), TurnStart::Skipped(Side::Upper));
    }
}
