//! Ruleset trait for game variants.
//!
//! Games implement `Ruleset` to define their rules:
//! - Starting layout and per-turn limit
//! - Which moves are legal
//! - How a finished game is scored
//! - Which strategy the computer plays

use crate::core::{GameState, Move, MoveError, MoveRecord, Piles, PlayerId, Variant};
use crate::strategy::Strategy;

/// Result of a completed game.
///
/// Every variant is played misère: whoever empties the last pile loses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// The player who took the last match.
    pub loser: PlayerId,
}

impl GameResult {
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        self.loser.other()
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == player
    }
}

/// Rules of one variant.
///
/// ## Implementation Notes
///
/// - `turn_limit`: `None` means a whole pile may be taken at once
/// - `apply_move`: validates first and leaves the state untouched on error
/// - `outcome`: `None` while any pile holds matches
pub trait Ruleset {
    /// Which built-in variant this is.
    fn variant(&self) -> Variant;

    /// The layout a new game starts from.
    fn initial_piles(&self) -> Piles {
        self.variant().initial_piles()
    }

    /// Per-turn cap on matches taken.
    fn turn_limit(&self) -> Option<u32> {
        self.variant().turn_limit()
    }

    /// The strategy the computer plays in this variant.
    fn strategy(&self) -> Box<dyn Strategy>;

    // === Convenience Methods ===

    /// Check a move against the current piles.
    fn validate_move(&self, piles: &Piles, mv: Move) -> Result<(), MoveError> {
        piles.validate_move(mv, self.turn_limit())
    }

    /// Enumerate all legal moves.
    fn legal_moves(&self, piles: &Piles) -> Vec<Move> {
        piles.legal_moves(self.turn_limit())
    }

    /// Validate and apply a move for the active player.
    ///
    /// Does not pass the turn.
    fn apply_move(&self, state: &mut GameState, mv: Move) -> Result<MoveRecord, MoveError> {
        self.validate_move(state.piles(), mv)?;
        Ok(state.apply_move(mv))
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` once every pile is empty, `None` otherwise.
    /// A table that starts empty has no loser and also yields `None`.
    fn outcome(&self, state: &GameState) -> Option<GameResult> {
        if !state.is_terminal() {
            return None;
        }
        state.last_move().map(|record| GameResult {
            loser: record.player,
        })
    }
}

impl<R: Ruleset + ?Sized> Ruleset for Box<R> {
    fn variant(&self) -> Variant {
        (**self).variant()
    }

    fn initial_piles(&self) -> Piles {
        (**self).initial_piles()
    }

    fn turn_limit(&self) -> Option<u32> {
        (**self).turn_limit()
    }

    fn strategy(&self) -> Box<dyn Strategy> {
        (**self).strategy()
    }

    fn validate_move(&self, piles: &Piles, mv: Move) -> Result<(), MoveError> {
        (**self).validate_move(piles, mv)
    }

    fn legal_moves(&self, piles: &Piles) -> Vec<Move> {
        (**self).legal_moves(piles)
    }

    fn apply_move(&self, state: &mut GameState, mv: Move) -> Result<MoveRecord, MoveError> {
        (**self).apply_move(state, mv)
    }

    fn outcome(&self, state: &GameState) -> Option<GameResult> {
        (**self).outcome(state)
    }
}
