//! The strategy seam.
//!
//! A strategy picks the computer's move. It is a pure function of the
//! game state: no I/O, no hidden state between calls.

use crate::core::{GameError, GameState, Move};

/// Chooses the computer's move.
pub trait Strategy: Send + Sync {
    /// Pick a legal move for the active player.
    ///
    /// Must not be called on a terminal state; implementations report
    /// `IllegalState::AllPilesEmpty` if it is.
    fn choose_move(&self, state: &GameState) -> Result<Move, GameError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn choose_move(&self, state: &GameState) -> Result<Move, GameError> {
        (**self).choose_move(state)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
