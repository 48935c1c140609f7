//! Where human moves come from.
//!
//! The engine never reads input itself. A driver implements `MoveSource`
//! (keyboard prompt, network peer, test script) and hands it to
//! `Match::play_turn`. Each call is a single bounded attempt: it returns a
//! move or a reason it could not. Re-asking after a rejected move is the
//! driver's loop.

use std::collections::VecDeque;

use crate::core::{AcquireError, GameState, Move, PlayerId};

/// Produces a move for a human-controlled player.
pub trait MoveSource {
    /// Ask `player` for a move in `state`.
    fn acquire_move(&mut self, state: &GameState, player: PlayerId) -> Result<Move, AcquireError>;
}

impl<F> MoveSource for F
where
    F: FnMut(&GameState, PlayerId) -> Result<Move, AcquireError>,
{
    fn acquire_move(&mut self, state: &GameState, player: PlayerId) -> Result<Move, AcquireError> {
        self(state, player)
    }
}

/// Replays a fixed list of moves, one per call, whoever asks.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<Move>,
}

impl ScriptedMoves {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn acquire_move(&mut self, _state: &GameState, player: PlayerId) -> Result<Move, AcquireError> {
        self.moves.pop_front().ok_or(AcquireError::Exhausted(player))
    }
}
