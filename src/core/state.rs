//! Game state: the piles, whose turn it is, and the moves made so far.
//!
//! `GameState` owns its `Piles` exclusively. Callers read the piles
//! through `piles()` and change them only through `apply_move`, so the
//! move log always explains how the table got to where it is.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Move, MoveRecord};
use super::piles::Piles;
use super::player::PlayerId;

/// State of one game.
///
/// Uses an `im` vector for the move log so cloning a state (e.g. to try a
/// move out in a strategy) is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    piles: Piles,

    /// Active player (whose turn it is).
    active_player: PlayerId,

    /// Turn number (starts at 1, one turn per move).
    turn_number: u32,

    /// Moves applied so far, oldest first.
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a new game state with `opener` to move.
    #[must_use]
    pub fn new(piles: Piles, opener: PlayerId) -> Self {
        Self {
            piles,
            active_player: opener,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The most recent move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// True once every pile is empty.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.piles.is_terminal()
    }

    /// Apply a validated move for the active player and record it.
    ///
    /// Does not pass the turn; see `pass_turn`.
    pub fn apply_move(&mut self, mv: Move) -> MoveRecord {
        self.piles.apply_move(mv);

        let record = MoveRecord::new(self.active_player, mv, self.turn_number);
        self.history.push_back(record);
        record
    }

    /// Hand the turn to the other player.
    pub fn pass_turn(&mut self) {
        self.active_player = self.active_player.other();
        self.turn_number += 1;
    }
}
