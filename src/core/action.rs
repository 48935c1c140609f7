//! Move representation.
//!
//! A move names one pile and how many matches to take from it. The engine
//! validates moves against the piles (see `Piles::validate_move`); a `Move`
//! value on its own carries no guarantee of legality.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Remove `count` matches from pile `pile` (0-based).
///
/// ```
/// use rust_nim::core::Move;
///
/// let take_two = Move::new(0, 2);
/// assert_eq!(take_two.pile, 0);
/// assert_eq!(take_two.count, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index of the pile to take from.
    pub pile: usize,

    /// Number of matches to remove.
    pub count: u32,
}

impl Move {
    #[must_use]
    pub const fn new(pile: usize, count: u32) -> Self {
        Self { pile, count }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {} from pile {}", self.count, self.pile + 1)
    }
}

/// An applied move with the player who made it.
///
/// The in-game move log is a sequence of these. The complement strategy
/// reads the last entry to answer the opponent's move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made the move.
    pub player: PlayerId,

    /// The move taken.
    pub mv: Move,

    /// Turn number when the move was made (starts at 1).
    pub turn: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, turn: u32) -> Self {
        Self { player, mv, turn }
    }
}
