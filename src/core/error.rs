//! Error taxonomy for the engine.
//!
//! - `MoveError`: a proposed move breaks a rule. Recoverable; the driver
//!   asks for another move and the game state is untouched.
//! - `IllegalState`: the caller broke the engine's contract (asked the
//!   strategy to move on an empty board, moved out of turn, ...).
//! - `AcquireError`: a driver-side move source could not produce a move.
//!
//! `GameError` wraps all three for APIs that can hit more than one.

use super::player::PlayerId;

/// A proposed move breaks a rule. Carries which constraint failed so the
/// driver can build a precise retry prompt.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("pile {pile} does not exist (there are {pile_count} piles)")]
    PileOutOfRange { pile: usize, pile_count: usize },

    #[error("pile {pile} is already empty")]
    EmptyPile { pile: usize },

    #[error("at least one match must be removed")]
    ZeroCount,

    #[error("at most {limit} matches may be removed per turn (asked for {count})")]
    ExceedsTurnLimit { count: u32, limit: u32 },

    #[error("pile {pile} only holds {available} matches (asked for {count})")]
    ExceedsPile {
        pile: usize,
        count: u32,
        available: u32,
    },
}

/// Contract violations. These are programming errors in the driver, not
/// player mistakes, and are not meant to be retried.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum IllegalState {
    #[error("every pile is empty, there is no move to make")]
    AllPilesEmpty,

    #[error("the game is over ({loser} lost)")]
    GameOver { loser: PlayerId },

    #[error("it is {expected}'s turn, not {actual}'s")]
    OutOfTurn { expected: PlayerId, actual: PlayerId },

    #[error("{0} is not computer-controlled")]
    NotComputerControlled(PlayerId),

    #[error("a game needs exactly 2 players, got {0}")]
    PlayerCount(usize),

    #[error("{0} has no seat in this match")]
    UnknownPlayer(PlayerId),
}

/// A move source gave up without producing a move.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum AcquireError {
    #[error("no more moves available from {0}")]
    Exhausted(PlayerId),

    #[error("could not read a move: {0}")]
    Unreadable(String),
}

/// Any error the engine can report.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),

    #[error("illegal state: {0}")]
    IllegalState(#[from] IllegalState),

    #[error("move unavailable: {0}")]
    MoveUnavailable(#[from] AcquireError),
}

impl GameError {
    /// True if the driver should ask for another move.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidMove(_))
    }
}
