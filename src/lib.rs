//! # rust-nim
//!
//! Engine for match-removal games: simple Nim (one pile of 21, take 1 to 4)
//! and Marienbad (piles of 1, 3, 5, 7, take any amount from one pile).
//! Both are played misère: whoever takes the last match loses.
//!
//! ## Design Principles
//!
//! 1. **No I/O**: The engine never reads input or prints. A driver supplies
//!    moves and reads results from return values.
//!
//! 2. **Single Owner**: `GameState` owns the piles; every change goes
//!    through a validated `apply_move`.
//!
//! 3. **Pure Strategies**: The computer's move is a pure function of the
//!    state, chosen per variant behind the `Strategy` trait.
//!
//! ## Modules
//!
//! - `core`: Piles, moves, players, state, configuration, errors
//! - `rules`: `Ruleset` trait and game results
//! - `games`: The built-in variants
//! - `strategy`: Complement and Nim-sum computer play
//! - `play`: Turn orchestration and the move-source seam

pub mod core;
pub mod games;
pub mod play;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    AcquireError, Controller, GameConfig, GameError, GameRng, GameState, IllegalState, Move,
    MoveError, MoveRecord, Opener, Participant, Piles, PlayerId, PlayerMap, Variant,
};

pub use crate::rules::{GameResult, Ruleset};

pub use crate::games::{ruleset_for, Marienbad, SimpleNim};

pub use crate::strategy::{
    compute_computer_move, nim_sum, ComplementStrategy, NimSumStrategy, Strategy,
};

pub use crate::play::{Match, MoveSource, ScriptedMoves, TurnOutcome, TurnPhase};
