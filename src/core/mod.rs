//! Core engine types: piles, moves, players, state, RNG, configuration, errors.
//!
//! Nothing in here knows about strategies or turn orchestration; the
//! per-variant rules live in `rules` and `games`.

pub mod action;
pub mod config;
pub mod error;
pub mod piles;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord};
pub use config::{
    GameConfig, Opener, Variant, MARIENBAD_PILES, SIMPLE_NIM_MATCHES, SIMPLE_NIM_TURN_LIMIT,
};
pub use error::{AcquireError, GameError, IllegalState, MoveError};
pub use piles::Piles;
pub use player::{Controller, Participant, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::GameState;
