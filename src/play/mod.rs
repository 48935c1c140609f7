//! Running a game: the turn state machine and the driver seam.
//!
//! ## Usage
//!
//! ```rust
//! use rust_nim::core::{GameConfig, Move, PlayerId, Variant};
//! use rust_nim::play::{Match, ScriptedMoves, TurnPhase};
//!
//! let config = GameConfig::human_vs_computer(Variant::SimpleNim, "Alice")
//!     .opened_by(PlayerId::new(0));
//! let mut game = Match::from_config(&config).unwrap();
//!
//! // Alice takes 3, the computer answers with 2.
//! let mut alice = ScriptedMoves::new([Move::new(0, 3)]);
//! game.play_turn(&mut alice).unwrap();
//! let outcome = game.play_computer_turn().unwrap();
//!
//! assert_eq!(outcome.record.mv, Move::new(0, 2));
//! assert_eq!(outcome.phase, TurnPhase::AwaitingMove(PlayerId::new(0)));
//! assert_eq!(game.state().piles().as_slice(), &[16]);
//! ```

pub mod orchestrator;
pub mod source;

pub use orchestrator::{Match, TurnOutcome, TurnPhase};
pub use source::{MoveSource, ScriptedMoves};
