//! Ruleset trait for game variants.
//!
//! Games implement `Ruleset` to define:
//! - The starting layout and per-turn limit
//! - Legal moves for a pile collection
//! - The misère outcome of a finished game
//!
//! The turn orchestrator calls into `Ruleset` but never interprets
//! variant-specific rules directly.

pub mod engine;

pub use engine::{GameResult, Ruleset};
