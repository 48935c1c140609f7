//! Marienbad.
//!
//! - Four piles of 1, 3, 5 and 7 matches
//! - On your turn take any number of matches from a single pile
//! - Whoever takes the last match loses
//!
//! The computer plays the Nim-sum strategy.

mod game;

pub use game::Marienbad;
