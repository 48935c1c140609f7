//! Simple Nim.
//!
//! - One pile of 21 matches
//! - On your turn take 1 to 4 matches, never more than are left
//! - Whoever takes the last match loses
//!
//! The computer plays the complement strategy.

mod game;

pub use game::SimpleNim;
