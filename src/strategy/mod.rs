//! Computer move selection.
//!
//! ## Strategies
//!
//! - `ComplementStrategy`: single pile with a per-turn limit. Keeps every
//!   round at `limit + 1` matches.
//! - `NimSumStrategy`: any number of piles. Moves to a zero Nim-sum when it
//!   can, otherwise takes one match from the first nonempty pile.
//!
//! Each ruleset picks its strategy (`Ruleset::strategy`); a `Match` can be
//! given another one with `with_strategy`.
//!
//! ## Usage
//!
//! ```rust
//! use rust_nim::core::Piles;
//! use rust_nim::strategy::{compute_computer_move, nim_sum};
//!
//! let piles = Piles::new(&[3, 4, 5]);
//! let mv = compute_computer_move(&piles).unwrap();
//!
//! let mut after = piles.clone();
//! after.apply_move(mv);
//! assert_eq!(nim_sum(after.as_slice()), 0);
//! ```

pub mod complement;
pub mod nim_sum;
pub mod policy;

pub use complement::ComplementStrategy;
pub use nim_sum::{compute_computer_move, is_zero_position, nim_sum, winning_move, NimSumStrategy};
pub use policy::Strategy;
