//! Nim-sum play for multi-pile games.
//!
//! The Nim-sum of a position is the XOR of its pile sizes. A position with
//! Nim-sum 0 is lost for the player to move under normal play, and from any
//! other position some move brings the Nim-sum back to 0: take the highest
//! set bit of the Nim-sum, pick a pile with that bit set, and XOR it with
//! the Nim-sum. That pile strictly shrinks.
//!
//! Marienbad is played misère (taking the last match loses). The functions
//! here still play normal-play Nim-sum, including the fallback on zero
//! positions, which can misplay the misère endgame.

use log::trace;

use crate::core::{GameError, GameState, IllegalState, Move, Piles};

use super::policy::Strategy;

/// XOR of all pile sizes.
///
/// ```
/// use rust_nim::strategy::nim_sum;
///
/// assert_eq!(nim_sum(&[1, 3, 5, 7]), 0);
/// assert_eq!(nim_sum(&[3, 4, 5]), 2);
/// ```
#[must_use]
pub fn nim_sum(piles: &[u32]) -> u32 {
    piles.iter().fold(0, |acc, &pile| acc ^ pile)
}

/// True if the Nim-sum of the position is 0.
#[must_use]
pub fn is_zero_position(piles: &[u32]) -> bool {
    nim_sum(piles) == 0
}

/// The move that restores a zero Nim-sum, if the position has one.
///
/// Picks the first qualifying pile by ascending index.
#[must_use]
pub fn winning_move(piles: &Piles) -> Option<Move> {
    let sum = nim_sum(piles.as_slice());
    if sum == 0 {
        return None;
    }

    piles
        .as_slice()
        .iter()
        .enumerate()
        .find_map(|(pile, &size)| {
            let target = size ^ sum;
            (target < size).then(|| Move::new(pile, size - target))
        })
}

/// The computer's move on a multi-pile table.
///
/// Restores a zero Nim-sum when possible. On a zero position it takes a
/// single match from the first nonempty pile.
///
/// Fails with `IllegalState::AllPilesEmpty` on an empty table; callers are
/// expected to check `is_terminal` first.
pub fn compute_computer_move(piles: &Piles) -> Result<Move, IllegalState> {
    let first = piles.first_nonempty().ok_or(IllegalState::AllPilesEmpty)?;

    let mv = winning_move(piles).unwrap_or(Move::new(first, 1));
    trace!(
        "nim-sum {} on {:?} -> {:?}",
        nim_sum(piles.as_slice()),
        piles.as_slice(),
        mv
    );
    Ok(mv)
}

/// Strategy wrapper around `compute_computer_move`.
#[derive(Clone, Debug, Default)]
pub struct NimSumStrategy;

impl Strategy for NimSumStrategy {
    fn choose_move(&self, state: &GameState) -> Result<Move, GameError> {
        Ok(compute_computer_move(state.piles())?)
    }

    fn name(&self) -> &'static str {
        "nim-sum"
    }
}
