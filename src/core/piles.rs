//! The pile collection and the rules every variant shares.
//!
//! `Piles` is an ordered list of match counts. All mutation goes through
//! `apply_move`, which keeps the collection consistent with the moves
//! recorded against it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::Move;
use super::error::MoveError;

/// Ordered match counts, one entry per pile.
///
/// SmallVec keeps both built-in layouts (1 and 4 piles) inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piles(SmallVec<[u32; 4]>);

impl Piles {
    #[must_use]
    pub fn new(counts: &[u32]) -> Self {
        Self(SmallVec::from_slice(counts))
    }

    /// Number of piles (empty ones included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Match count of one pile.
    #[must_use]
    pub fn get(&self, pile: usize) -> Option<u32> {
        self.0.get(pile).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Total matches left on the table.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// True once every pile is empty.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// Index of the first pile that still holds matches.
    #[must_use]
    pub fn first_nonempty(&self) -> Option<usize> {
        self.0.iter().position(|&n| n > 0)
    }

    /// Check a move against the piles.
    ///
    /// `turn_limit` caps how many matches may be taken in one turn
    /// regardless of pile size (`Some(4)` for simple Nim).
    ///
    /// Checks run in order: pile index, empty pile, zero count, turn
    /// limit, pile size. The first failure is reported.
    pub fn validate_move(&self, mv: Move, turn_limit: Option<u32>) -> Result<(), MoveError> {
        let available = self.get(mv.pile).ok_or(MoveError::PileOutOfRange {
            pile: mv.pile,
            pile_count: self.len(),
        })?;

        if available == 0 {
            return Err(MoveError::EmptyPile { pile: mv.pile });
        }
        if mv.count == 0 {
            return Err(MoveError::ZeroCount);
        }
        if let Some(limit) = turn_limit {
            if mv.count > limit {
                return Err(MoveError::ExceedsTurnLimit {
                    count: mv.count,
                    limit,
                });
            }
        }
        if mv.count > available {
            return Err(MoveError::ExceedsPile {
                pile: mv.pile,
                count: mv.count,
                available,
            });
        }

        Ok(())
    }

    /// Remove `mv.count` matches from `mv.pile`.
    ///
    /// The move must already have passed `validate_move`.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert!(self.validate_move(mv, None).is_ok(), "unvalidated move {mv:?}");
        self.0[mv.pile] -= mv.count;
    }

    /// Every legal move, by pile then ascending count.
    #[must_use]
    pub fn legal_moves(&self, turn_limit: Option<u32>) -> Vec<Move> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(pile, &available)| {
                let max = turn_limit.map_or(available, |limit| limit.min(available));
                (1..=max).map(move |count| Move::new(pile, count))
            })
            .collect()
    }
}

impl From<Vec<u32>> for Piles {
    fn from(counts: Vec<u32>) -> Self {
        Self(SmallVec::from_vec(counts))
    }
}

impl std::fmt::Display for Piles {
    /// One line per pile: `Pile 1: |||`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, &count) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "Pile {}: {}", i + 1, "|".repeat(count as usize))?;
        }
        Ok(())
    }
}
