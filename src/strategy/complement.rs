//! Complement play for single-pile Nim with a per-turn limit.
//!
//! With a limit of `k` matches per turn, answering the opponent's `m` with
//! `k + 1 - m` removes exactly `k + 1` matches per round. When the computer
//! opens it takes a single match.
//!
//! The round invariant only wins if the computer controls the phase of the
//! pile. From 21 matches with a limit of 4 that happens when the opponent
//! opens; when the computer opens with 1 the rounds run 20, 15, 10, 5, 0
//! and the computer takes the last match. This gap is kept as-is.

use log::warn;

use crate::core::{GameError, GameState, IllegalState, Move, SIMPLE_NIM_TURN_LIMIT};

use super::policy::Strategy;

/// Answers `m` with `turn_limit + 1 - m`, opens with 1.
#[derive(Clone, Debug)]
pub struct ComplementStrategy {
    turn_limit: u32,
}

impl Default for ComplementStrategy {
    fn default() -> Self {
        Self::new(SIMPLE_NIM_TURN_LIMIT)
    }
}

impl ComplementStrategy {
    /// Create a strategy for the given per-turn limit.
    #[must_use]
    pub fn new(turn_limit: u32) -> Self {
        assert!(turn_limit > 0, "Turn limit must be at least 1");
        Self { turn_limit }
    }

    /// Matches removed per full round.
    #[must_use]
    pub fn round_total(&self) -> u32 {
        self.turn_limit + 1
    }
}

impl Strategy for ComplementStrategy {
    fn choose_move(&self, state: &GameState) -> Result<Move, GameError> {
        let piles = state.piles();
        let pile = piles.first_nonempty().ok_or(IllegalState::AllPilesEmpty)?;
        let remaining = piles.get(pile).unwrap_or(0);

        // Only answer a move the opponent made; anything else is an opening.
        let answered = state
            .last_move()
            .filter(|record| record.player != state.active_player())
            .map(|record| record.mv.count);

        let wanted = match answered {
            Some(count) => self.round_total().saturating_sub(count),
            None => 1,
        };
        let take = wanted.clamp(1, remaining.min(self.turn_limit));

        if take != wanted {
            warn!(
                "complement {} not playable with {} left, taking {}",
                wanted, remaining, take
            );
        }

        Ok(Move::new(pile, take))
    }

    fn name(&self) -> &'static str {
        "complement"
    }
}
