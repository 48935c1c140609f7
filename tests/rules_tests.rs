//! Move validation and application across both variants.

use proptest::prelude::*;

use rust_nim::core::{GameState, Move, MoveError, Piles, PlayerId};
use rust_nim::games::{Marienbad, SimpleNim};
use rust_nim::rules::Ruleset;
use rust_nim::strategy::compute_computer_move;
use rust_nim::IllegalState;

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_simple_nim_take_three_then_five() {
    let mut state = GameState::new(SimpleNim.initial_piles(), PlayerId::new(0));

    SimpleNim.apply_move(&mut state, Move::new(0, 3)).unwrap();
    assert_eq!(state.piles().total(), 18);

    assert_eq!(
        SimpleNim.validate_move(state.piles(), Move::new(0, 5)),
        Err(MoveError::ExceedsTurnLimit { count: 5, limit: 4 })
    );
}

#[test]
fn test_simple_nim_cannot_overdraw_under_limit() {
    let piles = Piles::new(&[3]);
    assert_eq!(
        SimpleNim.validate_move(&piles, Move::new(0, 4)),
        Err(MoveError::ExceedsPile { pile: 0, count: 4, available: 3 })
    );
    assert_eq!(SimpleNim.validate_move(&piles, Move::new(0, 3)), Ok(()));
}

#[test]
fn test_empty_table_is_terminal_and_has_no_computer_move() {
    let piles = Piles::new(&[0, 0, 0]);

    assert!(piles.is_terminal());
    assert_eq!(compute_computer_move(&piles), Err(IllegalState::AllPilesEmpty));
    assert!(Marienbad.legal_moves(&piles).is_empty());
}

#[test]
fn test_empty_pile_is_always_invalid() {
    let piles = Piles::new(&[0, 3, 5, 7]);
    for count in 0..=8 {
        assert_eq!(
            Marienbad.validate_move(&piles, Move::new(0, count)),
            Err(MoveError::EmptyPile { pile: 0 })
        );
    }
}

#[test]
fn test_rejected_move_leaves_state_alone() {
    let mut state = GameState::new(Marienbad.initial_piles(), PlayerId::new(0));
    let before = state.clone();

    assert!(Marienbad.apply_move(&mut state, Move::new(1, 4)).is_err());
    assert!(Marienbad.apply_move(&mut state, Move::new(7, 1)).is_err());
    assert!(Marienbad.apply_move(&mut state, Move::new(2, 0)).is_err());

    assert_eq!(state, before);
}

// =============================================================================
// Properties
// =============================================================================

fn piles_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..16, 1..6)
}

proptest! {
    #[test]
    fn prop_apply_removes_exactly_count_from_one_pile(
        counts in piles_strategy(),
        pile in 0usize..6,
        count in 0u32..20,
    ) {
        let mut piles = Piles::new(&counts);
        let mv = Move::new(pile, count);

        if piles.validate_move(mv, None).is_ok() {
            let before = piles.clone();
            piles.apply_move(mv);

            prop_assert_eq!(piles.total(), before.total() - count);
            for i in 0..piles.len() {
                if i != pile {
                    prop_assert_eq!(piles.get(i), before.get(i));
                }
            }
        }
    }

    #[test]
    fn prop_terminal_iff_nothing_left(counts in piles_strategy()) {
        let piles = Piles::new(&counts);
        prop_assert_eq!(piles.is_terminal(), piles.total() == 0);
    }

    #[test]
    fn prop_legal_moves_all_validate(
        counts in piles_strategy(),
        limit in prop::option::of(1u32..6),
    ) {
        let piles = Piles::new(&counts);
        let moves = piles.legal_moves(limit);

        for mv in &moves {
            prop_assert_eq!(piles.validate_move(*mv, limit), Ok(()));
        }
        prop_assert_eq!(moves.is_empty(), piles.is_terminal());
    }
}
