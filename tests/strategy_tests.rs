//! Computer play: Nim-sum and complement strategies.

use proptest::prelude::*;

use rust_nim::core::{GameState, Move, Piles, PlayerId};
use rust_nim::games::SimpleNim;
use rust_nim::rules::Ruleset;
use rust_nim::strategy::{compute_computer_move, nim_sum, ComplementStrategy};
use rust_nim::Strategy as MoveStrategy;

// =============================================================================
// Nim-sum Scenarios
// =============================================================================

#[test]
fn test_marienbad_start_uses_fallback() {
    let mut piles = Piles::new(&[1, 3, 5, 7]);
    assert_eq!(nim_sum(piles.as_slice()), 0);

    let mv = compute_computer_move(&piles).unwrap();
    assert_eq!(mv, Move::new(0, 1));

    piles.apply_move(mv);
    assert_eq!(piles.as_slice(), &[0, 3, 5, 7]);
}

#[test]
fn test_three_four_five() {
    let mut piles = Piles::new(&[3, 4, 5]);
    assert_eq!(nim_sum(piles.as_slice()), 2);

    let mv = compute_computer_move(&piles).unwrap();
    assert_eq!(mv, Move::new(0, 2));

    piles.apply_move(mv);
    assert_eq!(piles.as_slice(), &[1, 4, 5]);
    assert_eq!(nim_sum(piles.as_slice()), 0);
}

// =============================================================================
// Nim-sum Properties
// =============================================================================

fn nonempty_piles() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..32, 1..7)
        .prop_filter("at least one match", |v| v.iter().any(|&n| n > 0))
}

proptest! {
    #[test]
    fn prop_computer_move_is_legal(counts in nonempty_piles()) {
        let piles = Piles::new(&counts);
        let mv = compute_computer_move(&piles).unwrap();
        prop_assert_eq!(piles.validate_move(mv, None), Ok(()));
    }

    #[test]
    fn prop_nonzero_sum_is_restored_to_zero(counts in nonempty_piles()) {
        prop_assume!(nim_sum(&counts) != 0);

        let mut piles = Piles::new(&counts);
        let mv = compute_computer_move(&piles).unwrap();
        piles.apply_move(mv);

        prop_assert_eq!(nim_sum(piles.as_slice()), 0);
    }

    #[test]
    fn prop_every_move_from_zero_sum_breaks_it(counts in nonempty_piles()) {
        // Force a zero Nim-sum by appending the balancing pile.
        let mut counts = counts;
        counts.push(nim_sum(&counts));
        let piles = Piles::new(&counts);
        prop_assert_eq!(nim_sum(piles.as_slice()), 0);

        for mv in piles.legal_moves(None) {
            let mut next = piles.clone();
            next.apply_move(mv);
            prop_assert_ne!(nim_sum(next.as_slice()), 0);
        }
    }

    #[test]
    fn prop_fallback_takes_one_from_first_pile(counts in nonempty_piles()) {
        let mut counts = counts;
        counts.push(nim_sum(&counts));
        let piles = Piles::new(&counts);

        let first = piles.first_nonempty().unwrap();
        prop_assert_eq!(compute_computer_move(&piles).unwrap(), Move::new(first, 1));
    }
}

// =============================================================================
// Complement Strategy
// =============================================================================

/// Computer opens with 1, then each round is a human move plus the answer.
#[test]
fn test_complement_rounds_remove_five() {
    let strategy = ComplementStrategy::default();
    let human = PlayerId::new(0);
    let computer = PlayerId::new(1);
    let human_moves = [3, 1, 4, 2];

    let mut state = GameState::new(SimpleNim.initial_piles(), computer);

    let opening = strategy.choose_move(&state).unwrap();
    assert_eq!(opening, Move::new(0, 1));
    SimpleNim.apply_move(&mut state, opening).unwrap();
    state.pass_turn();
    assert_eq!(state.piles().total(), 20);

    for taken in human_moves {
        let before = state.piles().total();

        assert_eq!(state.active_player(), human);
        SimpleNim.apply_move(&mut state, Move::new(0, taken)).unwrap();
        state.pass_turn();

        let answer = strategy.choose_move(&state).unwrap();
        assert_eq!(answer.count, 5 - taken);
        SimpleNim.apply_move(&mut state, answer).unwrap();
        state.pass_turn();

        assert_eq!(state.piles().total(), before - 5);
    }

    assert!(state.is_terminal());
    assert_eq!(SimpleNim.outcome(&state).map(|r| r.loser), Some(computer));
}

#[test]
fn test_complement_wins_when_human_opens() {
    let strategy = ComplementStrategy::default();
    let human = PlayerId::new(0);

    let mut state = GameState::new(SimpleNim.initial_piles(), human);
    let mut human_moves = [2, 4, 1, 3].into_iter();

    while !state.is_terminal() {
        let mv = if state.active_player() == human {
            // Once only one match is left the human has no choice.
            let taken = human_moves.next().unwrap_or(1);
            Move::new(0, taken)
        } else {
            strategy.choose_move(&state).unwrap()
        };
        SimpleNim.apply_move(&mut state, mv).unwrap();
        if !state.is_terminal() {
            state.pass_turn();
        }
    }

    assert_eq!(SimpleNim.outcome(&state).map(|r| r.loser), Some(human));
}

proptest! {
    #[test]
    fn prop_complement_move_is_legal(
        remaining in 1u32..=21,
        last in prop::option::of(1u32..=4),
    ) {
        let strategy = ComplementStrategy::default();
        let state = match last {
            Some(taken) => {
                let mut state = GameState::new(Piles::new(&[remaining + taken]), PlayerId::new(0));
                state.apply_move(Move::new(0, taken));
                state.pass_turn();
                state
            }
            None => GameState::new(Piles::new(&[remaining]), PlayerId::new(1)),
        };

        let mv = strategy.choose_move(&state).unwrap();
        prop_assert_eq!(SimpleNim.validate_move(state.piles(), mv), Ok(()));
    }
}
