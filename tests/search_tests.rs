//! Search integration tests: scenarios and properties against exhaustive
//! minimax.

mod common;

use common::arb_position;
use hackenbush::core::{Color, Level, Move, Position};
use hackenbush::search::{AlphaBeta, SearchConfig, SearchResult, NEG_INF, POS_INF};
use proptest::prelude::*;

fn solve(position: &Position, player: Color) -> SearchResult {
    AlphaBeta::default().solve(position, player).unwrap()
}

/// Replay a line in playing order and return the final position and the
/// player to move there.
fn replay(position: &Position, first: Color, result: &SearchResult) -> (Position, Color) {
    let mut current = position.clone();
    let mut player = first;
    for mv in result.moves() {
        current = current.play(player, mv).unwrap();
        player = player.other();
    }
    (current, player)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_red_stuck_means_blue_win() {
    let position = Level::from_tuples(&[(0, 1, Color::Blue)]).into_position().unwrap();
    let result = solve(&position, Color::Red);
    assert_eq!(result.value, 100, "Blue maximizes, Red cannot move");
    assert!(result.line.is_empty());
}

#[test]
fn test_blue_wins_in_one() {
    let position = Level::from_tuples(&[(0, 1, Color::Blue)]).into_position().unwrap();
    let result = solve(&position, Color::Blue);
    assert_eq!(result.value, 99);
    assert_eq!(result.line.as_slice(), &[Move(1)]);
}

#[test]
fn test_sample_level_principal_lines() {
    let position = Level::sample().into_position().unwrap();

    let blue = solve(&position, Color::Blue);
    assert_eq!(blue.value, 95);
    assert_eq!(
        blue.line.as_slice(),
        &[Move(1), Move(1), Move(3), Move(4), Move(5)]
    );

    let red = solve(&position, Color::Red);
    assert_eq!(red.value, 94);
    assert_eq!(
        red.line.as_slice(),
        &[Move(1), Move(1), Move(3), Move(3), Move(3), Move(6)]
    );
}

#[test]
fn test_sample_level_stable_across_modes() {
    let position = Level::sample().into_position().unwrap();
    let configs = [
        SearchConfig::default(),
        SearchConfig::exhaustive(),
        SearchConfig::default().with_parallel(true),
        SearchConfig::exhaustive().with_parallel(true),
    ];

    for player in Color::all() {
        let reference = solve(&position, player);
        for config in &configs {
            let mut search = AlphaBeta::new(config.clone());
            for _ in 0..3 {
                let result = search.solve(&position, player).unwrap();
                assert_eq!(result.value, reference.value, "{:?}", config);
                assert_eq!(result.best_move(), reference.best_move(), "{:?}", config);
            }
        }
    }
}

#[test]
fn test_explicit_window_matches_solve() {
    let position = Level::sample().into_position().unwrap();
    let mut search = AlphaBeta::default();
    let windowed = search.search(&position, Color::Blue, NEG_INF, POS_INF).unwrap();
    assert_eq!(windowed, solve(&position, Color::Blue));
}

#[test]
fn test_narrow_window_bounds_value() {
    let position = Level::sample().into_position().unwrap();
    let mut search = AlphaBeta::default();

    // True value 95 lies above the window: the result is a lower bound
    let high = search.search(&position, Color::Blue, -10, 10).unwrap();
    assert!(high.value >= 10);

    // And below this one: the result is an upper bound
    let low = search.search(&position, Color::Blue, 96, 100).unwrap();
    assert!(low.value <= 96);
}

#[test]
fn test_pruning_saves_work_on_larger_level() {
    // Four two-branch stalks, each capped by the other color
    let position = Level::from_tuples(&[
        (0, 1, Color::Blue),
        (1, 2, Color::Red),
        (2, 3, Color::Blue),
        (0, 4, Color::Red),
        (4, 5, Color::Blue),
        (5, 6, Color::Red),
        (0, 7, Color::Blue),
        (7, 8, Color::Red),
        (0, 9, Color::Red),
        (9, 10, Color::Blue),
    ])
    .into_position()
    .unwrap();
    let mut pruned = AlphaBeta::default();
    let mut exhaustive = AlphaBeta::new(SearchConfig::exhaustive());

    let a = pruned.solve(&position, Color::Blue).unwrap();
    let b = exhaustive.solve(&position, Color::Blue).unwrap();

    assert_eq!(a.value, -92);
    assert_eq!(a.value, b.value);
    assert_eq!(a.line, b.line);
    assert!(pruned.stats().cutoffs > 0);
    assert!(pruned.stats().nodes < exhaustive.stats().nodes);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_pruning_never_changes_value(position in arb_position(7)) {
        let mut pruned = AlphaBeta::default();
        let mut exhaustive = AlphaBeta::new(SearchConfig::exhaustive());
        for player in Color::all() {
            let a = pruned.solve(&position, player).unwrap();
            let b = exhaustive.solve(&position, player).unwrap();
            prop_assert_eq!(a.value, b.value);
            prop_assert_eq!(a.best_move(), b.best_move());
        }
    }

    #[test]
    fn prop_search_is_deterministic(position in arb_position(7)) {
        let mut search = AlphaBeta::default();
        for player in Color::all() {
            let first = search.solve(&position, player).unwrap();
            let second = search.solve(&position, player).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first, AlphaBeta::default().solve(&position, player).unwrap());
        }
    }

    #[test]
    fn prop_line_reaches_terminal(position in arb_position(7)) {
        for player in Color::all() {
            let result = solve(&position, player);
            let (end, stuck) = replay(&position, player, &result);

            prop_assert!(!end.has_move(stuck), "line must end where the mover is stuck");
            prop_assert_eq!(result.value.abs(), 100 - result.plies() as i32);
            prop_assert_eq!(result.winner(), Some(stuck.other()));
        }
    }

    #[test]
    fn prop_best_move_is_legal(position in arb_position(7)) {
        for player in Color::all() {
            let result = solve(&position, player);
            match result.best_move() {
                Some(mv) => prop_assert!(position.legal_moves(player).contains(&mv)),
                None => prop_assert!(!position.has_move(player)),
            }
        }
    }
}
