//! End-to-end scenarios from the Connect Four core's acceptance criteria,
//! driven entirely through the public API.

use connect4_core::{best_move, Color, Connect4Game, GameMode, State};

#[test]
fn vertical_win_after_seven_drops() {
    let mut game = Connect4Game::new(GameMode::Multiplayer);
    let mut last = None;
    for col in [0, 1, 0, 1, 0, 1, 0] {
        last = Some(game.play_turn(col).unwrap());
    }
    let last = last.unwrap();
    assert_eq!(last.result.winner, Some(Color::Yellow));
    assert!(!last.result.draw);
    assert_eq!(last.turn_index, 7);
    assert!(game.is_over());
}

#[test]
fn diagonal_win_on_the_eleventh_move_and_not_before() {
    let mut game = Connect4Game::new(GameMode::Multiplayer);
    let columns = [0, 1, 1, 2, 2, 3, 2, 3, 3, 4, 3];
    for (i, &col) in columns.iter().enumerate() {
        let outcome = game.play_turn(col).unwrap();
        if i + 1 == columns.len() {
            assert_eq!(outcome.result.winner, Some(Color::Yellow));
        } else {
            assert!(outcome.result.winner.is_none());
        }
    }
}

#[test]
fn ai_blocks_a_stacked_vertical_threat() {
    let mut state = State::new(Color::Yellow);
    for col in [1, 0, 2, 0, 4, 0] {
        state.drop(col).unwrap();
    }
    assert_eq!(state.to_play(), Color::Yellow);

    let (column, _) = best_move(&mut state, 4).unwrap();
    assert_eq!(column, Some(0));
}

#[test]
fn opening_move_is_always_the_centre_column() {
    let mut state = State::default();
    let (column, _) = best_move(&mut state, 5).unwrap();
    assert_eq!(column, Some(3));
}
