use tictactoe::{Cell, GameEngine, GameState, GameStatus, Mark, MoveError};

/// Drive an engine through a sequence of accepted moves.
fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) {
    for &(r, c) in moves {
        engine.apply_move(r, c).unwrap();
    }
}

#[test]
fn test_initial_state() {
    let state = GameState::new();
    assert_eq!(state.active_player(), Mark::X);
    assert_eq!(state.status(), GameStatus::InProgress);
    assert_eq!(state.board().mark_counts(), (0, 0));
}

#[test]
fn test_players_alternate() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.state().active_player(), Mark::X);

    engine.apply_move(0, 0).unwrap();
    assert_eq!(engine.state().active_player(), Mark::O);

    engine.apply_move(1, 1).unwrap();
    assert_eq!(engine.state().active_player(), Mark::X);

    engine.apply_move(2, 2).unwrap();
    assert_eq!(engine.state().active_player(), Mark::O);
}

#[test]
fn test_move_marks_cell_for_mover() {
    let mut engine = GameEngine::new();
    engine.apply_move(1, 2).unwrap();
    assert_eq!(engine.state().board().get(1, 2).unwrap(), Cell::Marked(Mark::X));

    engine.apply_move(2, 0).unwrap();
    assert_eq!(engine.state().board().get(2, 0).unwrap(), Cell::Marked(Mark::O));
}

#[test]
fn test_top_row_win_no_turn_flip() {
    // X plays (0,0), O (1,1), X (0,1), O (2,2), X (0,2) -> X wins the top row.
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2)]);
    assert_eq!(engine.state().status(), GameStatus::InProgress);

    let state = engine.apply_move(0, 2).unwrap();
    assert_eq!(state.status(), GameStatus::Won(Mark::X));
    // the winning move does not flip the turn
    assert_eq!(state.active_player(), Mark::X);
}

#[test]
fn test_column_win_for_o() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (0, 2), (0, 1), (1, 2), (1, 0)]);
    assert_eq!(engine.state().status(), GameStatus::InProgress);

    let state = engine.apply_move(2, 2).unwrap();
    assert_eq!(state.status(), GameStatus::Won(Mark::O));
    assert_eq!(state.active_player(), Mark::O);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // Fills the board as XOX / XOO / OXX with no three-in-a-row.
    let mut engine = GameEngine::new();
    play(
        &mut engine,
        &[
            (0, 0),
            (1, 1),
            (0, 2),
            (0, 1),
            (2, 2),
            (1, 2),
            (1, 0),
            (2, 0),
        ],
    );
    assert_eq!(engine.state().status(), GameStatus::InProgress);

    let state = engine.apply_move(2, 1).unwrap();
    assert_eq!(state.status(), GameStatus::Draw);
    assert!(state.board().is_full());
    assert_eq!(state.board().winner(), None);
}

#[test]
fn test_occupied_cell_is_rejected_without_side_effects() {
    let mut engine = GameEngine::new();
    engine.apply_move(0, 0).unwrap();
    let before = engine.state();

    assert_eq!(engine.apply_move(0, 0).unwrap_err(), MoveError::CellOccupied);
    assert_eq!(engine.state(), before);
}

#[test]
fn test_out_of_bounds_is_rejected() {
    let mut engine = GameEngine::new();
    let before = engine.state();

    assert_eq!(engine.apply_move(0, 3).unwrap_err(), MoveError::OutOfBounds);
    assert_eq!(engine.apply_move(3, 0).unwrap_err(), MoveError::OutOfBounds);
    assert_eq!(engine.state(), before);
}

#[test]
fn test_moves_after_game_over_are_rejected() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let terminal = engine.state();
    assert!(terminal.status().is_terminal());

    assert_eq!(engine.apply_move(2, 0).unwrap_err(), MoveError::GameOver);
    // status is checked before bounds, so even a nonsense coordinate
    // reports the finished game
    assert_eq!(engine.apply_move(7, 7).unwrap_err(), MoveError::GameOver);
    assert_eq!(engine.state(), terminal);
}

#[test]
fn test_with_move_is_pure() {
    let state = GameState::new().with_move(0, 0).unwrap();
    let a = state.with_move(1, 1).unwrap();
    let b = state.with_move(1, 1).unwrap();

    assert_eq!(a, b);
    // the receiver itself is unchanged
    assert_eq!(state.board().get(1, 1).unwrap(), Cell::Empty);
}

#[test]
fn test_reset_restores_initial_state_regardless_of_history() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.reset(), GameState::new());

    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(engine.state().status(), GameStatus::Won(Mark::X));
    assert_eq!(engine.reset(), GameState::new());
    assert_eq!(engine.state(), GameState::new());
}
