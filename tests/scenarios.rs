use connect_four::error::MoveError;
use connect_four::game::{
    Cell, GameOutcome, GameState, MoveOutcome, Placement, Player, HEIGHT, WIDTH,
};

fn play(state: &mut GameState, columns: &[usize]) -> MoveOutcome {
    let mut last = None;
    for &col in columns {
        last = Some(state.drop_piece_mut(col).expect("legal move"));
    }
    last.expect("at least one move")
}

#[test]
fn vertical_win_in_center_column() {
    let mut state = GameState::initial();
    play(&mut state, &[3, 0, 3, 0, 3, 0]);
    assert!(!state.is_terminal());

    let outcome = state.drop_piece_mut(3).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::Win {
            player: Player::One,
            placement: Placement { row: 2, column: 3 },
        }
    );
    assert_eq!(
        state.board().winning_run(Player::One),
        Some([(2, 3), (3, 3), (4, 3), (5, 3)])
    );
    assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::One)));
}

/// Fills the board so that columns 0, 1, 4, 5 read 1,2,1,2,1,2 from the
/// bottom and columns 2, 3, 6 read 2,1,2,1,2,1. No line of four exists.
fn drawn_game_moves() -> Vec<usize> {
    let mut moves = Vec::new();
    for (a, b) in [(0, 2), (1, 3), (4, 6)] {
        for _ in 0..3 {
            moves.extend([a, b, b, a]);
        }
    }
    moves.extend([5; HEIGHT]);
    moves
}

#[test]
fn full_board_without_line_is_a_draw() {
    let moves = drawn_game_moves();
    assert_eq!(moves.len(), WIDTH * HEIGHT);

    let mut state = GameState::initial();
    let (last, rest) = moves.split_last().unwrap();
    for &col in rest {
        let outcome = state.drop_piece_mut(col).unwrap();
        assert!(matches!(outcome, MoveOutcome::Continue(_)), "{outcome:?}");
    }

    let before = state.current_player();
    let outcome = state.drop_piece_mut(*last).unwrap();
    assert_eq!(outcome, MoveOutcome::Draw(Placement { row: 0, column: 5 }));
    assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    assert_eq!(state.current_player(), before);
    assert!(state.board().is_full());
    assert_eq!(state.drop_piece_mut(0), Err(MoveError::GameOver));
}

#[test]
fn dropping_into_full_column_changes_nothing() {
    let mut state = GameState::initial();
    play(&mut state, &[1; HEIGHT]);
    let before = state.clone();

    let (next, outcome) = state.drop_piece(1).unwrap();
    assert_eq!(outcome, MoveOutcome::ColumnFull);
    assert_eq!(next, before);
    assert_eq!(next.current_player(), Player::One);
}

#[test]
fn diagonal_win_for_second_player() {
    let mut state = GameState::initial();
    // Player 2 lands on (5,3), (4,2), (3,1) and finally (2,0).
    play(&mut state, &[0, 3, 1, 0, 2, 2, 1, 1, 0]);
    assert!(!state.is_terminal());

    let outcome = state.drop_piece_mut(0).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::Win {
            player: Player::Two,
            placement: Placement { row: 2, column: 0 },
        }
    );
    assert_eq!(
        state.board().winning_run(Player::Two),
        Some([(2, 0), (3, 1), (4, 2), (5, 3)])
    );
    assert!(!state.board().check_for_win(Player::One));
}

#[test]
fn diagonal_reaching_the_edge_is_not_a_win() {
    let mut state = GameState::initial();
    // Player 1 holds (5,6) and (4,5): the down-right run from (4,5) leaves
    // the board after two cells.
    play(&mut state, &[6, 5, 5]);
    assert_eq!(state.cell(5, 6), Some(Cell::One));
    assert_eq!(state.cell(4, 5), Some(Cell::One));
    assert!(!state.board().check_for_win(Player::One));
    assert!(!state.is_terminal());
}

#[test]
fn invalid_column_is_an_error() {
    let state = GameState::initial();
    assert_eq!(
        state.drop_piece(WIDTH),
        Err(MoveError::InvalidColumn { column: WIDTH, width: WIDTH })
    );
    assert_eq!(
        state.board().find_landing_row(WIDTH + 3),
        Err(MoveError::InvalidColumn { column: WIDTH + 3, width: WIDTH })
    );
}

#[test]
fn custom_board_size() {
    let mut state = GameState::new(4, 4);
    assert_eq!(state.legal_columns(), vec![0, 1, 2, 3]);

    let outcome = play(&mut state, &[0, 0, 1, 1, 2, 2, 3]);
    assert_eq!(
        outcome,
        MoveOutcome::Win {
            player: Player::One,
            placement: Placement { row: 3, column: 3 },
        }
    );
}
