//! Tests for the infinity tic-tac-toe engine lifecycle.

use infinity_tictactoe::{
    EngineErrorKind, GameEngine, GameStatus, MoveOutcome, MoveRejection, Player, Position, Square,
    WinningLine,
};

fn play(engine: &mut GameEngine, indices: &[usize]) {
    for &index in indices {
        engine.place_move(index).expect("index on board");
    }
}

#[test]
fn test_new_engine_state() {
    let engine = GameEngine::new();
    assert_eq!(engine.current_player(), Player::X);
    assert!(engine.is_active());
    assert_eq!(engine.round(), 1);
    assert_eq!(engine.scores().total(), 0);
    assert!(engine.queue(Player::X).is_empty());
    assert!(engine.queue(Player::O).is_empty());
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn test_fifo_eviction() {
    let mut engine = GameEngine::new();
    // X: 0, 8, 5 in that order; O: 1, 3, 7
    play(&mut engine, &[0, 1, 8, 3, 5, 7]);
    assert_eq!(engine.queue(Player::X).indices(), vec![0, 8, 5]);

    let outcome = engine.place_move(6).unwrap();
    let placed = outcome.placed().expect("placed");
    assert_eq!(placed.evicted, Some(Position::TopLeft));

    assert_eq!(engine.cell(0).unwrap(), Square::Empty);
    assert_eq!(engine.cell(6).unwrap(), Square::Occupied(Player::X));
    assert_eq!(engine.queue(Player::X).indices(), vec![8, 5, 6]);
}

#[test]
fn test_occupied_square_is_noop() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4, 0]);
    let before = engine.snapshot();

    let outcome = engine.place_move(0).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::Ignored(MoveRejection::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_move_after_win_is_noop() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    let before = engine.snapshot();

    let outcome = engine.place_move(8).unwrap();
    assert_eq!(outcome, MoveOutcome::Ignored(MoveRejection::RoundOver));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_out_of_range_index_fails_fast() {
    let mut engine = GameEngine::new();
    let before = engine.snapshot();

    let err = engine.place_move(42).unwrap_err();
    assert_eq!(err.kind(), &EngineErrorKind::PositionOutOfRange(42));
    assert!(err.to_string().contains("out of range"));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_win_detection() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4]);

    let outcome = engine.place_move(2).unwrap();
    let expected = GameStatus::Won {
        player: Player::X,
        line: WinningLine::TopRow,
    };
    assert_eq!(outcome.status(), Some(expected));
    assert_eq!(engine.winning_line().map(WinningLine::indices), Some([0, 1, 2]));
    assert_eq!(engine.scores().get(Player::X), 1);
    assert_eq!(engine.scores().get(Player::O), 0);
    assert!(!engine.is_active());
}

#[test]
fn test_winning_move_keeps_current_player() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4]);
    assert_eq!(engine.current_player(), Player::X);

    engine.place_move(2).unwrap();
    assert_eq!(engine.current_player(), Player::X);
}

#[test]
fn test_turn_alternation() {
    let mut engine = GameEngine::new();
    let mut expected = Player::X;
    for index in [4, 0, 8, 2, 6, 7] {
        assert_eq!(engine.current_player(), expected);
        engine.place_move(index).unwrap();
        expected = expected.opponent();
    }
    assert!(engine.is_active());
}

#[test]
fn test_win_through_eviction() {
    let mut engine = GameEngine::new();
    // X: 0, 4, 5   O: 1, 3, 7
    play(&mut engine, &[0, 1, 4, 3, 5, 7]);
    // X places 8: 0 vanishes, leaving 4, 5, 8 - no line yet
    engine.place_move(8).unwrap();
    assert!(engine.is_active());
    assert_eq!(engine.cell(0).unwrap(), Square::Empty);
    // O places 0: 1 vanishes, leaving 3, 7, 0 - no line
    engine.place_move(0).unwrap();
    // X places 2: 4 vanishes, leaving 5, 8, 2 - right column
    let outcome = engine.place_move(2).unwrap();

    assert_eq!(
        outcome.status(),
        Some(GameStatus::Won {
            player: Player::X,
            line: WinningLine::RightColumn
        })
    );
    assert_eq!(engine.queue(Player::X).indices(), vec![5, 8, 2]);
}

#[test]
fn test_round_reset_after_win() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    let scores = engine.scores();

    engine.start_new_round(true);

    assert!(engine.board().squares().iter().all(|s| *s == Square::Empty));
    assert!(engine.queue(Player::X).is_empty());
    assert!(engine.queue(Player::O).is_empty());
    assert_eq!(engine.current_player(), Player::X);
    assert!(engine.is_active());
    assert_eq!(engine.round(), 2);
    assert_eq!(engine.scores(), scores);
}

#[test]
fn test_manual_restart_keeps_round_number() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4, 0, 8]);

    engine.start_new_round(false);

    assert_eq!(engine.round(), 1);
    assert!(engine.queue(Player::X).is_empty());
    assert_eq!(engine.current_player(), Player::X);
}

#[test]
fn test_scores_accumulate_across_rounds() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    engine.start_new_round(true);
    play(&mut engine, &[0, 3, 1, 4, 6, 5]);
    engine.start_new_round(true);

    assert_eq!(engine.scores().get(Player::X), 1);
    assert_eq!(engine.scores().get(Player::O), 1);
    assert_eq!(engine.round(), 3);
}

#[test]
fn test_fading_index() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 8, 3]);
    assert_eq!(engine.fading_index(Player::X), None);

    engine.place_move(5).unwrap();
    assert_eq!(engine.fading_index(Player::X), Some(0));
    assert_eq!(engine.fading_index(Player::O), None);

    engine.place_move(7).unwrap();
    assert_eq!(engine.fading_index(Player::O), Some(1));

    engine.place_move(6).unwrap();
    assert_eq!(engine.fading_index(Player::X), Some(8));
}

#[test]
fn test_independent_engines() {
    let mut first = GameEngine::new();
    let second = GameEngine::new();
    first.place_move(4).unwrap();

    assert_eq!(first.cell(4).unwrap(), Square::Occupied(Player::X));
    assert_eq!(second.cell(4).unwrap(), Square::Empty);
}
