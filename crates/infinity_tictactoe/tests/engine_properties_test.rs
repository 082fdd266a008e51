//! Property tests over arbitrary click sequences.

use infinity_tictactoe::{
    EngineInvariants, GameEngine, InvariantSet, MoveOutcome, PIECE_LIMIT, Player, Position, Square,
};
use proptest::prelude::*;

fn clicks() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..9, 0..60)
}

proptest! {
    #[test]
    fn queues_never_exceed_limit(indices in clicks()) {
        let mut engine = GameEngine::new();
        for index in indices {
            engine.place_move(index).unwrap();
            prop_assert!(engine.queue(Player::X).len() <= PIECE_LIMIT);
            prop_assert!(engine.queue(Player::O).len() <= PIECE_LIMIT);
        }
    }

    #[test]
    fn occupancy_matches_queues(indices in clicks()) {
        let mut engine = GameEngine::new();
        for index in indices {
            engine.place_move(index).unwrap();
            for pos in Position::ALL {
                let expected = if engine.queue(Player::X).contains(pos) {
                    Square::Occupied(Player::X)
                } else if engine.queue(Player::O).contains(pos) {
                    Square::Occupied(Player::O)
                } else {
                    Square::Empty
                };
                prop_assert_eq!(engine.board().get(pos), expected);
            }
            prop_assert!(EngineInvariants::check_all(engine.round_state()).is_ok());
        }
    }

    #[test]
    fn turn_toggles_only_on_non_winning_placements(indices in clicks()) {
        let mut engine = GameEngine::new();
        for index in indices {
            let mover = engine.current_player();
            let before = engine.snapshot();
            match engine.place_move(index).unwrap() {
                MoveOutcome::Ignored(_) => {
                    prop_assert_eq!(engine.snapshot(), before);
                }
                MoveOutcome::Placed(placed) if placed.is_win() => {
                    prop_assert_eq!(engine.current_player(), mover);
                    prop_assert!(!engine.is_active());
                    prop_assert_eq!(engine.scores().get(mover), before.scores().get(mover) + 1);
                }
                MoveOutcome::Placed(_) => {
                    prop_assert_eq!(engine.current_player(), mover.opponent());
                    prop_assert_eq!(engine.scores(), *before.scores());
                }
            }
        }
    }

    #[test]
    fn fading_index_tracks_full_queue(indices in clicks()) {
        let mut engine = GameEngine::new();
        for index in indices {
            engine.place_move(index).unwrap();
            for player in [Player::X, Player::O] {
                let queue = engine.queue(player);
                if queue.len() == PIECE_LIMIT {
                    prop_assert_eq!(engine.fading_position(player), queue.oldest());
                } else {
                    prop_assert_eq!(engine.fading_index(player), None);
                }
            }
        }
    }

    #[test]
    fn fourth_piece_evicts_oldest(indices in clicks(), next in 0usize..9) {
        let mut engine = GameEngine::new();
        for index in indices {
            engine.place_move(index).unwrap();
        }
        let mover = engine.current_player();
        let queue_before: Vec<_> = engine.queue(mover).iter().collect();

        if let MoveOutcome::Placed(placed) = engine.place_move(next).unwrap() {
            let mut expected = queue_before.clone();
            if queue_before.len() == PIECE_LIMIT {
                let oldest = expected.remove(0);
                prop_assert_eq!(placed.evicted, Some(oldest));
                prop_assert_eq!(engine.board().get(oldest), Square::Empty);
            } else {
                prop_assert_eq!(placed.evicted, None);
            }
            expected.push(placed.position);
            prop_assert_eq!(engine.queue(mover).iter().collect::<Vec<_>>(), expected);
        }
    }
}
