//! Headless replay of a click sequence.

use anyhow::{Context, Result};
use infinity_tictactoe::{EngineError, GameEngine, MoveOutcome, Player};
use tracing::{debug, instrument};

/// Plays `indices` on a fresh engine, in order.
///
/// Ignored placements (occupied squares, clicks after a win) are skipped the
/// same way an interactive click would be.
///
/// # Errors
///
/// Fails on the first index outside 0-8.
#[instrument]
pub fn replay(indices: &[usize]) -> Result<GameEngine, EngineError> {
    let mut engine = GameEngine::new();
    for &index in indices {
        if let MoveOutcome::Ignored(rejection) = engine.place_move(index)? {
            debug!(index, %rejection, "Replay click ignored");
        }
    }
    Ok(engine)
}

/// Board plus a one-line status.
pub fn render_text(engine: &GameEngine) -> String {
    let snapshot = engine.snapshot();
    let scores = snapshot.scores();
    format!(
        "{}\n\n{}\n{}   {}",
        snapshot.board().display(),
        snapshot.status_string(),
        scores.label(Player::X),
        scores.label(Player::O),
    )
}

/// Pretty-printed JSON snapshot.
pub fn render_json(engine: &GameEngine) -> Result<String> {
    serde_json::to_string_pretty(&engine.snapshot()).context("Failed to serialize snapshot")
}

#[cfg(test)]
mod tests {
    use super::*;
    use infinity_tictactoe::EngineErrorKind;

    #[test]
    fn test_render_text_after_win() {
        let engine = replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(
            render_text(&engine),
            "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\n\
             Round 1 over. Player X wins on 0-1-2!\n\
             X : 01   O : 00"
        );
    }

    #[test]
    fn test_replay_skips_ignored_clicks() {
        let engine = replay(&[4, 4, 0]).unwrap();
        assert_eq!(engine.queue(Player::X).indices(), vec![4]);
        assert_eq!(engine.queue(Player::O).indices(), vec![0]);
    }

    #[test]
    fn test_replay_rejects_out_of_range() {
        let err = replay(&[0, 9]).unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::PositionOutOfRange(9));
    }
}
