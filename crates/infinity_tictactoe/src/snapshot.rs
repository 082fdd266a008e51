//! Serializable, read-only view of an engine.

use super::engine::GameEngine;
use super::{Board, GameStatus, Player, Position, Scoreboard};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw one frame.
///
/// Queues are stored as board indices, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct EngineSnapshot {
    /// The board.
    board: Board,
    /// Player to move (or the winner once the round is won).
    current_player: Player,
    /// Whether placements are accepted.
    active: bool,
    /// X's pieces, oldest first.
    x_queue: Vec<usize>,
    /// O's pieces, oldest first.
    o_queue: Vec<usize>,
    /// Session scores.
    scores: Scoreboard,
    /// Round number.
    round: u32,
    /// Round status.
    status: GameStatus,
    /// Index the player to move will lose on their move, while the round is live.
    fading: Option<usize>,
}

impl From<&GameEngine> for EngineSnapshot {
    fn from(engine: &GameEngine) -> Self {
        let current_player = engine.current_player();
        let fading = if engine.is_active() {
            engine.fading_index(current_player)
        } else {
            None
        };

        Self {
            board: engine.board().clone(),
            current_player,
            active: engine.is_active(),
            x_queue: engine.queue(Player::X).indices(),
            o_queue: engine.queue(Player::O).indices(),
            scores: engine.scores(),
            round: engine.round(),
            status: engine.status(),
            fading,
        }
    }
}

impl EngineSnapshot {
    /// Returns a player's pieces as board indices, oldest first.
    pub fn queue(&self, player: Player) -> &[usize] {
        match player {
            Player::X => &self.x_queue,
            Player::O => &self.o_queue,
        }
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self.status {
            GameStatus::InProgress => {
                let mut text = format!(
                    "Round {}. Player {} to move.",
                    self.round, self.current_player
                );
                if let Some(pos) = self.fading.and_then(Position::from_index) {
                    text.push_str(&format!(" {} piece fades next.", pos.label()));
                }
                text
            }
            GameStatus::Won { player, line } => {
                let [a, b, c] = line.indices();
                format!(
                    "Round {} over. Player {} wins on {}-{}-{}!",
                    self.round, player, a, b, c
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_in_progress() {
        let engine = GameEngine::new();
        assert_eq!(
            engine.snapshot().status_string(),
            "Round 1. Player X to move."
        );
    }

    #[test]
    fn test_status_string_mentions_fading_piece() {
        let mut engine = GameEngine::new();
        for i in [0, 1, 8, 3, 5, 7] {
            engine.place_move(i).unwrap();
        }
        let snapshot = engine.snapshot();
        assert_eq!(*snapshot.fading(), Some(0));
        assert_eq!(
            snapshot.status_string(),
            "Round 1. Player X to move. Top-left piece fades next."
        );
    }

    #[test]
    fn test_won_snapshot_has_no_fading() {
        let mut engine = GameEngine::new();
        for i in [0, 3, 1, 4, 6, 5] {
            engine.place_move(i).unwrap();
        }
        let snapshot = engine.snapshot();
        assert!(!*snapshot.active());
        assert_eq!(*snapshot.fading(), None);
        assert_eq!(
            snapshot.status_string(),
            "Round 1 over. Player O wins on 3-4-5!"
        );
    }
}
