//! Placement actions and their outcomes.
//!
//! Placements are domain events. A rejected placement is not an error: a
//! click on an occupied or frozen square is expected and has no effect.

use super::{GameStatus, Player, Position};
use serde::{Deserialize, Serialize};

/// Why a placement was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The round has already been won.
    #[display("Round is over")]
    RoundOver,

    /// The target square already holds a piece.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// A placement that changed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedMove {
    /// The player who moved.
    pub player: Player,
    /// Where the piece went.
    pub position: Position,
    /// The mover's oldest piece, removed to make room.
    pub evicted: Option<Position>,
    /// Round status after the move.
    pub status: GameStatus,
}

impl PlacedMove {
    /// Returns true if this placement won the round.
    pub fn is_win(&self) -> bool {
        matches!(self.status, GameStatus::Won { .. })
    }
}

impl std::fmt::Display for PlacedMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())?;
        if let Some(evicted) = self.evicted {
            write!(f, " (removed {})", evicted.label())?;
        }
        Ok(())
    }
}

/// Result of asking the engine to place a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Nothing changed.
    Ignored(MoveRejection),
    /// The piece was placed.
    Placed(PlacedMove),
}

impl MoveOutcome {
    /// Status after the placement, or `None` if it was ignored.
    pub fn status(&self) -> Option<GameStatus> {
        match self {
            MoveOutcome::Ignored(_) => None,
            MoveOutcome::Placed(placed) => Some(placed.status),
        }
    }

    /// Returns the placed move, if any.
    pub fn placed(&self) -> Option<&PlacedMove> {
        match self {
            MoveOutcome::Ignored(_) => None,
            MoveOutcome::Placed(placed) => Some(placed),
        }
    }
}
