//! Win detection logic.

use super::super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the 8 lines that win the round.
///
/// Declaration order is the scan order: rows, then columns, then diagonals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum WinningLine {
    /// Squares 0, 1, 2.
    TopRow,
    /// Squares 3, 4, 5.
    MiddleRow,
    /// Squares 6, 7, 8.
    BottomRow,
    /// Squares 0, 3, 6.
    LeftColumn,
    /// Squares 1, 4, 7.
    CenterColumn,
    /// Squares 2, 5, 8.
    RightColumn,
    /// Squares 0, 4, 8.
    MainDiagonal,
    /// Squares 2, 4, 6.
    AntiDiagonal,
}

impl WinningLine {
    /// The three positions forming this line, in ascending index order.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            WinningLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinningLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinningLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinningLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinningLine::CenterColumn => [TopCenter, Center, BottomCenter],
            WinningLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinningLine::MainDiagonal => [TopLeft, Center, BottomRight],
            WinningLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// The three board indices forming this line.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }

    /// Returns true if all three squares hold pieces of `player`.
    pub fn is_complete_for(self, board: &Board, player: Player) -> bool {
        self.positions()
            .iter()
            .all(|pos| board.get(*pos).is_occupied_by(player))
    }
}

/// Finds the first line completed by `player`.
///
/// Only the given player's pieces are considered. After a placement the
/// mover is the only one who can have completed a line, so callers pass the
/// mover.
#[instrument(skip(board))]
pub fn winning_line_for(board: &Board, player: Player) -> Option<WinningLine> {
    WinningLine::iter().find(|line| line.is_complete_for(board, player))
}
