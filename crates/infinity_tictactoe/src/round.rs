//! Round-scoped state: board, move queues, turn and status.

use super::contracts::{Contract, PlacementContract};
use super::queue::MoveQueue;
use super::rules::winning_line_for;
use super::{Board, GameStatus, MoveRejection, PlacedMove, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// State of a single round.
///
/// Created empty with X to move. Mutated only by placements; a new round
/// replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub(crate) board: Board,
    pub(crate) x_queue: MoveQueue,
    pub(crate) o_queue: MoveQueue,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
}

impl Round {
    /// Creates an empty round with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            x_queue: MoveQueue::new(),
            o_queue: MoveQueue::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the winner once the round is won.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true while placements are accepted.
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Returns a player's move queue.
    pub fn queue(&self, player: Player) -> &MoveQueue {
        match player {
            Player::X => &self.x_queue,
            Player::O => &self.o_queue,
        }
    }

    fn queue_mut(&mut self, player: Player) -> &mut MoveQueue {
        match player {
            Player::X => &mut self.x_queue,
            Player::O => &mut self.o_queue,
        }
    }

    /// Places a piece for the player to move.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveRejection`] when the round is over or the square is
    /// taken. The round is unchanged in that case.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<PlacedMove, MoveRejection> {
        PlacementContract::pre(self, &pos)?;
        Ok(self.apply(pos))
    }

    /// Applies a placement whose preconditions already hold.
    pub(crate) fn apply(&mut self, pos: Position) -> PlacedMove {
        let player = self.to_move;

        let evicted = self.queue_mut(player).evict_if_full();
        if let Some(old) = evicted {
            debug!(?old, ?player, "Evicting oldest piece");
            self.board.set(old, Square::Empty);
        }

        self.board.set(pos, Square::Occupied(player));
        self.queue_mut(player).push(pos);

        match winning_line_for(&self.board, player) {
            Some(line) => {
                self.status = GameStatus::Won { player, line };
            }
            None => {
                self.to_move = player.opponent();
            }
        }

        PlacedMove {
            player,
            position: pos,
            evicted,
            status: self.status,
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
