//! Per-player sliding window of pieces on the board.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of pieces a player may have on the board at once.
pub const PIECE_LIMIT: usize = 3;

/// Pieces a player currently has on the board, oldest first.
///
/// Insertion order is placement order. Eviction is always from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveQueue {
    pieces: VecDeque<Position>,
}

impl MoveQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            pieces: VecDeque::with_capacity(PIECE_LIMIT),
        }
    }

    /// Number of pieces on the board.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns true if the player has no pieces on the board.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Returns true if the next placement will evict the oldest piece.
    pub fn is_full(&self) -> bool {
        self.pieces.len() >= PIECE_LIMIT
    }

    /// Oldest piece still on the board.
    pub fn oldest(&self) -> Option<Position> {
        self.pieces.front().copied()
    }

    /// The piece that vanishes on this player's next move, if any.
    pub fn fading(&self) -> Option<Position> {
        if self.is_full() { self.oldest() } else { None }
    }

    /// Returns true if `pos` is one of this player's pieces.
    pub fn contains(&self, pos: Position) -> bool {
        self.pieces.contains(&pos)
    }

    /// Iterates pieces oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.pieces.iter().copied()
    }

    /// Pieces as board indices, oldest first.
    pub fn indices(&self) -> Vec<usize> {
        self.iter().map(Position::to_index).collect()
    }

    /// Removes and returns the oldest piece when the queue is at the limit.
    pub(crate) fn evict_if_full(&mut self) -> Option<Position> {
        if self.is_full() {
            self.pieces.pop_front()
        } else {
            None
        }
    }

    /// Appends a newly placed piece.
    ///
    /// Callers evict first; the queue never holds more than [`PIECE_LIMIT`].
    pub(crate) fn push(&mut self, pos: Position) {
        debug_assert!(!self.is_full(), "push on a full move queue");
        self.pieces.push_back(pos);
    }
}
