//! Piece limit invariant: no player ever has more than three pieces down.

use super::super::queue::PIECE_LIMIT;
use super::super::{Player, Round};
use super::Invariant;
use std::collections::HashSet;

/// Invariant: each move queue holds at most [`PIECE_LIMIT`] distinct positions.
pub struct PieceLimitInvariant;

impl Invariant<Round> for PieceLimitInvariant {
    fn holds(round: &Round) -> bool {
        [Player::X, Player::O].into_iter().all(|player| {
            let queue = round.queue(player);
            let distinct: HashSet<_> = queue.iter().collect();
            queue.len() <= PIECE_LIMIT && distinct.len() == queue.len()
        })
    }

    fn description() -> &'static str {
        "Each player has at most three distinct pieces on the board"
    }
}
