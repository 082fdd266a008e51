//! Occupancy invariant: the board and the move queues tell the same story.

use super::super::{Player, Position, Round, Square};
use super::Invariant;

/// Invariant: a square is occupied by P iff P's queue contains it.
pub struct OccupancyConsistentInvariant;

impl Invariant<Round> for OccupancyConsistentInvariant {
    fn holds(round: &Round) -> bool {
        Position::ALL.into_iter().all(|pos| {
            let in_x = round.queue(Player::X).contains(pos);
            let in_o = round.queue(Player::O).contains(pos);
            match round.board().get(pos) {
                Square::Empty => !in_x && !in_o,
                Square::Occupied(Player::X) => in_x && !in_o,
                Square::Occupied(Player::O) => in_o && !in_x,
            }
        })
    }

    fn description() -> &'static str {
        "Board occupancy matches the move queues"
    }
}
