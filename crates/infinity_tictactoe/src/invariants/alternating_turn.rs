//! Alternating turn invariant: X opens, then players alternate.

use super::super::queue::PIECE_LIMIT;
use super::super::{GameStatus, Player, Round};
use super::Invariant;

/// Invariant: piece counts agree with whose turn it is.
///
/// X always opens, so when X is due to move both players have the same
/// number of pieces down, and when O is due X is one piece ahead (or both
/// are at the limit). A won round keeps the winner as `to_move`, so the
/// player due next is the winner's opponent.
pub struct AlternatingTurnInvariant;

impl Invariant<Round> for AlternatingTurnInvariant {
    fn holds(round: &Round) -> bool {
        let next = match round.status() {
            GameStatus::InProgress => round.to_move(),
            GameStatus::Won { player, .. } => {
                if player != round.to_move() {
                    return false;
                }
                player.opponent()
            }
        };

        let x = round.queue(Player::X).len();
        let o = round.queue(Player::O).len();

        match next {
            Player::X => x == o,
            Player::O => x == o + 1 || (x == PIECE_LIMIT && o == PIECE_LIMIT),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
