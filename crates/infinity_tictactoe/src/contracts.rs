//! Contract-based validation for placements.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} placement {Q}. A failed precondition is a rejected placement; a
//! failed postcondition is an engine bug.

use super::invariants::{EngineInvariants, InvariantSet};
use super::round::Round;
use super::{EngineError, EngineErrorKind, MoveRejection, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

/// Precondition: the round has not been won.
pub struct RoundIsActive;

impl RoundIsActive {
    /// Rejects placements once the round is over.
    #[instrument(skip(round))]
    pub fn check(round: &Round) -> Result<(), MoveRejection> {
        if round.is_active() {
            Ok(())
        } else {
            Err(MoveRejection::RoundOver)
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects placements onto occupied squares.
    #[instrument(skip(round))]
    pub fn check(pos: Position, round: &Round) -> Result<(), MoveRejection> {
        if round.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(pos))
        }
    }
}

/// Contract for placements.
///
/// Preconditions:
/// - Round is active
/// - Square is empty
///
/// Postconditions:
/// - Queues stay within the piece limit
/// - Board occupancy matches the queues
/// - Players still alternate
pub struct PlacementContract;

impl Contract<Round, Position> for PlacementContract {
    fn pre(round: &Round, pos: &Position) -> Result<(), MoveRejection> {
        RoundIsActive::check(round)?;
        SquareIsEmpty::check(*pos, round)
    }

    fn post(_before: &Round, after: &Round) -> Result<(), EngineError> {
        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            EngineError::new(EngineErrorKind::InvariantViolation(descriptions))
        })
    }
}
