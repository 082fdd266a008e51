//! Infinity tic-tac-toe game logic.
//!
//! Each player may have at most three pieces on the board. Placing a fourth
//! removes that player's oldest piece, so rounds never end in a draw.
//!
//! # Architecture
//!
//! - **Round**: board, move queues, turn and status for one round
//! - **GameEngine**: a session - the current round plus scores, round counter
//!   and observers
//! - **Contracts / Invariants**: preconditions decide whether a placement is
//!   ignored; invariants are re-checked after every placement in debug builds
//!
//! # Example
//!
//! ```
//! use infinity_tictactoe::{GameEngine, GameStatus, Player, WinningLine};
//!
//! # fn main() -> Result<(), infinity_tictactoe::EngineError> {
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.place_move(index)?;
//! }
//! assert_eq!(
//!     engine.status(),
//!     GameStatus::Won { player: Player::X, line: WinningLine::TopRow }
//! );
//! assert_eq!(engine.scores().get(Player::X), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod error;
mod events;
pub mod invariants;
mod position;
mod queue;
mod round;
pub mod rules;
mod scoreboard;
mod snapshot;
mod types;

pub use action::{MoveOutcome, MoveRejection, PlacedMove};
pub use contracts::{Contract, PlacementContract, RoundIsActive, SquareIsEmpty};
pub use engine::GameEngine;
pub use error::{EngineError, EngineErrorKind};
pub use events::{GameEvent, GameObserver, ObserverId};
pub use invariants::{EngineInvariants, Invariant, InvariantSet, InvariantViolation};
pub use position::Position;
pub use queue::{MoveQueue, PIECE_LIMIT};
pub use round::Round;
pub use rules::{WinningLine, winning_line_for};
pub use scoreboard::Scoreboard;
pub use snapshot::EngineSnapshot;
pub use types::{Board, GameStatus, Player, Square};
