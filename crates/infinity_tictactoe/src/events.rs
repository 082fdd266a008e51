//! State-change notifications for presentation collaborators.
//!
//! Observers are called synchronously, in registration order, from inside
//! the engine call that caused the change.

use super::{PlacedMove, Player, Scoreboard, WinningLine};
use serde::{Deserialize, Serialize};

/// Something the engine changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A piece was placed (and possibly an old one removed).
    MovePlaced(PlacedMove),
    /// The round ended with a win.
    RoundWon {
        /// Who won.
        winner: Player,
        /// The completed line, for highlighting.
        line: WinningLine,
        /// Scores after the win.
        scores: Scoreboard,
    },
    /// A fresh round began.
    RoundStarted {
        /// Round number now in play.
        round: u32,
        /// Whether the round counter moved forward.
        advanced: bool,
    },
    /// Scores and round counter were reset.
    SessionReset,
}

/// Receives engine notifications.
pub trait GameObserver {
    /// Called once per event.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Handle returned by [`GameEngine::subscribe`](crate::GameEngine::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);
