//! Session-scoped win counts.

use super::Player;
use serde::{Deserialize, Serialize};

/// Rounds won by each player this session.
///
/// Survives round resets. Counts only ever go up; a new session starts a
/// fresh scoreboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    x: u32,
    o: u32,
}

impl Scoreboard {
    /// Creates a scoreboard with no wins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Records a round win and returns the new count.
    pub(crate) fn record_win(&mut self, player: Player) -> u32 {
        let slot = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *slot = slot.saturating_add(1);
        *slot
    }

    /// Rounds won by either player.
    pub fn total(&self) -> u32 {
        self.x + self.o
    }

    /// HUD label, e.g. `X : 03`.
    pub fn label(&self, player: Player) -> String {
        format!("{} : {:02}", player, self.get(player))
    }
}
