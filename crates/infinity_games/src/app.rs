//! Application state and logic.
//!
//! The app owns a [`GameEngine`] and learns about changes through an
//! observer channel. Rendering reads the engine; only key handling mutates it.

use crate::config::AppConfig;
use crate::input::{Action, action_for};
use crossterm::event::KeyCode;
use infinity_tictactoe::{GameEngine, GameEvent, MoveOutcome, Player, Position};
use std::sync::mpsc::{self, Receiver};
use std::time::Instant;
use tracing::{debug, error, instrument};

/// Main application state.
pub struct App {
    engine: GameEngine,
    events: Receiver<GameEvent>,
    config: AppConfig,
    cursor: Position,
    status_message: String,
    won_at: Option<Instant>,
    show_dialog: bool,
    running: bool,
}

impl App {
    /// Creates a new application with a fresh session.
    #[instrument(skip(config))]
    pub fn new(config: AppConfig) -> Self {
        let mut engine = GameEngine::new();
        let (tx, events) = mpsc::channel();
        engine.subscribe(move |event: &GameEvent| {
            // Receiver lives as long as the app; a closed channel only
            // happens during teardown.
            let _ = tx.send(event.clone());
        });

        Self {
            engine,
            events,
            config,
            cursor: Position::Center,
            status_message: "Player X's turn. Arrows + Enter, or 1-9 to place.".to_string(),
            won_at: None,
            show_dialog: false,
            running: true,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the win dialog should be on screen.
    pub fn show_dialog(&self) -> bool {
        self.show_dialog
    }

    /// Returns false after the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Square to dim as the next to vanish, if the warning is enabled.
    pub fn fading_position(&self) -> Option<Position> {
        if !*self.config.show_fading_warning() || !self.engine.is_active() {
            return None;
        }
        self.engine.fading_position(self.engine.current_player())
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match action_for(self.cursor, key) {
            Action::MoveCursor(pos) => self.cursor = pos,
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::PlaceAt(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::NextRound => {
                if self.engine.is_active() {
                    self.status_message =
                        "Round still in play. Press r to restart it.".to_string();
                } else {
                    self.engine.start_new_round(true);
                }
            }
            Action::Restart => self.engine.start_new_round(false),
            Action::Quit => {
                debug!("Quit requested");
                self.running = false;
            }
            Action::None => {}
        }
        self.tick(now);
    }

    /// Drains engine events and reveals the win dialog once its delay passed.
    pub fn tick(&mut self, now: Instant) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event, now);
        }

        if let Some(won_at) = self.won_at
            && now.saturating_duration_since(won_at) >= self.config.victory_delay()
        {
            self.show_dialog = true;
        }
    }

    fn place(&mut self, pos: Position) {
        match self.engine.place(pos) {
            Ok(MoveOutcome::Ignored(rejection)) => {
                debug!(%rejection, "Move ignored");
            }
            Ok(MoveOutcome::Placed(_)) => {}
            Err(e) => {
                error!(error = %e, "Engine rejected move");
                self.status_message = format!("Engine error: {}", e);
            }
        }
    }

    fn handle_event(&mut self, event: GameEvent, now: Instant) {
        debug!(?event, "Engine event");
        match event {
            GameEvent::MovePlaced(placed) => {
                if placed.is_win() {
                    return;
                }
                self.status_message = format!(
                    "{}. Player {}'s turn.",
                    placed,
                    self.engine.current_player()
                );
            }
            GameEvent::RoundWon { winner, .. } => {
                self.won_at = Some(now);
                self.status_message = format!("Player {} wins!", winner);
            }
            GameEvent::RoundStarted { round, .. } => {
                self.won_at = None;
                self.show_dialog = false;
                self.status_message = format!("Round {:02}. Player {}'s turn.", round, Player::X);
            }
            GameEvent::SessionReset => {
                self.won_at = None;
                self.show_dialog = false;
                self.status_message = "New session. Player X's turn.".to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn press_all(app: &mut App, keys: &[char], now: Instant) {
        for key in keys {
            app.handle_key(KeyCode::Char(*key), now);
        }
    }

    #[test]
    fn test_number_key_places_and_moves_cursor() {
        let mut app = App::new(AppConfig::default());
        app.handle_key(KeyCode::Char('1'), Instant::now());

        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.engine().current_player(), Player::O);
        assert!(app.status_message().contains("Player O's turn"));
    }

    #[test]
    fn test_dialog_waits_for_victory_delay() {
        let mut app = App::new(AppConfig::default());
        let start = Instant::now();
        // X: 1 2 3 (top row), O: 4 5
        press_all(&mut app, &['1', '4', '2', '5', '3'], start);

        assert!(!app.engine().is_active());
        assert_eq!(app.status_message(), "Player X wins!");
        assert!(!app.show_dialog());

        app.tick(start + Duration::from_millis(599));
        assert!(!app.show_dialog());
        app.tick(start + Duration::from_millis(600));
        assert!(app.show_dialog());
    }

    #[test]
    fn test_next_round_only_after_win() {
        let mut app = App::new(AppConfig::default());
        let now = Instant::now();
        app.handle_key(KeyCode::Char('n'), now);
        assert_eq!(app.engine().round(), 1);

        press_all(&mut app, &['1', '4', '2', '5', '3', 'n'], now);
        assert_eq!(app.engine().round(), 2);
        assert!(app.engine().is_active());
        assert!(!app.show_dialog());
        assert_eq!(app.engine().scores().get(Player::X), 1);
    }

    #[test]
    fn test_restart_keeps_round_number() {
        let mut app = App::new(AppConfig::default());
        press_all(&mut app, &['5', '1', 'r'], Instant::now());

        assert_eq!(app.engine().round(), 1);
        assert!(app.engine().queue(Player::X).is_empty());
        assert_eq!(app.status_message(), "Round 01. Player X's turn.");
    }

    #[test]
    fn test_fading_warning_respects_config() {
        let now = Instant::now();
        let keys = ['1', '2', '9', '4', '6', '8'];

        let mut app = App::new(AppConfig::default());
        press_all(&mut app, &keys, now);
        assert_eq!(app.fading_position(), Some(Position::TopLeft));

        let mut quiet = App::new(AppConfig::default().with_fading_warning(false));
        press_all(&mut quiet, &keys, now);
        assert_eq!(quiet.fading_position(), None);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(AppConfig::default());
        app.handle_key(KeyCode::Char('q'), Instant::now());
        assert!(!app.is_running());
    }
}
