//! The game engine: one session of infinity tic-tac-toe.
//!
//! The engine owns the current [`Round`], the session [`Scoreboard`] and the
//! round counter. Presentation code reads its state and subscribes to its
//! events; it never mutates the board directly.

use super::contracts::{Contract, PlacementContract};
use super::events::{GameEvent, GameObserver, ObserverId};
use super::snapshot::EngineSnapshot;
use super::{
    Board, EngineError, EngineErrorKind, GameStatus, MoveOutcome, MoveQueue, Player, Position,
    Round, Scoreboard, Square, WinningLine,
};
use tracing::{debug, info, instrument};

/// A game session.
pub struct GameEngine {
    round: Round,
    scores: Scoreboard,
    round_count: u32,
    observers: Vec<(ObserverId, Box<dyn GameObserver>)>,
    next_observer: u64,
}

impl GameEngine {
    /// Starts a new session: empty board, X to move, round 1, no wins.
    #[instrument]
    pub fn new() -> Self {
        Self {
            round: Round::new(),
            scores: Scoreboard::new(),
            round_count: 1,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Moves
    // ─────────────────────────────────────────────────────────────

    /// Places a piece for the current player at a raw board index.
    ///
    /// # Errors
    ///
    /// Fails fast with [`EngineErrorKind::PositionOutOfRange`] when `index`
    /// is not in 0-8. Occupied squares and finished rounds are not errors;
    /// they yield [`MoveOutcome::Ignored`].
    #[instrument(skip(self))]
    pub fn place_move(&mut self, index: usize) -> Result<MoveOutcome, EngineError> {
        let pos = Position::from_index(index)
            .ok_or_else(|| EngineError::new(EngineErrorKind::PositionOutOfRange(index)))?;
        self.place(pos)
    }

    /// Places a piece for the current player.
    ///
    /// When the player already has three pieces down, the oldest is removed
    /// first. A completed line ends the round, scores it for the mover and
    /// leaves the mover as current player; otherwise the turn passes.
    ///
    /// # Errors
    ///
    /// Only in debug builds, when a postcondition check finds the engine in
    /// an inconsistent state.
    #[instrument(skip(self), fields(position = ?pos, player = ?self.round.to_move()))]
    pub fn place(&mut self, pos: Position) -> Result<MoveOutcome, EngineError> {
        if let Err(rejection) = PlacementContract::pre(&self.round, &pos) {
            debug!(%rejection, "Placement ignored");
            return Ok(MoveOutcome::Ignored(rejection));
        }

        #[cfg(debug_assertions)]
        let before = self.round.clone();

        let placed = self.round.apply(pos);

        #[cfg(debug_assertions)]
        if let Err(err) = PlacementContract::post(&before, &self.round) {
            self.round = before;
            return Err(err);
        }

        debug!(%placed, "Piece placed");
        self.emit(GameEvent::MovePlaced(placed));

        if let GameStatus::Won { player, line } = placed.status {
            let wins = self.scores.record_win(player);
            info!(?player, ?line, wins, "Round won");
            self.emit(GameEvent::RoundWon {
                winner: player,
                line,
                scores: self.scores,
            });
        }

        Ok(MoveOutcome::Placed(placed))
    }

    // ─────────────────────────────────────────────────────────────
    //  Lifecycle
    // ─────────────────────────────────────────────────────────────

    /// Clears the board for a fresh round with X to move.
    ///
    /// `advance_counter` bumps the round number; pass `false` for a manual
    /// restart that replays the current round number. Scores are kept.
    #[instrument(skip(self))]
    pub fn start_new_round(&mut self, advance_counter: bool) {
        self.round = Round::new();
        if advance_counter {
            self.round_count = self.round_count.saturating_add(1);
        }
        info!(round = self.round_count, "Round started");
        self.emit(GameEvent::RoundStarted {
            round: self.round_count,
            advanced: advance_counter,
        });
    }

    /// Starts over as a brand-new session. Observers stay subscribed.
    #[instrument(skip(self))]
    pub fn reset_session(&mut self) {
        self.round = Round::new();
        self.scores = Scoreboard::new();
        self.round_count = 1;
        info!("Session reset");
        self.emit(GameEvent::SessionReset);
    }

    // ─────────────────────────────────────────────────────────────
    //  Observers
    // ─────────────────────────────────────────────────────────────

    /// Registers an observer for state-change events.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        debug!(?id, "Observer subscribed");
        id
    }

    /// Removes an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn emit(&mut self, event: GameEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_event(&event);
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the current round.
    pub fn round_state(&self) -> &Round {
        &self.round
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.round.board()
    }

    /// Returns the square at a raw index.
    ///
    /// # Errors
    ///
    /// [`EngineErrorKind::PositionOutOfRange`] when `index` is not in 0-8.
    pub fn cell(&self, index: usize) -> Result<Square, EngineError> {
        self.board()
            .square_at(index)
            .ok_or_else(|| EngineError::new(EngineErrorKind::PositionOutOfRange(index)))
    }

    /// Player to move, or the winner once the round is won.
    pub fn current_player(&self) -> Player {
        self.round.to_move()
    }

    /// Returns true while placements are accepted.
    pub fn is_active(&self) -> bool {
        self.round.is_active()
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.round.status()
    }

    /// Returns the completed line once the round is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.status().line()
    }

    /// Returns a player's pieces, oldest first.
    pub fn queue(&self, player: Player) -> &MoveQueue {
        self.round.queue(player)
    }

    /// Returns the session scores.
    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Returns the round number (starts at 1).
    pub fn round(&self) -> u32 {
        self.round_count
    }

    /// The piece `player` loses on their next move, if their queue is full.
    pub fn fading_position(&self, player: Player) -> Option<Position> {
        self.queue(player).fading()
    }

    /// Board index of the piece `player` loses on their next move.
    pub fn fading_index(&self, player: Player) -> Option<usize> {
        self.fading_position(player).map(Position::to_index)
    }

    /// Returns a serializable copy of everything a renderer needs.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::from(self)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("round", &self.round)
            .field("scores", &self.scores)
            .field("round_count", &self.round_count)
            .field("observers", &self.observers.len())
            .finish()
    }
}
