//! Game session module - the driver-side state machine
//!
//! Wraps a [`Board`] with the explicit game phase, the scoring policy, and the
//! gravity timer. Everything the terminal loop needs goes through here:
//!
//! - `new_game` puts the session in `Ready` with an empty board
//! - `start` moves `Ready -> Playing`
//! - `apply_action` and `tick` forward to the board only while `Playing`
//! - a blocked soft drop locks the piece, scores it, and either spawns the
//!   next piece or ends the game

use tracing::{debug, info};

use crate::board::Board;
use crate::scoring::{ScoreBoard, ScoringPolicy};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GamePhase};

/// Result of locking a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub rows_cleared: usize,
    /// Top row was occupied after the lock; no new piece was spawned
    pub game_over: bool,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession<S = ScoreBoard> {
    board: Board,
    scoring: S,
    phase: GamePhase,
    /// Time accumulated since the last gravity step
    fall_timer_ms: u32,
    /// Number of pieces locked this game
    pieces_locked: u32,
}

impl GameSession<ScoreBoard> {
    /// Create a session with the default scoring policy
    pub fn new(seed: u32) -> Self {
        Self::with_scoring(seed, ScoreBoard::new())
    }
}

impl<S: ScoringPolicy> GameSession<S> {
    pub fn with_scoring(seed: u32, scoring: S) -> Self {
        Self {
            board: Board::new(seed),
            scoring,
            phase: GamePhase::Ready,
            fall_timer_ms: 0,
            pieces_locked: 0,
        }
    }

    /// Reset board and counters; the session waits in `Ready` for `start`.
    pub fn new_game(&mut self) {
        self.board.new_game();
        self.scoring.reset();
        self.phase = GamePhase::Ready;
        self.fall_timer_ms = 0;
        self.pieces_locked = 0;
        info!(seed = self.board.seed(), "new game");
    }

    /// Begin play. Returns false unless the session was `Ready`.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Ready {
            return false;
        }
        self.phase = GamePhase::Playing;
        debug!("game started");
        true
    }

    /// End the current game without waiting for the board to fill up
    pub fn stop(&mut self) {
        if self.phase != GamePhase::GameOver {
            self.phase = GamePhase::GameOver;
            info!(score = self.scoring.score(), "game stopped");
        }
    }

    /// Forward one action to the board.
    ///
    /// Ignored outside `Playing`. Returns the lock outcome when the action
    /// caused the active piece to lock.
    pub fn apply_action(&mut self, action: GameAction) -> Option<LockEvent> {
        if !self.phase.is_playing() {
            return None;
        }
        if self.board.apply_action(action) {
            return Some(self.handle_lock_down());
        }
        None
    }

    /// Advance the gravity timer by `elapsed_ms`.
    ///
    /// Once a full fall interval has accumulated, the piece is soft-dropped
    /// and the timer restarts from zero.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<LockEvent> {
        if !self.phase.is_playing() {
            return None;
        }
        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.scoring.fall_interval_ms() {
            return None;
        }
        self.fall_timer_ms = 0;
        self.apply_action(GameAction::SoftDrop)
    }

    /// Milliseconds left before the next gravity step
    pub fn time_until_fall_ms(&self) -> u32 {
        self.scoring
            .fall_interval_ms()
            .saturating_sub(self.fall_timer_ms)
    }

    fn handle_lock_down(&mut self) -> LockEvent {
        let rows_cleared = self.board.lock_down();
        self.scoring.record_lines(rows_cleared);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        debug!(
            kind = ?self.board.piece().kind(),
            rows_cleared,
            score = self.scoring.score(),
            "piece locked"
        );

        if self.board.is_game_over() {
            self.phase = GamePhase::GameOver;
            info!(
                score = self.scoring.score(),
                lines = self.scoring.lines(),
                pieces = self.pieces_locked,
                "game over"
            );
            return LockEvent {
                rows_cleared,
                game_over: true,
            };
        }

        self.board.spawn_piece();
        LockEvent {
            rows_cleared,
            game_over: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for setting up positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    pub fn score(&self) -> u32 {
        self.scoring.score()
    }

    pub fn lines(&self) -> u32 {
        self.scoring.lines()
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.scoring.fall_interval_ms()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.snapshot_into(&mut out.board);
        out.phase = self.phase;
        out.score = self.scoring.score();
        out.lines = self.scoring.lines();
        out.fall_interval_ms = self.scoring.fall_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession<ScoreBoard> {
    fn default() -> Self {
        Self::new(1)
    }
}
