//! Session tests - phases, gravity timer, scoring, game over

use blockfall::core::{GameSession, LockEvent, Piece, ScoreBoard, ScoringPolicy};
use blockfall::types::{GameAction, GamePhase, PieceKind, BOARD_COLS, FALL_SPEED_MS};

fn playing(seed: u32) -> GameSession {
    let mut session = GameSession::new(seed);
    session.new_game();
    assert!(session.start());
    session
}

/// Soft-drop until the active piece locks.
fn drop_to_lock(session: &mut GameSession) -> LockEvent {
    loop {
        if let Some(event) = session.apply_action(GameAction::SoftDrop) {
            return event;
        }
    }
}

#[test]
fn test_session_lifecycle() {
    let mut session = GameSession::new(1);
    assert_eq!(session.phase(), GamePhase::Ready);
    assert!(session.start());
    assert_eq!(session.phase(), GamePhase::Playing);
    assert!(!session.start());

    session.stop();
    assert_eq!(session.phase(), GamePhase::GameOver);
    assert!(!session.start());

    session.new_game();
    assert_eq!(session.phase(), GamePhase::Ready);
}

#[test]
fn test_actions_ignored_unless_playing() {
    let mut session = GameSession::new(1);
    let before = *session.board().piece();
    assert_eq!(session.apply_action(GameAction::MoveLeft), None);
    assert_eq!(session.tick(FALL_SPEED_MS * 4), None);
    assert_eq!(*session.board().piece(), before);
}

#[test]
fn test_gravity_step_after_full_interval() {
    let mut session = playing(7);
    let y0 = session.board().piece().y;

    session.tick(FALL_SPEED_MS - 1);
    assert_eq!(session.board().piece().y, y0);
    assert_eq!(session.time_until_fall_ms(), 1);

    session.tick(1);
    assert_eq!(session.board().piece().y, y0 + 1);
    assert_eq!(session.time_until_fall_ms(), FALL_SPEED_MS);
}

#[test]
fn test_one_step_per_tick_even_when_late() {
    let mut session = playing(7);
    let y0 = session.board().piece().y;
    session.tick(FALL_SPEED_MS * 3);
    assert_eq!(session.board().piece().y, y0 + 1);
}

#[test]
fn test_lock_spawns_next_piece() {
    let mut session = playing(11);
    let event = drop_to_lock(&mut session);

    assert_eq!(event, LockEvent { rows_cleared: 0, game_over: false });
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.pieces_locked(), 1);
    assert_eq!(session.board().occupied_count(), 4);

    let next = *session.board().piece();
    assert_eq!(next, Piece::new(next.kind()));
}

#[test]
fn test_clearing_a_row_scores_ten_points() {
    let mut session = playing(3);
    let board = session.board_mut();
    for col in 0..BOARD_COLS as i32 {
        if col != 4 && col != 5 {
            board.set(19, col, true);
        }
    }
    board.set_piece(Piece::new(PieceKind::O));

    let event = drop_to_lock(&mut session);
    assert_eq!(event.rows_cleared, 1);
    assert_eq!(session.score(), 10);
    assert_eq!(session.lines(), 1);
    // The O's upper half is all that remains.
    assert_eq!(session.board().occupied_count(), 2);
}

#[test]
fn test_two_rows_at_once_score_twenty() {
    let mut session = playing(3);
    let board = session.board_mut();
    for row in [18, 19] {
        for col in 0..BOARD_COLS as i32 {
            if col != 0 && col != 1 {
                board.set(row, col, true);
            }
        }
    }
    board.set_piece(Piece::new(PieceKind::O).at(0, 0));

    let event = drop_to_lock(&mut session);
    assert_eq!(event.rows_cleared, 2);
    assert_eq!(session.score(), 20);
    assert_eq!(session.lines(), 2);
    assert_eq!(session.board().occupied_count(), 0);
}

#[test]
fn test_game_over_when_lock_reaches_top_row() {
    let mut session = playing(5);
    let board = session.board_mut();
    // Blocker right under the spawn row stops the O at rows 0..2.
    board.set(2, 4, true);
    board.set_piece(Piece::new(PieceKind::O).at(4, 0));

    let event = drop_to_lock(&mut session);
    assert!(event.game_over);
    assert_eq!(session.phase(), GamePhase::GameOver);
    assert!(session.board().is_game_over());

    // Further input is ignored.
    let frozen = session.board().snapshot();
    assert_eq!(session.apply_action(GameAction::MoveLeft), None);
    assert_eq!(session.tick(FALL_SPEED_MS), None);
    assert_eq!(session.board().snapshot(), frozen);
}

#[test]
fn test_new_game_resets_everything() {
    let mut session = playing(9);
    session.board_mut().set(19, 0, true);
    drop_to_lock(&mut session);
    session.tick(100);

    session.new_game();
    assert_eq!(session.phase(), GamePhase::Ready);
    assert_eq!(session.score(), 0);
    assert_eq!(session.lines(), 0);
    assert_eq!(session.pieces_locked(), 0);
    assert_eq!(session.board().occupied_count(), 0);
    assert_eq!(session.time_until_fall_ms(), FALL_SPEED_MS);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = playing(2024);
    let mut b = playing(2024);
    for _ in 0..10 {
        drop_to_lock(&mut a);
        drop_to_lock(&mut b);
        assert_eq!(a.board().piece().kind(), b.board().piece().kind());
        assert_eq!(a.board().grid(), b.board().grid());
        if a.phase() == GamePhase::GameOver {
            break;
        }
    }
}

#[test]
fn test_snapshot_reflects_session() {
    let mut session = playing(4);
    session.board_mut().set(19, 9, true);
    let snap = session.snapshot();

    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.fall_interval_ms, FALL_SPEED_MS);
    assert!(snap.board.grid[19][9]);
    assert_eq!(snap.board.active.map(|a| a.kind), Some(session.board().piece().kind()));
}

/// Doubles every clear and speeds up after ten lines.
#[derive(Debug, Default)]
struct Doubled {
    score: u32,
    lines: u32,
}

impl ScoringPolicy for Doubled {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record_lines(&mut self, rows: usize) {
        self.lines += rows as u32;
        self.score += rows as u32 * 20;
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn lines(&self) -> u32 {
        self.lines
    }

    fn fall_interval_ms(&self) -> u32 {
        if self.lines >= 10 {
            100
        } else {
            200
        }
    }
}

#[test]
fn test_custom_scoring_policy() {
    let mut session = GameSession::with_scoring(1, Doubled::default());
    session.new_game();
    session.start();
    assert_eq!(session.fall_interval_ms(), 200);

    let board = session.board_mut();
    for col in 0..BOARD_COLS as i32 {
        if col != 4 && col != 5 {
            board.set(19, col, true);
        }
    }
    board.set_piece(Piece::new(PieceKind::O));
    while session.apply_action(GameAction::SoftDrop).is_none() {}

    assert_eq!(session.score(), 20);
    assert_eq!(session.scoring().lines, 1);
}

#[test]
fn test_fall_interval_override() {
    let session = GameSession::with_scoring(1, ScoreBoard::new().with_fall_interval(120));
    assert_eq!(session.fall_interval_ms(), 120);
    assert_eq!(session.time_until_fall_ms(), 120);
}
