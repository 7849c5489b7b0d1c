//! Scoring module - linear per-line bonus and fall speed lookup
//!
//! The session driver feeds the rows cleared by every lock into a
//! [`ScoringPolicy`] and asks it for the gravity interval afterwards.
//! [`ScoreBoard`] is the default policy: 10 points per row, constant speed.

use crate::types::{FALL_SPEED_MS, POINTS_PER_LINE};

/// Points for clearing `rows` rows at once
pub fn line_clear_score(rows: usize) -> u32 {
    (rows as u32).saturating_mul(POINTS_PER_LINE)
}

/// Gravity interval for a given cleared-lines total.
///
/// Speed does not ramp up; every total maps to the same interval.
pub fn fall_interval_for_lines(_lines: u32) -> u32 {
    FALL_SPEED_MS
}

/// Scoring collaborator consumed by the session driver.
pub trait ScoringPolicy {
    /// Zero all counters for a new game
    fn reset(&mut self);

    /// Account for one lock that cleared `rows` rows (possibly 0)
    fn record_lines(&mut self, rows: usize);

    fn score(&self) -> u32;

    fn lines(&self) -> u32;

    /// Current gravity interval in milliseconds
    fn fall_interval_ms(&self) -> u32;
}

/// Default policy: cumulative score and lines, constant fall speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    score: u32,
    lines: u32,
    /// Replaces the lookup table when set
    fall_override_ms: Option<u32>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed gravity interval instead of the lookup
    pub fn with_fall_interval(mut self, ms: u32) -> Self {
        self.fall_override_ms = Some(ms.max(1));
        self
    }
}

impl ScoringPolicy for ScoreBoard {
    fn reset(&mut self) {
        self.score = 0;
        self.lines = 0;
    }

    fn record_lines(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        self.score = self.score.saturating_add(line_clear_score(rows));
        self.lines = self.lines.saturating_add(rows as u32);
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn lines(&self) -> u32 {
        self.lines
    }

    fn fall_interval_ms(&self) -> u32 {
        self.fall_override_ms
            .unwrap_or_else(|| fall_interval_for_lines(self.lines))
    }
}
