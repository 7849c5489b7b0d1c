use crate::geometry::Geometry;
use crate::piece::Piece;
use crate::types::{GamePhase, PieceKind, BOARD_COLS, BOARD_ROWS, FALL_SPEED_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub geometry: Geometry,
    pub x: i32,
    pub y: i32,
}

impl ActiveSnapshot {
    /// Board-relative `(row, col)` of each occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.geometry
            .occupied()
            .into_iter()
            .map(move |(row, col)| (self.y + row as i32, self.x + col as i32))
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            geometry: *value.geometry(),
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a renderer needs from the board alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub grid: [[bool; BOARD_COLS]; BOARD_ROWS],
    pub active: Option<ActiveSnapshot>,
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            grid: [[false; BOARD_COLS]; BOARD_ROWS],
            active: None,
        }
    }
}

/// Board plus session state (phase and scoring) for the side panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardSnapshot,
    pub phase: GamePhase,
    pub score: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: BoardSnapshot::default(),
            phase: GamePhase::Ready,
            score: 0,
            lines: 0,
            fall_interval_ms: FALL_SPEED_MS,
        }
    }
}
