//! Shared types and constants for the falling-block game.
//!
//! Everything here is plain data with no dependencies, so the same definitions
//! serve the board core, the terminal view and the input map.
//!
//! # Board Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, row 0 is the top)
//! - **Columns**: 10 (indexed 0-9, column 0 is the left wall)
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_SPEED_MS` | 500 | Gravity interval, one row per tick |
//! | `POINTS_PER_LINE` | 10 | Linear bonus per cleared row |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PieceKind::I.letter(), "I");
//!
//! assert_eq!(BOARD_ROWS, 20);
//! assert_eq!(BOARD_COLS, 10);
//! ```

/// Board height in cells (20 rows)
pub const BOARD_ROWS: usize = 20;

/// Board width in cells (10 columns)
pub const BOARD_COLS: usize = 10;

/// Largest bounding box of any piece geometry (the I piece is 4x4)
pub const MAX_PIECE_SIZE: usize = 4;

/// Gravity interval in milliseconds.
///
/// The fall speed does not change with cleared lines; scoring policies report
/// this value back to the driver after every lock.
pub const FALL_SPEED_MS: u32 = 500;

/// Points awarded for each cleared row
pub const POINTS_PER_LINE: u32 = 10;

/// Render color for locked grid cells (light gray)
pub const LOCKED_CELL_COLOR: (u8, u8, u8) = (0xD3, 0xD3, 0xD3);

/// The seven piece kinds, in generator order.
///
/// - **Z**: red
/// - **L**: orange
/// - **O**: yellow, 2x2 square
/// - **S**: green
/// - **I**: cyan, 4 cells tall
/// - **J**: blue
/// - **T**: pink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Z,
    L,
    O,
    S,
    I,
    J,
    T,
}

impl PieceKind {
    /// All kinds, indexed the way the generator draws them.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Z,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::I,
        PieceKind::J,
        PieceKind::T,
    ];

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PieceKind::Z => 0,
            PieceKind::L => 1,
            PieceKind::O => 2,
            PieceKind::S => 3,
            PieceKind::I => 4,
            PieceKind::J => 5,
            PieceKind::T => 6,
        }
    }

    /// Single uppercase letter, used by the side panel.
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::Z => "Z",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::T => "T",
        }
    }

    /// Render color as an `(r, g, b)` triple.
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::Z.color(), (0xF5, 0x2D, 0x41));
    /// assert_eq!(PieceKind::I.color(), (0x00, 0xFF, 0xFF));
    /// ```
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::Z => (0xF5, 0x2D, 0x41),
            PieceKind::L => (0xFF, 0xA5, 0x00),
            PieceKind::O => (0xFF, 0xFF, 0x00),
            PieceKind::S => (0x00, 0x80, 0x00),
            PieceKind::I => (0x00, 0xFF, 0xFF),
            PieceKind::J => (0x4C, 0xB5, 0xF5),
            PieceKind::T => (0xFF, 0xC0, 0xCB),
        }
    }
}

/// Discrete actions accepted by the board.
///
/// Anything the input layer cannot map to one of these is dropped before it
/// reaches the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Rotate 90° counter-clockwise inside the bounding box
    RotateLeft,
    /// Rotate 90° clockwise inside the bounding box
    RotateRight,
    /// Move one row down; the gravity tick uses this too
    SoftDrop,
}

/// Game phase owned by the session driver.
///
/// Transitions: `Ready -> Playing -> GameOver`. `Ready` is only re-entered
/// through an explicit new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Ready,
    Playing,
    GameOver,
}

impl GamePhase {
    /// Status line shown next to the board.
    pub fn status_text(&self) -> &'static str {
        match self {
            GamePhase::Ready => "Ready to Play!",
            GamePhase::Playing => "Playing",
            GamePhase::GameOver => "Game Over!",
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_and_timing_constants() {
        assert_eq!(BOARD_ROWS, 20);
        assert_eq!(BOARD_COLS, 10);
        assert_eq!(FALL_SPEED_MS, 500);
        assert_eq!(POINTS_PER_LINE, 10);
    }

    #[test]
    fn kind_index_roundtrip() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::ALL[kind.index()], *kind);
        }
    }

    #[test]
    fn phase_defaults_to_ready() {
        assert_eq!(GamePhase::default(), GamePhase::Ready);
        assert!(!GamePhase::Ready.is_playing());
        assert!(GamePhase::Playing.is_playing());
        assert_eq!(GamePhase::GameOver.status_text(), "Game Over!");
    }
}
