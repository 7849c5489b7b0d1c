//! Board module - occupancy grid plus the active piece
//!
//! The grid is 20 rows x 10 columns of booleans; a cell is either occupied or
//! empty. Coordinates are `(row, col)` with row 0 at the top.
//!
//! Every transform on the active piece is transactional: apply it, check
//! [`Board::is_valid_placement`], and revert if the check fails. Only a failed
//! soft drop is reported back, as the signal that the piece must lock.

use crate::piece::Piece;
use crate::rng::PieceGenerator;
use crate::snapshot::{ActiveSnapshot, BoardSnapshot};
use crate::types::{GameAction, BOARD_COLS, BOARD_ROWS};

/// Row-major occupancy matrix
pub type Grid = [[bool; BOARD_COLS]; BOARD_ROWS];

const EMPTY_ROW: [bool; BOARD_COLS] = [false; BOARD_COLS];

/// The game board - 20 rows x 10 columns plus the single active piece
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    piece: Piece,
    generator: PieceGenerator,
}

impl Board {
    /// Create an empty board whose pieces are drawn from `seed`.
    ///
    /// The board comes up ready to play: empty grid, one piece spawned.
    pub fn new(seed: u32) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let piece = generator.spawn();
        Self {
            grid: [EMPTY_ROW; BOARD_ROWS],
            piece,
            generator,
        }
    }

    /// Clear the grid and spawn a fresh piece
    pub fn new_game(&mut self) {
        self.clear();
        self.spawn_piece();
    }

    /// Replace the active piece with a newly generated one
    pub fn spawn_piece(&mut self) {
        self.piece = self.generator.spawn();
    }

    /// Apply one action to the active piece.
    ///
    /// Returns true only when a soft drop was blocked, meaning the piece
    /// must be locked where it is. Every other rejected transform is
    /// silently reverted.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_shift(-1),
            GameAction::MoveRight => self.try_shift(1),
            GameAction::RotateLeft => {
                self.piece.rotate_left();
                if !self.is_valid_placement() {
                    self.piece.undo_rotate();
                }
            }
            GameAction::RotateRight => {
                self.piece.rotate_right();
                if !self.is_valid_placement() {
                    self.piece.undo_rotate();
                }
            }
            GameAction::SoftDrop => {
                self.piece.translate(0, 1);
                if !self.is_valid_placement() {
                    self.piece.translate(0, -1);
                    return true;
                }
            }
        }
        false
    }

    fn try_shift(&mut self, dx: i32) {
        self.piece.translate(dx, 0);
        if !self.is_valid_placement() {
            self.piece.translate(-dx, 0);
        }
    }

    /// Check that every occupied piece cell is inside the grid and on an empty cell
    pub fn is_valid_placement(&self) -> bool {
        self.piece
            .cells()
            .iter()
            .all(|&(row, col)| self.is_free(row, col))
    }

    /// Copy the active piece into the grid, then clear full rows.
    ///
    /// The current placement must already be valid. Returns rows cleared.
    pub fn lock_down(&mut self) -> usize {
        for (row, col) in self.piece.cells() {
            self.set(row, col, true);
        }
        self.clear_lines()
    }

    /// Remove every full row, scanning bottom to top.
    ///
    /// After a removal the same index is examined again, since the row above
    /// has shifted into it. Returns rows cleared.
    pub fn clear_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = BOARD_ROWS;
        while row > 0 {
            if self.is_row_full(row - 1) {
                self.remove_row(row - 1);
                cleared += 1;
            } else {
                row -= 1;
            }
        }
        cleared
    }

    /// Drop `row` and shift everything above it down by one
    fn remove_row(&mut self, row: usize) {
        // copy_within handles the overlapping ranges
        self.grid.copy_within(0..row, 1);
        self.grid[0] = EMPTY_ROW;
    }

    /// True when any cell of the top row is occupied
    pub fn is_game_over(&self) -> bool {
        self.grid[0].iter().any(|&cell| cell)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.grid
            .get(row)
            .is_some_and(|cells| cells.iter().all(|&cell| cell))
    }

    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<(usize, usize)> {
        if row < 0 || row >= BOARD_ROWS as i32 || col < 0 || col >= BOARD_COLS as i32 {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Cell at `(row, col)`; None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<bool> {
        Self::index(row, col).map(|(r, c)| self.grid[r][c])
    }

    /// Set cell at `(row, col)`. Returns false if out of bounds.
    pub fn set(&mut self, row: i32, col: i32, occupied: bool) -> bool {
        match Self::index(row, col) {
            Some((r, c)) => {
                self.grid[r][c] = occupied;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(false))
    }

    /// In bounds and occupied
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(true))
    }

    /// Count of occupied grid cells
    pub fn occupied_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&cell| cell).count()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Replace the active piece, e.g. to set up a position
    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }

    /// Seed of the shape generator
    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.grid = [EMPTY_ROW; BOARD_ROWS];
    }

    /// Write grid and active piece into an existing snapshot.
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.grid = self.grid;
        out.active = Some(ActiveSnapshot::from(self.piece));
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(1)
    }
}
