//! Geometry module - piece footprints as small boolean matrices
//!
//! Every piece kind has a fixed template inside a square bounding box. Rotation
//! remaps cells inside that same box, so `rows` and `cols` never change.
//! Templates are parsed into a fresh `Geometry` value on every lookup, which
//! means no two pieces ever share the matrix they rotate in place.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, MAX_PIECE_SIZE};

/// Maximum number of occupied cells a geometry can hold
pub const MAX_CELLS: usize = MAX_PIECE_SIZE * MAX_PIECE_SIZE;

/// Occupied cells of a geometry as `(row, col)` pairs, row-major order
pub type CellList = ArrayVec<(usize, usize), MAX_CELLS>;

/// Template patterns indexed by `PieceKind::index()`. `#` marks an occupied cell.
const TEMPLATES: [&[&str]; 7] = [
    // Z
    &[".#.", "##.", "#.."],
    // L
    &[".#.", ".#.", ".##"],
    // O
    &["##", "##"],
    // S
    &[".#.", ".##", "..#"],
    // I
    &[".#..", ".#..", ".#..", ".#.."],
    // J
    &[".#.", ".#.", "##."],
    // T
    &[".#.", "###", "..."],
];

/// A piece footprint: `rows x cols` cells inside a fixed-capacity matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    cells: [[bool; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
    rows: usize,
    cols: usize,
}

impl Geometry {
    /// Create an empty geometry with the given bounding box.
    ///
    /// Dimensions are clamped to `MAX_PIECE_SIZE`.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            cells: [[false; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
            rows: rows.min(MAX_PIECE_SIZE),
            cols: cols.min(MAX_PIECE_SIZE),
        }
    }

    /// Build a geometry from text rows, `#` for occupied and anything else empty.
    ///
    /// The bounding box is the number of rows by the length of the first row.
    pub fn from_pattern(pattern: &[&str]) -> Self {
        let rows = pattern.len();
        let cols = pattern.first().map_or(0, |row| row.chars().count());
        let mut geometry = Self::empty(rows, cols);
        for (row, line) in pattern.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                geometry.set(row, col, ch == '#');
            }
        }
        geometry
    }

    /// Fresh copy of the spawn template for `kind`.
    pub fn template(kind: PieceKind) -> Self {
        Self::from_pattern(TEMPLATES[kind.index()])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell value; anything outside the bounding box reads as empty.
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row][col]
    }

    /// Set a cell. Returns false if outside the bounding box.
    pub fn set(&mut self, row: usize, col: usize, occupied: bool) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.cells[row][col] = occupied;
        true
    }

    /// Clockwise quarter turn: `new[r][c] = old[cols - 1 - c][r]`.
    pub fn rotated_right(&self) -> Self {
        let mut out = Self::empty(self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.cells[row][col] = self.get(self.cols - 1 - col, row);
            }
        }
        out
    }

    /// Counter-clockwise quarter turn: `new[r][c] = old[c][rows - 1 - r]`.
    pub fn rotated_left(&self) -> Self {
        let mut out = Self::empty(self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.cells[row][col] = self.get(col, self.rows - 1 - row);
            }
        }
        out
    }

    /// Occupied cells in row-major order
    pub fn occupied(&self) -> CellList {
        let mut out = CellList::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.cells[row][col] {
                    out.push((row, col));
                }
            }
        }
        out
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.occupied().len()
    }

    /// First row (top to bottom) containing an occupied cell
    pub fn first_occupied_row(&self) -> Option<usize> {
        (0..self.rows).find(|&row| (0..self.cols).any(|col| self.cells[row][col]))
    }
}
