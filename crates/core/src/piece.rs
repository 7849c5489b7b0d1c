//! Piece module - the active falling piece
//!
//! A piece owns its own geometry copy and rotates it in place. Before every
//! rotation the current geometry is saved so the board can roll back a
//! disallowed orientation with [`Piece::undo_rotate`].

use arrayvec::ArrayVec;

use crate::geometry::{Geometry, MAX_CELLS};
use crate::types::{PieceKind, BOARD_COLS};

/// Board-relative `(row, col)` positions of a piece's occupied cells
pub type BoardCells = ArrayVec<(i32, i32), MAX_CELLS>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    geometry: Geometry,
    /// Geometry before the most recent rotation
    saved: Geometry,
    /// Column of the bounding box's left edge
    pub x: i32,
    /// Row of the bounding box's top edge (negative above the grid)
    pub y: i32,
}

impl Piece {
    /// Create a piece at its spawn position.
    ///
    /// Horizontally centered; vertically raised so the first occupied row of
    /// the template sits on row 0.
    pub fn new(kind: PieceKind) -> Self {
        let geometry = Geometry::template(kind);
        let x = (BOARD_COLS as i32 - geometry.cols() as i32) / 2;
        let y = -(geometry.first_occupied_row().unwrap_or(0) as i32);
        Self {
            kind,
            geometry,
            saved: geometry,
            x,
            y,
        }
    }

    /// Same piece moved to `(x, y)`.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Render color for this piece
    pub fn color(&self) -> (u8, u8, u8) {
        self.kind.color()
    }

    /// Shift the origin by `(dx, dy)` without validation
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn rotate_right(&mut self) {
        self.saved = self.geometry;
        self.geometry = self.saved.rotated_right();
    }

    pub fn rotate_left(&mut self) {
        self.saved = self.geometry;
        self.geometry = self.saved.rotated_left();
    }

    /// Restore the geometry saved by the last rotation.
    pub fn undo_rotate(&mut self) {
        self.geometry = self.saved;
    }

    /// Occupied cells translated to board coordinates
    pub fn cells(&self) -> BoardCells {
        self.geometry
            .occupied()
            .iter()
            .map(|&(row, col)| (self.y + row as i32, self.x + col as i32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_centers_by_box_width() {
        assert_eq!(Piece::new(PieceKind::I).x, 3);
        assert_eq!(Piece::new(PieceKind::O).x, 4);
        assert_eq!(Piece::new(PieceKind::T).x, 3);
    }

    #[test]
    fn spawn_row_depends_on_first_occupied_row() {
        for kind in PieceKind::ALL {
            // Every template has a cell in its top row.
            assert_eq!(Piece::new(kind).y, 0, "{:?}", kind);
        }

        let mut t = Piece::new(PieceKind::T);
        t.rotate_right();
        t.rotate_right();
        // Upside-down T has an empty top row; a fresh spawn never does.
        assert!(!t.geometry().get(0, 0) && !t.geometry().get(0, 1) && !t.geometry().get(0, 2));
    }

    #[test]
    fn undo_without_rotation_is_noop() {
        let mut p = Piece::new(PieceKind::L);
        let before = *p.geometry();
        p.undo_rotate();
        assert_eq!(*p.geometry(), before);
    }

    #[test]
    fn cells_follow_origin() {
        let p = Piece::new(PieceKind::O).at(4, 18);
        let cells = p.cells();
        assert_eq!(cells.as_slice(), &[(18, 4), (18, 5), (19, 4), (19, 5)]);
    }

    #[test]
    fn pieces_do_not_share_geometry() {
        let mut a = Piece::new(PieceKind::S);
        let b = Piece::new(PieceKind::S);
        a.rotate_right();
        assert_ne!(a.geometry(), b.geometry());
        assert_eq!(*b.geometry(), Geometry::template(PieceKind::S));
    }
}
