//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActiveSnapshot, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, BOARD_COLS, BOARD_ROWS, LOCKED_CELL_COLOR};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Minimum side panel width worth drawing
const MIN_PANEL_W: u16 = 12;

const CONTROLS: [&str; 5] = [
    "A/D  move",
    "S    down",
    "Q/E  rotate",
    "N    new game",
    "Esc  quit",
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Position and size of the bordered board inside the viewport
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Writes side panel lines top to bottom
struct PanelCursor {
    x: u16,
    y: u16,
}

impl PanelCursor {
    fn line(&mut self, fb: &mut FrameBuffer, text: &str, style: CellStyle, gap: u16) {
        fb.put_str(self.x, self.y, text, style);
        self.y = self.y.saturating_add(1 + gap);
    }

    fn number(&mut self, fb: &mut FrameBuffer, value: u32, style: CellStyle, gap: u16) {
        fb.put_u32(self.x, self.y, value, style);
        self.y = self.y.saturating_add(1 + gap);
    }
}

/// A lightweight terminal renderer for the board and side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up typical terminal glyphs.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered board in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_COLS as u16 * self.cell_w + 2,
            BOARD_ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (w, h) = self.frame_size();
        let panel_room = w + 2 + MIN_PANEL_W;
        // Center the board alone, or board plus panel when the panel fits.
        let block_w = if viewport.width >= panel_room { panel_room } else { w };
        let frame = Frame {
            x: viewport.width.saturating_sub(block_w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            w - 2,
            h - 2,
            ' ',
            CellStyle::plain(PLAY_BG, PLAY_BG),
        );
        self.draw_border(fb, frame);

        let locked = CellStyle::plain(LOCKED_CELL_COLOR.into(), PLAY_BG);
        let empty = CellStyle::plain(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for (row, cells) in snap.board.grid.iter().enumerate() {
            for (col, &occupied) in cells.iter().enumerate() {
                let (ch, style) = if occupied { ('█', locked) } else { ('·', empty) };
                self.fill_cell(fb, frame, row as u16, col as u16, ch, style);
            }
        }

        if let Some(active) = &snap.board.active {
            self.draw_active(fb, frame, active);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.phase == GamePhase::GameOver {
            self.draw_game_over(fb, frame, snap.score);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_active(&self, fb: &mut FrameBuffer, frame: Frame, active: &ActiveSnapshot) {
        let style = CellStyle::plain(active.kind.color().into(), PLAY_BG).bold();
        for (row, col) in active.cells() {
            // Cells above the grid are not drawn.
            if (0..BOARD_ROWS as i32).contains(&row) && (0..BOARD_COLS as i32).contains(&col) {
                self.fill_cell(fb, frame, row as u16, col as u16, '█', style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let style = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        let Frame { x, y, w, h } = frame;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + col * self.cell_w;
        let py = frame.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if viewport.width.saturating_sub(panel_x) < MIN_PANEL_W {
            return;
        }

        let title = CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        let help = value.dim();

        let mut panel = PanelCursor { x: panel_x, y: frame.y };
        panel.line(fb, "BLOCKFALL", title, 1);
        panel.line(fb, snap.phase.status_text(), value, 1);

        panel.line(fb, "SCORE", label, 0);
        panel.number(fb, snap.score, value, 1);
        panel.line(fb, "LINES", label, 0);
        panel.number(fb, snap.lines, value, 1);
        panel.line(fb, "FALL (ms)", label, 0);
        panel.number(fb, snap.fall_interval_ms, value, 1);

        if let Some(active) = &snap.board.active {
            panel.line(fb, "PIECE", label, 0);
            panel.line(fb, active.kind.letter(), value, 1);
        }

        panel.line(fb, "CONTROLS", label, 0);
        for text in CONTROLS {
            panel.line(fb, text, help, 0);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, frame: Frame, score: u32) {
        const TITLE: &str = "GAME OVER";
        const SCORE_LABEL: &str = "Final Score: ";

        let style = CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let centered = |w: u16| frame.x.saturating_add(frame.w.saturating_sub(w) / 2);

        fb.put_str(centered(TITLE.len() as u16), mid_y, TITLE, style);

        let digits = score.checked_ilog10().unwrap_or(0) as u16 + 1;
        let label_w = SCORE_LABEL.len() as u16;
        let (x, y) = (centered(label_w + digits), mid_y.saturating_add(1));
        fb.put_str(x, y, SCORE_LABEL, style);
        fb.put_u32(x.saturating_add(label_w), y, score, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_scales_with_cell_size() {
        assert_eq!(GameView::default().frame_size(), (22, 22));
        assert_eq!(GameView::new(1, 1).frame_size(), (12, 22));
        assert_eq!(GameView::new(0, 0).frame_size(), (12, 22));
    }

    #[test]
    fn game_over_shows_centered_final_score() {
        let mut snap = GameSnapshot::default();
        snap.phase = GamePhase::GameOver;
        snap.score = 230;
        let fb = GameView::default().render(&snap, Viewport::new(22, 22));

        // "Final Score: 230" is 16 wide, centered in the 22 wide frame.
        assert!(fb.row_text(11).contains("GAME OVER"));
        let score_line: String = fb.row_text(12).chars().skip(3).take(16).collect();
        assert_eq!(score_line, "Final Score: 230");
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
