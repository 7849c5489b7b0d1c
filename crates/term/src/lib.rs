//! Terminal game renderer.
//!
//! A small framebuffer-based rendering layer for terminal play, with no
//! widget toolkit in between:
//!
//! - [`GameView`] turns a core snapshot into a [`FrameBuffer`] (pure, testable)
//! - [`TerminalRenderer`] flushes framebuffers to stdout via crossterm, diffing
//!   against the previous frame
//!
//! Board cells are drawn two characters wide to compensate for glyph aspect.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
