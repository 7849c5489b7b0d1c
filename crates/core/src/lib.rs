//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the board simulation: piece geometry, rotation, collision
//! detection, locking and line clearing. It performs no I/O; a driver calls
//! in with discrete actions and reads back state to render.
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 occupancy grid, the active piece, validity checks, line clears
//! - [`geometry`]: piece templates and in-box quarter turns
//! - [`piece`]: the active piece with rotate/undo
//! - [`rng`]: seeded uniform shape generator
//! - [`scoring`]: linear per-line scoring and fall speed lookup
//! - [`game_session`]: phase state machine and gravity timer for drivers
//! - [`snapshot`]: plain-data copies of state for renderers
//!
//! # Rules
//!
//! - Pieces spawn centered, with their first occupied row on row 0
//! - Moves and rotations that leave the grid or overlap locked cells are reverted
//! - A blocked soft drop locks the piece; full rows are cleared bottom to top
//! - The game is over when a lock leaves anything in the top row
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_types::{GameAction, GamePhase};
//!
//! let mut game = GameSession::new(12345);
//! game.new_game();
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateRight);
//!
//! // Drop until the piece locks.
//! let event = loop {
//!     if let Some(event) = game.apply_action(GameAction::SoftDrop) {
//!         break event;
//!     }
//! };
//! assert_eq!(event.rows_cleared, 0);
//! assert_eq!(game.phase(), GamePhase::Playing);
//! ```

pub mod board;
pub mod game_session;
pub mod geometry;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::{Board, Grid};
pub use game_session::{GameSession, LockEvent};
pub use geometry::Geometry;
pub use piece::Piece;
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{fall_interval_for_lines, line_clear_score, ScoreBoard, ScoringPolicy};
pub use snapshot::{ActiveSnapshot, BoardSnapshot, GameSnapshot};
