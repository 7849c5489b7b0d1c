//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] plus the two
//! driver-level commands (new game, quit). Keys outside the map produce
//! nothing, so the core only ever sees recognized actions.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_new_game, should_quit};
