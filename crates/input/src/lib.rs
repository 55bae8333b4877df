//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Bowling has
//! no held-key mechanics, so there is no repeat handling here; every press is
//! a single discrete action.

pub mod map;

pub use tui_bowling_types as types;

pub use map::{handle_key_event, should_quit};
