//! Terminal scoreboard rendering module.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer and a crossterm-backed renderer flushes only what changed.
//! No widget/layout framework.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep all layout code pure so it can be unit-tested off-terminal
//! - Redraw only changed cell runs per frame

pub mod fb;
pub mod renderer;
pub mod score_view;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use score_view::{AnchorY, ScoreView, Viewport};
