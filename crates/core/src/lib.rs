//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the complete ten-pin bowling scoring rules. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the score is a pure function of the roll log
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: embeddable in a terminal UI, a test DSL, or a REPL
//! - **Allocation-free**: the whole game fits in fixed-capacity storage
//!
//! # Module Structure
//!
//! - [`game`]: the [`Game`] value object - an append-only roll log with a
//!   cached derived score
//! - [`frames`]: frame resolution - deriving score-sheet frames, bonuses,
//!   and pin clamping bounds from a raw roll slice
//! - [`snapshot`]: plain-data [`GameSnapshot`] for rendering without
//!   borrowing the game
//!
//! # Scoring Rules
//!
//! Standard ten-pin bowling:
//!
//! - A game is ten frames; each frame is up to two rolls, except the tenth,
//!   which earns a third roll after a strike or spare.
//! - **Strike** (10 on the first roll): frame scores 10 plus the next two
//!   rolls.
//! - **Spare** (10 across both rolls): frame scores 10 plus the next roll.
//! - A bonus is counted only once every roll it depends on exists; until
//!   then the frame contributes just its own pins, so a mid-game score is
//!   always a valid partial score.
//!
//! Input is clamped, never rejected: out-of-range pin counts snap to the
//! `0..=10` range, and a second roll snaps to the pins still standing.
//! Callers that want rejection instead use [`Game::try_roll`].
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::Game;
//!
//! let mut game = Game::new();
//! game.roll(10); // strike
//! game.roll(2);
//! game.roll(3);
//!
//! // 10 + 2 + 3 for the strike frame, plus 2 + 3 again as frame two.
//! assert_eq!(game.score(), 20);
//! ```

pub mod frames;
pub mod game;
pub mod snapshot;

pub use tui_bowling_types as types;

// Re-export commonly used types for convenience
pub use frames::{resolve_frames, score_rolls, Frame, Frames};
pub use game::{Game, InvalidRoll};
pub use snapshot::{FrameSnapshot, GameSnapshot};
