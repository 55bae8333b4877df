//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, UI rendering, test DSLs).
//!
//! # Game Shape Constants
//!
//! Standard ten-pin bowling dimensions:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PIN_COUNT` | 10 | Pins standing on a fresh rack |
//! | `FRAME_COUNT` | 10 | Frames per game |
//! | `FRAME_ROLLS_MAX` | 3 | Roll slots in the tenth frame |
//! | `MAX_ROLLS` | 21 | Longest possible roll log (9×2 + 3) |
//! | `PERFECT_ROLLS` | 12 | Rolls in a twelve-strike game |
//! | `PERFECT_SCORE` | 300 | Score of a twelve-strike game |
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::{FrameKind, GameAction, PIN_COUNT, FRAME_COUNT};
//!
//! // Frame classification
//! let kind = FrameKind::Strike;
//! assert_eq!(kind.as_str(), "strike");
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(FrameKind::from_str("SPARE"), Some(FrameKind::Spare));
//!
//! // Game shape
//! assert_eq!(PIN_COUNT, 10);
//! assert_eq!(FRAME_COUNT, 10);
//!
//! // Input actions carry the pin count directly
//! let action = GameAction::Roll(7);
//! assert_eq!(action, GameAction::Roll(7));
//! ```

/// Pins standing on a freshly racked lane (10)
pub const PIN_COUNT: u8 = 10;

/// Frames per game (10)
pub const FRAME_COUNT: usize = 10;

/// Maximum roll slots in a single frame (3, tenth frame only)
pub const FRAME_ROLLS_MAX: usize = 3;

/// Longest possible roll log: nine two-roll frames plus a three-roll tenth
pub const MAX_ROLLS: usize = 21;

/// Number of rolls in a perfect game (twelve consecutive strikes)
pub const PERFECT_ROLLS: usize = 12;

/// Score of a perfect game
pub const PERFECT_SCORE: u32 = 300;

/// Classification of a frame on the score sheet
///
/// - **Strike**: all 10 pins on the first roll
/// - **Spare**: all 10 pins using both rolls
/// - **Open**: anything else, including frames still in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Strike,
    Spare,
    Open,
}

impl FrameKind {
    /// Parse frame kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::FrameKind;
    ///
    /// assert_eq!(FrameKind::from_str("strike"), Some(FrameKind::Strike));
    /// assert_eq!(FrameKind::from_str("Spare"), Some(FrameKind::Spare));
    /// assert_eq!(FrameKind::from_str("open"), Some(FrameKind::Open));
    /// assert_eq!(FrameKind::from_str("gutter"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strike" => Some(FrameKind::Strike),
            "spare" => Some(FrameKind::Spare),
            "open" => Some(FrameKind::Open),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameKind::Strike => "strike",
            FrameKind::Spare => "spare",
            FrameKind::Open => "open",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Produced by the input layer and consumed by the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Record a roll knocking down the given number of pins (0-10)
    Roll(u8),
    /// Start a fresh game (at any time, including mid-game)
    Restart,
}
