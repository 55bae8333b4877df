//! Render-facing snapshot of a game: plain `Copy` data, no borrowing.

use tui_bowling_types::{FrameKind, FRAME_COUNT, FRAME_ROLLS_MAX, PIN_COUNT};

/// One frame box on the score sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSnapshot {
    /// Recorded rolls, in order. Unused slots stay `None`.
    pub rolls: [Option<u8>; FRAME_ROLLS_MAX],
    pub kind: FrameKind,
    /// Cumulative score through this frame, or `None` while any bonus the
    /// sheet depends on up to here is still pending (the box stays blank,
    /// like on a paper sheet).
    pub total: Option<u32>,
}

impl FrameSnapshot {
    pub fn roll_count(&self) -> usize {
        self.rolls.iter().filter(|r| r.is_some()).count()
    }
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self {
            rolls: [None; FRAME_ROLLS_MAX],
            kind: FrameKind::Open,
            total: None,
        }
    }
}

/// Complete sheet snapshot, reusable across frames via
/// [`Game::snapshot_into`](crate::Game::snapshot_into).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub frames: [FrameSnapshot; FRAME_COUNT],
    /// Number of frames with at least one roll recorded.
    pub frame_count: u8,
    /// Frame the next roll lands in, `None` once the game is over.
    pub active_frame: Option<u8>,
    pub score: u32,
    pub roll_count: u8,
    pub pins_standing: u8,
    pub complete: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.frames = [FrameSnapshot::default(); FRAME_COUNT];
        self.frame_count = 0;
        self.active_frame = Some(0);
        self.score = 0;
        self.roll_count = 0;
        self.pins_standing = PIN_COUNT;
        self.complete = false;
    }

    /// Whether the game still accepts rolls.
    pub fn accepting_rolls(&self) -> bool {
        !self.complete
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut snap = Self {
            frames: [FrameSnapshot::default(); FRAME_COUNT],
            frame_count: 0,
            active_frame: Some(0),
            score: 0,
            roll_count: 0,
            pins_standing: PIN_COUNT,
            complete: false,
        };
        snap.clear();
        snap
    }
}
