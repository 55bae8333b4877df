//! Game state module - the append-only roll log and its derived score
//!
//! A [`Game`] is a pure in-memory value object: one mutator (recording a
//! roll) and queries derived from the log. No I/O, no timers, no hidden
//! cross-frame state.

use arrayvec::ArrayVec;
use thiserror::Error;

use tui_bowling_types::{MAX_ROLLS, PIN_COUNT};

use crate::frames::{self, Frames};
use crate::snapshot::GameSnapshot;

/// A pin count outside `0..=10`, rejected by [`Game::try_roll`].
///
/// The default contract is clamping, not rejection; this exists for callers
/// that prefer to treat an out-of-range roll as a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid roll: {pins} is outside the 0..=10 pin range")]
pub struct InvalidRoll {
    pub pins: i32,
}

/// Complete game state: the roll log plus a cached score.
///
/// The log is append-only and holds at most 21 entries (nine two-roll frames
/// plus a three-roll tenth), so the whole game lives inline with no heap
/// allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    rolls: ArrayVec<u8, MAX_ROLLS>,
    score: u32,
}

impl Game {
    /// Create a fresh game with no rolls recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a roll, clamping rather than failing.
    ///
    /// Values above 10 clamp to 10, values below 0 clamp to 0, and a roll
    /// that would exceed the pins still standing in the current frame clamps
    /// to the remainder. Rolls arriving after the tenth frame has fully
    /// resolved are ignored.
    pub fn roll(&mut self, pins: i32) {
        if self.is_complete() {
            return;
        }
        let capped = pins.clamp(0, i32::from(PIN_COUNT)) as u8;
        let pins = capped.min(self.pins_standing());
        self.rolls.push(pins);
        self.score = frames::score_rolls(&self.rolls);
    }

    /// Strict variant of [`roll`](Self::roll): rejects a pin count outside
    /// `0..=10` instead of clamping. The frame-remainder clamp still applies
    /// to accepted values.
    pub fn try_roll(&mut self, pins: i32) -> Result<(), InvalidRoll> {
        if !(0..=i32::from(PIN_COUNT)).contains(&pins) {
            return Err(InvalidRoll { pins });
        }
        self.roll(pins);
        Ok(())
    }

    /// Current score: per-frame pins plus earned strike/spare bonuses.
    ///
    /// Recomputed from the full roll log on every append, so it is always a
    /// partial (monotonically non-decreasing) score while the game is in
    /// progress, and 0 for a fresh game.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The raw roll log, in the order rolls occurred.
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Score-sheet frames derived from the roll log.
    pub fn frames(&self) -> Frames {
        frames::resolve_frames(&self.rolls)
    }

    /// Whether all ten frames (including any earned tenth-frame rolls) exist.
    pub fn is_complete(&self) -> bool {
        frames::is_complete(&self.rolls)
    }

    /// Pins standing for the next roll (0 once the game is over).
    pub fn pins_standing(&self) -> u8 {
        frames::pins_standing(&self.rolls)
    }

    /// Write the render-facing snapshot into an existing buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        use crate::snapshot::FrameSnapshot;

        out.clear();

        let frames = self.frames();
        let mut cumulative = 0u32;
        let mut all_resolved = true;

        for (i, frame) in frames.iter().enumerate() {
            let slot: &mut FrameSnapshot = &mut out.frames[i];
            for (j, &roll) in frame.rolls.iter().enumerate() {
                slot.rolls[j] = Some(roll);
            }
            slot.kind = frame.kind();

            // Resolved frames form a prefix of the sheet: a frame can only
            // be waiting on rolls that belong to later frames.
            cumulative += frame.points();
            all_resolved &= frame.resolved;
            slot.total = all_resolved.then_some(cumulative);
        }

        out.frame_count = frames.len() as u8;
        out.active_frame = frames::active_frame(&self.rolls).map(|i| i as u8);
        out.score = self.score;
        out.roll_count = self.rolls.len() as u8;
        out.pins_standing = self.pins_standing();
        out.complete = self.is_complete();
    }

    /// Convenience helper that allocates a fresh snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_bowling_types::FrameKind;

    fn roll_many(game: &mut Game, pins: i32, times: usize) {
        for _ in 0..times {
            game.roll(pins);
        }
    }

    #[test]
    fn fresh_game_scores_zero() {
        let game = Game::new();
        assert_eq!(game.score(), 0);
        assert!(game.rolls().is_empty());
        assert!(!game.is_complete());
    }

    #[test]
    fn single_roll_scores_its_pins() {
        let mut game = Game::new();
        game.roll(1);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn two_rolls_accumulate() {
        let mut game = Game::new();
        game.roll(1);
        game.roll(1);
        assert_eq!(game.score(), 2);
    }

    #[test]
    fn second_roll_clamps_to_frame_remainder() {
        let mut game = Game::new();
        game.roll(9);
        game.roll(9);
        assert_eq!(game.score(), 10);
        assert_eq!(game.rolls(), &[9, 1]);
    }

    #[test]
    fn out_of_range_rolls_clamp_to_the_pin_range() {
        let mut game = Game::new();
        game.roll(99);
        assert_eq!(game.rolls(), &[10]);

        let mut game = Game::new();
        game.roll(-3);
        assert_eq!(game.rolls(), &[0]);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn try_roll_rejects_out_of_range_pins() {
        let mut game = Game::new();
        assert_eq!(game.try_roll(11), Err(InvalidRoll { pins: 11 }));
        assert_eq!(game.try_roll(-1), Err(InvalidRoll { pins: -1 }));
        assert!(game.rolls().is_empty());

        assert_eq!(game.try_roll(10), Ok(()));
        assert_eq!(game.score(), 10);
    }

    #[test]
    fn spare_doubles_the_next_roll() {
        let mut game = Game::new();
        game.roll(2);
        game.roll(8);
        game.roll(2);
        assert_eq!(game.score(), 14);

        let mut game = Game::new();
        game.roll(5);
        game.roll(5);
        game.roll(2);
        assert_eq!(game.score(), 14);
    }

    #[test]
    fn strike_doubles_the_next_two_rolls() {
        let mut game = Game::new();
        game.roll(10);
        game.roll(2);
        game.roll(3);
        // 10 + 2 + 3 for the strike frame, plus 2 + 3 again as frame two.
        assert_eq!(game.score(), 10 + 2 * 2 + 2 * 3);
        assert_eq!(game.score(), 20);
    }

    #[test]
    fn perfect_game_scores_300() {
        let mut game = Game::new();
        roll_many(&mut game, 10, 12);
        assert_eq!(game.score(), 300);
        assert!(game.is_complete());
    }

    #[test]
    fn gutter_game_scores_zero() {
        let mut game = Game::new();
        roll_many(&mut game, 0, 20);
        assert_eq!(game.score(), 0);
        assert!(game.is_complete());
    }

    #[test]
    fn all_open_nines_score_90() {
        let mut game = Game::new();
        for _ in 0..10 {
            game.roll(9);
            game.roll(0);
        }
        assert_eq!(game.score(), 90);
        assert!(game.is_complete());
    }

    #[test]
    fn score_never_decreases_as_rolls_are_recorded() {
        let inputs = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];
        let mut game = Game::new();
        let mut last = 0;
        for &pins in &inputs {
            game.roll(pins);
            let score = game.score();
            assert!(score >= last, "score dropped from {last} to {score}");
            last = score;
        }
        // The classic mixed game from the kata literature.
        assert_eq!(game.score(), 167);
        assert!(game.is_complete());
    }

    #[test]
    fn querying_the_score_is_idempotent() {
        let mut game = Game::new();
        game.roll(10);
        game.roll(4);
        let first = game.score();
        assert_eq!(game.score(), first);
        assert_eq!(game.score(), first);
    }

    #[test]
    fn rolls_after_the_game_ends_are_ignored() {
        let mut game = Game::new();
        roll_many(&mut game, 10, 12);
        let final_rolls = game.rolls().len();

        game.roll(10);
        game.roll(5);
        assert_eq!(game.rolls().len(), final_rolls);
        assert_eq!(game.score(), 300);
    }

    #[test]
    fn snapshot_mirrors_the_sheet() {
        let mut game = Game::new();
        game.roll(10);
        game.roll(7);
        game.roll(3);
        game.roll(4);

        let snap = game.snapshot();
        assert_eq!(snap.frame_count, 3);
        assert_eq!(snap.score, game.score());
        assert_eq!(snap.active_frame, Some(2));
        assert_eq!(snap.pins_standing, 6);
        assert!(!snap.complete);

        assert_eq!(snap.frames[0].kind, FrameKind::Strike);
        assert_eq!(snap.frames[0].total, Some(20));
        assert_eq!(snap.frames[1].kind, FrameKind::Spare);
        assert_eq!(snap.frames[1].total, Some(34));
        // Frame three is still in progress: no cumulative total yet.
        assert_eq!(snap.frames[2].rolls, [Some(4), None, None]);
        assert_eq!(snap.frames[2].total, None);
    }
}
