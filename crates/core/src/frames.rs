//! Frame resolution - derives score-sheet frames from the raw roll log
//!
//! Everything in this module is a pure function over a `&[u8]` roll slice.
//! The roll log is the single source of truth; frames, bonuses, and the total
//! score are all recomputed from it, which keeps partial games correct for
//! free: a frame whose bonus rolls have not happened yet simply contributes
//! its known pins.

use arrayvec::ArrayVec;
use tui_bowling_types::{FrameKind, FRAME_COUNT, FRAME_ROLLS_MAX, PIN_COUNT};

/// Frames derived from a roll log (at most ten).
pub type Frames = ArrayVec<Frame, FRAME_COUNT>;

/// One resolved (or in-progress) frame on the score sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Rolls belonging to this frame: 1-2, or up to 3 in the tenth.
    pub rolls: ArrayVec<u8, FRAME_ROLLS_MAX>,
    /// Bonus pins earned from lookahead rolls (strikes and spares only).
    ///
    /// Zero until every roll the bonus depends on has been recorded.
    pub bonus: u32,
    /// Whether all rolls and bonus rolls for this frame exist in the log.
    pub resolved: bool,
}

impl Frame {
    /// Classify the frame from its own rolls.
    pub fn kind(&self) -> FrameKind {
        match self.rolls.as_slice() {
            [PIN_COUNT, ..] => FrameKind::Strike,
            [a, b, ..] if a + b == PIN_COUNT => FrameKind::Spare,
            _ => FrameKind::Open,
        }
    }

    /// Base pins knocked down by this frame's own rolls.
    pub fn pins(&self) -> u32 {
        self.rolls.iter().map(|&r| u32::from(r)).sum()
    }

    /// Base pins plus earned bonus.
    pub fn points(&self) -> u32 {
        self.pins() + self.bonus
    }
}

/// Scan the roll log from the start, ten frames deep.
///
/// A strike consumes one roll, any other frame consumes up to two, and the
/// tenth consumes up to three directly from the log (its "bonus" rolls are
/// real log entries, so no lookahead past the end is ever needed).
pub fn resolve_frames(rolls: &[u8]) -> Frames {
    let mut frames = Frames::new();
    let mut i = 0;

    for index in 0..FRAME_COUNT {
        if i >= rolls.len() {
            break;
        }
        if index == FRAME_COUNT - 1 {
            frames.push(resolve_tenth(&rolls[i..]));
            break;
        }

        let frame = if rolls[i] == PIN_COUNT {
            // Strike: one roll, bonus is the next two once both exist.
            let lookahead = &rolls[i + 1..];
            let resolved = lookahead.len() >= 2;
            let bonus = if resolved {
                u32::from(lookahead[0]) + u32::from(lookahead[1])
            } else {
                0
            };
            let mut taken = ArrayVec::new();
            taken.push(rolls[i]);
            i += 1;
            Frame {
                rolls: taken,
                bonus,
                resolved,
            }
        } else if i + 1 < rolls.len() {
            let (a, b) = (rolls[i], rolls[i + 1]);
            let mut taken = ArrayVec::new();
            taken.push(a);
            taken.push(b);
            i += 2;
            if a + b == PIN_COUNT {
                // Spare: bonus is the single next roll once it exists.
                let resolved = i < rolls.len();
                let bonus = if resolved { u32::from(rolls[i]) } else { 0 };
                Frame {
                    rolls: taken,
                    bonus,
                    resolved,
                }
            } else {
                Frame {
                    rolls: taken,
                    bonus: 0,
                    resolved: true,
                }
            }
        } else {
            // Lone first roll; the frame is still waiting for its second.
            let mut taken = ArrayVec::new();
            taken.push(rolls[i]);
            i += 1;
            Frame {
                rolls: taken,
                bonus: 0,
                resolved: false,
            }
        };

        frames.push(frame);
    }

    frames
}

fn resolve_tenth(rest: &[u8]) -> Frame {
    let take = rest.len().min(FRAME_ROLLS_MAX);
    let mut rolls: ArrayVec<u8, FRAME_ROLLS_MAX> = ArrayVec::new();
    rolls.extend(rest[..take].iter().copied());

    // A third roll is earned by a strike or a spare in the first two slots.
    let third_earned = matches!(rolls.first(), Some(&r) if r == PIN_COUNT)
        || (rolls.len() >= 2 && rolls[0] + rolls[1] == PIN_COUNT);
    let needed = if third_earned { 3 } else { 2 };

    Frame {
        rolls,
        bonus: 0,
        resolved: take >= needed,
    }
}

/// Total score of a roll log: per-frame pins plus earned bonuses.
pub fn score_rolls(rolls: &[u8]) -> u32 {
    resolve_frames(rolls).iter().map(Frame::points).sum()
}

/// Whether the log describes a finished ten-frame game.
pub fn is_complete(rolls: &[u8]) -> bool {
    let frames = resolve_frames(rolls);
    frames.len() == FRAME_COUNT && frames[FRAME_COUNT - 1].resolved
}

/// Pins standing for the next roll.
///
/// This is also the clamp bound used when recording: a roll can never knock
/// down more pins than the rack currently holds. Returns 0 once the game is
/// over.
pub fn pins_standing(rolls: &[u8]) -> u8 {
    let frames = resolve_frames(rolls);
    let Some(last) = frames.last() else {
        return PIN_COUNT;
    };

    if frames.len() < FRAME_COUNT {
        match last.rolls.as_slice() {
            // Mid-frame: the remainder of the rack.
            [r] if *r < PIN_COUNT => PIN_COUNT - r,
            // Frame closed (strike or two rolls): fresh rack.
            _ => PIN_COUNT,
        }
    } else {
        tenth_pins_standing(last)
    }
}

fn tenth_pins_standing(frame: &Frame) -> u8 {
    match frame.rolls.as_slice() {
        [] => PIN_COUNT,
        [r] if *r < PIN_COUNT => PIN_COUNT - r,
        // Strike on the first roll: the rack is reset.
        [_] => PIN_COUNT,
        [a, b] => {
            if *a == PIN_COUNT {
                if *b == PIN_COUNT {
                    PIN_COUNT
                } else {
                    PIN_COUNT - b
                }
            } else if a + b == PIN_COUNT {
                // Spare: fresh rack for the fill ball.
                PIN_COUNT
            } else {
                // Open tenth: no third roll, game over.
                0
            }
        }
        _ => 0,
    }
}

/// Index of the frame the next roll belongs to, or `None` once the game is
/// over. Frames that exist but are merely waiting on bonus lookahead do not
/// count as active; only the frame still taking its own rolls does.
pub fn active_frame(rolls: &[u8]) -> Option<usize> {
    if is_complete(rolls) {
        return None;
    }
    let frames = resolve_frames(rolls);
    match frames.last() {
        None => Some(0),
        Some(_) if frames.len() == FRAME_COUNT => Some(FRAME_COUNT - 1),
        Some(last) => match last.rolls.as_slice() {
            [r] if *r < PIN_COUNT => Some(frames.len() - 1),
            _ => Some(frames.len()),
        },
    }
}
