//! ScoreView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It draws the classic paper score sheet: ten
//! frame boxes with `X`/`/`/`-` roll marks, cumulative totals that stay blank
//! while a bonus is pending, and a wider three-slot tenth frame.

use crate::core::{FrameSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{FRAME_COUNT, PIN_COUNT};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Interior width of a regular frame box.
const FRAME_INNER_W: u16 = 5;
/// Interior width of the tenth frame box (three roll slots).
const TENTH_INNER_W: u16 = 7;
/// Full sheet width: nine regular boxes, the tenth, and shared borders.
const SHEET_W: u16 = 9 * (FRAME_INNER_W + 1) + TENTH_INNER_W + 2;
/// Sheet height: border, frame number, marks, total, border.
const SHEET_H: u16 = 5;
/// Whole block: title, gap, sheet, gap, score line, status line.
const BLOCK_W: u16 = SHEET_W;
const BLOCK_H: u16 = SHEET_H + 5;

const TITLE: &str = "TUI BOWLING";

/// A lightweight terminal scoreboard renderer.
pub struct ScoreView {
    anchor_y: AnchorY,
}

impl Default for ScoreView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl ScoreView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let start_x = viewport.width.saturating_sub(BLOCK_W) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(BLOCK_H) / 2,
            AnchorY::Top => 0,
        };

        let title_style = CellStyle::default().with_bold();
        let title_x = start_x + (BLOCK_W.saturating_sub(TITLE.len() as u16)) / 2;
        fb.draw_text(title_x, start_y, TITLE, title_style);

        let sheet_y = start_y + 2;
        self.draw_sheet(fb, snap, start_x, sheet_y);
        self.draw_status(fb, snap, start_x, sheet_y + SHEET_H + 1);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_sheet(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, start_x: u16, y: u16) {
        let border = CellStyle {
            fg: Rgb::new(140, 140, 150),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let text = CellStyle::default();

        // Left border x of each box; one extra entry for the sheet's right edge.
        let mut xs = [0u16; FRAME_COUNT + 1];
        xs[0] = start_x;
        for f in 0..FRAME_COUNT {
            xs[f + 1] = xs[f] + 1 + inner_width(f);
        }

        // Horizontal borders.
        fb.set(xs[0], y, border.into_cell('┌'));
        fb.set(xs[0], y + SHEET_H - 1, border.into_cell('└'));
        for f in 0..FRAME_COUNT {
            fb.fill_rect(xs[f] + 1, y, inner_width(f), 1, '─', border);
            fb.fill_rect(xs[f] + 1, y + SHEET_H - 1, inner_width(f), 1, '─', border);
            let (tee_top, tee_bottom) = if f == FRAME_COUNT - 1 {
                ('┐', '┘')
            } else {
                ('┬', '┴')
            };
            fb.set(xs[f + 1], y, border.into_cell(tee_top));
            fb.set(xs[f + 1], y + SHEET_H - 1, border.into_cell(tee_bottom));
        }

        // Vertical borders.
        for row in 1..SHEET_H - 1 {
            for &x in &xs {
                fb.set(x, y + row, border.into_cell('│'));
            }
        }

        // Box contents.
        for f in 0..FRAME_COUNT {
            let inner_x = xs[f] + 1;
            let w = inner_width(f);
            let frame = &snap.frames[f];

            // Frame number, bold when it is where the next roll lands.
            let label_style = if snap.active_frame == Some(f as u8) {
                text.with_bold()
            } else {
                text
            };
            let label = (f + 1).to_string();
            let label_x = inner_x + (w.saturating_sub(label.len() as u16)) / 2;
            fb.draw_text(label_x, y + 1, &label, label_style);

            // Roll marks, one per slot.
            for (slot, mark) in roll_marks(frame, f == FRAME_COUNT - 1)
                .into_iter()
                .enumerate()
            {
                if let Some(mark) = mark {
                    fb.set(
                        inner_x + 1 + 2 * slot as u16,
                        y + 2,
                        text.into_cell(mark),
                    );
                }
            }

            // Cumulative total, right-aligned, blank while unresolved.
            if let Some(total) = frame.total {
                let total = total.to_string();
                let total_x = inner_x + w.saturating_sub(total.len() as u16 + 1);
                fb.draw_text(total_x, y + 3, &total, text);
            }
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, start_x: u16, y: u16) {
        let text = CellStyle::default();

        let score = format!("SCORE {}", snap.score);
        fb.draw_text(start_x, y, &score, text.with_bold());

        if snap.complete {
            fb.draw_text(
                start_x,
                y + 1,
                "GAME OVER   [r] new game  [q] quit",
                text,
            );
        } else {
            let status = format!(
                "PINS STANDING {}   [0-9] roll  [x] strike  [r] restart  [q] quit",
                snap.pins_standing
            );
            fb.draw_text(start_x, y + 1, &status, text.with_dim());
        }
    }
}

fn inner_width(frame: usize) -> u16 {
    if frame == FRAME_COUNT - 1 {
        TENTH_INNER_W
    } else {
        FRAME_INNER_W
    }
}

/// Score-sheet mark for one roll slot.
///
/// `prev` is the roll this one shares a rack with, when there is one; a pair
/// summing to ten marks the second roll as a spare.
fn roll_mark(pins: u8, prev: Option<u8>) -> char {
    match prev {
        Some(p) if p < PIN_COUNT && p + pins == PIN_COUNT => '/',
        _ if pins == PIN_COUNT => 'X',
        _ if pins == 0 => '-',
        _ => (b'0' + pins) as char,
    }
}

fn roll_marks(frame: &FrameSnapshot, is_tenth: bool) -> [Option<char>; 3] {
    let [r0, r1, r2] = frame.rolls;
    let mut marks = [None; 3];

    if let Some(r0) = r0 {
        marks[0] = Some(roll_mark(r0, None));

        if let Some(r1) = r1 {
            marks[1] = Some(roll_mark(r1, (r0 < PIN_COUNT).then_some(r0)));

            if is_tenth {
                if let Some(r2) = r2 {
                    // The fill ball pairs with the second roll only when the
                    // second roll started a fresh rack after a strike.
                    let prev = (r0 == PIN_COUNT && r1 < PIN_COUNT).then_some(r1);
                    marks[2] = Some(roll_mark(r2, prev));
                }
            }
        }
    }

    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_bowling_core::Game;

    #[test]
    fn marks_for_a_regular_open_frame() {
        let mut game = Game::new();
        game.roll(7);
        game.roll(2);
        let snap = game.snapshot();
        assert_eq!(roll_marks(&snap.frames[0], false), [Some('7'), Some('2'), None]);
    }

    #[test]
    fn marks_for_spares_strikes_and_gutters() {
        let mut game = Game::new();
        game.roll(0);
        game.roll(10);
        let snap = game.snapshot();
        assert_eq!(roll_marks(&snap.frames[0], false), [Some('-'), Some('/'), None]);

        let mut game = Game::new();
        game.roll(10);
        let snap = game.snapshot();
        assert_eq!(roll_marks(&snap.frames[0], false), [Some('X'), None, None]);
    }

    #[test]
    fn tenth_frame_marks_strike_then_spare() {
        let mut game = Game::new();
        for _ in 0..18 {
            game.roll(0);
        }
        game.roll(10);
        game.roll(6);
        game.roll(4);
        let snap = game.snapshot();
        assert_eq!(
            roll_marks(&snap.frames[9], true),
            [Some('X'), Some('6'), Some('/')]
        );
    }

    #[test]
    fn tenth_frame_marks_three_strikes() {
        let mut game = Game::new();
        for _ in 0..12 {
            game.roll(10);
        }
        let snap = game.snapshot();
        assert_eq!(
            roll_marks(&snap.frames[9], true),
            [Some('X'), Some('X'), Some('X')]
        );
    }
}
