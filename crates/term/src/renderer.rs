//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The renderer owns terminal lifecycle (raw mode, alternate screen) and
//! redraws only the cell runs that changed since the previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame; the
    /// renderer diffs it against the previous frame and then swaps buffers so
    /// no frame ever clones cell storage.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();

        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = FrameBuffer::new(fb.width(), fb.height());
                std::mem::swap(&mut prev, fb);
                // `fb` is now a blank same-size buffer for the caller to
                // redraw into; `prev` holds what is on screen.
                self.last = Some(prev);
            }
        }

        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the changed cell runs between `prev` and `next` into `out`.
///
/// Both buffers must have the same dimensions.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style: Option<CellStyle> = None;

    for y in 0..next.height() {
        let mut x = 0;
        while x < next.width() {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            // Start of a changed run; emit cells until the buffers agree again.
            out.queue(cursor::MoveTo(x, y))?;
            while x < next.width() && prev.get(x, y) != next.get(x, y) {
                let cell = next.get(x, y).unwrap_or_default();
                if style != Some(cell.style) {
                    apply_style_into(out, cell.style)?;
                    style = Some(cell.style);
                }
                out.queue(Print(cell.ch))?;
                x += 1;
            }
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::CellStyle;

    #[test]
    fn identical_buffers_encode_no_cell_output() {
        let a = FrameBuffer::new(8, 2);
        let b = FrameBuffer::new(8, 2);

        let mut diff = Vec::new();
        encode_diff_into(&a, &b, &mut diff).unwrap();

        let mut full = Vec::new();
        encode_full_into(&b, &mut full).unwrap();

        // The diff carries only the trailing reset, far less than a redraw.
        assert!(diff.len() < full.len());
    }

    #[test]
    fn changed_cells_appear_in_the_diff() {
        let a = FrameBuffer::new(8, 2);
        let mut b = FrameBuffer::new(8, 2);
        b.set(3, 1, CellStyle::default().into_cell('Z'));

        let mut diff = Vec::new();
        encode_diff_into(&a, &b, &mut diff).unwrap();
        let encoded = String::from_utf8_lossy(&diff);
        assert!(encoded.contains('Z'));
    }

    #[test]
    fn full_encode_emits_every_cell() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.set(0, 0, CellStyle::default().into_cell('A'));
        fb.set(1, 0, CellStyle::default().into_cell('B'));
        fb.set(2, 0, CellStyle::default().into_cell('C'));

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let encoded = String::from_utf8_lossy(&out);
        assert!(encoded.contains("ABC"));
    }
}
