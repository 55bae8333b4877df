//! Terminal bowling scoreboard (default binary).
//!
//! Draws the score sheet, waits for a key, applies the action, redraws.
//! Bowling has no clock, so the loop blocks on input instead of ticking.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_bowling::core::{Game, GameSnapshot};
use tui_bowling::input::{handle_key_event, should_quit};
use tui_bowling::term::{FrameBuffer, ScoreView, TerminalRenderer, Viewport};
use tui_bowling::types::GameAction;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new();
    let view = ScoreView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(GameAction::Roll(pins)) => game.roll(i32::from(pins)),
                    Some(GameAction::Restart) => game = Game::new(),
                    None => {}
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
