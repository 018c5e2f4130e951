//! Piece supply menu (default binary).
//!
//! Draws the queue, the reserve and the menu with the framebuffer renderer,
//! and applies one supply action per key press.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_supply::core::{PieceSupply, SupplySnapshot};
use tetris_supply::input::{handle_key_event, should_quit};
use tetris_supply::term::{FrameBuffer, SupplyView, TerminalRenderer, Viewport};
use tetris_supply::{ActionJournal, Session, SupplyConfig};

fn main() -> Result<()> {
    let config = SupplyConfig::from_env();
    let journal = match config.log_path.as_deref() {
        Some(path) => ActionJournal::open(path)?,
        None => ActionJournal::disabled(),
    };
    let mut session = Session::new(PieceSupply::new(config.seed), journal);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(e) = session.take_journal_error() {
        eprintln!("[Journal] disabled after error: {:#}", e);
    }
    // Lets a session be replayed with TETRIS_SUPPLY_SEED.
    eprintln!("[Supply] seed {}", config.seed);
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = SupplyView::new();
    let mut snap = SupplySnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, session.status().as_ref(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(action) => {
                        // Failures are shown on the status line.
                        let _ = session.apply(action);
                    }
                    None => session.reject_key(),
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
