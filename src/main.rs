//! Terminal falling-block game (default binary).
//!
//! One thread owns the game. The loop waits for a key event until the next
//! gravity tick is due, so keys and ticks are applied strictly one at a time.

use std::time::Instant;

use anyhow::Result;
use crossterm::event;
use log::{error, info};

use blockfall::core::{Game, Snapshot};
use blockfall::engine::{init_logging, Config, Render, Session, Stimulus, TickClock};
use blockfall::input::{classify, Input};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Paints snapshots onto the real terminal.
struct Screen<'a> {
    term: &'a mut TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl<'a> Screen<'a> {
    fn new(term: &'a mut TerminalRenderer) -> Self {
        Self {
            term,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }
}

impl Render for Screen<'_> {
    fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(snapshot, Viewport::new(w, h), &mut self.fb);
        self.term.draw(&self.fb)
    }
}

fn main() -> Result<()> {
    let config = Config::from_env();
    let _log_handle = init_logging(&config)?;
    info!(
        "starting: tick {}ms, seed {}",
        config.tick_ms, config.seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let restored = term.exit();
    if let Err(err) = &result {
        error!("game loop failed: {err:#}");
    }
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut session = Session::new(Game::new(config.seed), Screen::new(term));
    session.render()?;

    let mut clock = TickClock::new(config.tick_interval(), Instant::now());

    loop {
        if event::poll(clock.timeout(Instant::now()))? {
            match classify(&event::read()?) {
                Some(Input::Command(command)) => {
                    session.dispatch(Stimulus::Command(command))?;
                }
                Some(Input::Resize) => {
                    session.renderer_mut().term.invalidate();
                    session.render()?;
                }
                Some(Input::Quit) => break,
                None => {}
            }
        }

        if clock.poll(Instant::now()) {
            session.dispatch(Stimulus::Tick)?;
        }
    }

    let game = session.game();
    info!(
        "quit after {} pieces, {} lines",
        game.pieces_locked(),
        game.lines_cleared()
    );
    Ok(())
}
