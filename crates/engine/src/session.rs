//! Session: the single owner of game state.
//!
//! Timer ticks and player commands both arrive as [`Stimulus`] values and are
//! applied one at a time on the calling thread, each followed by a render.
//! Nothing else holds a reference to the [`Game`], so no locking is involved.

use anyhow::Result;
use log::trace;

use crate::core::{Game, Snapshot, TickOutcome};
use crate::types::Command;

/// One external event for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stimulus {
    /// The periodic gravity tick
    Tick,
    /// A player command
    Command(Command),
}

/// Receives the render-ready state after every change.
pub trait Render {
    fn render(&mut self, snapshot: &Snapshot) -> Result<()>;
}

impl<F> Render for F
where
    F: FnMut(&Snapshot) -> Result<()>,
{
    fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
        self(snapshot)
    }
}

pub struct Session<R> {
    game: Game,
    renderer: R,
    snapshot: Snapshot,
}

impl<R: Render> Session<R> {
    pub fn new(game: Game, renderer: R) -> Self {
        let snapshot = game.snapshot();
        Self {
            game,
            renderer,
            snapshot,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Render the current state without changing it.
    pub fn render(&mut self) -> Result<()> {
        self.game.snapshot_into(&mut self.snapshot);
        self.renderer.render(&self.snapshot)
    }

    /// Apply one stimulus, then render.
    pub fn dispatch(&mut self, stimulus: Stimulus) -> Result<()> {
        match stimulus {
            Stimulus::Tick => {
                if let TickOutcome::Locked { lines_cleared } = self.game.tick() {
                    trace!("tick locked piece, {} line(s)", lines_cleared);
                }
            }
            Stimulus::Command(command) => {
                let applied = self.game.apply(command);
                trace!("{} applied={}", command.as_str(), applied);
            }
        }
        self.render()
    }
}
