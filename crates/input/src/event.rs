//! Classification of raw terminal events.

use crossterm::event::{Event, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::Command;

/// A terminal event the game loop cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Quit,
    /// The terminal was resized; the next frame must be a full redraw.
    Resize,
}

/// Turn a terminal event into game input.
///
/// Key presses and auto-repeats both produce commands, so holding a key
/// keeps moving the piece. Releases and unmapped keys yield `None`.
pub fn classify(event: &Event) -> Option<Input> {
    match event {
        Event::Key(key) => match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if should_quit(*key) {
                    Some(Input::Quit)
                } else {
                    handle_key_event(*key).map(Input::Command)
                }
            }
            KeyEventKind::Release => None,
        },
        Event::Resize(_, _) => Some(Input::Resize),
        _ => None,
    }
}
