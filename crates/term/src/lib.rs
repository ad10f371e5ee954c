//! Terminal rendering for the game.
//!
//! Rendering is split in two: [`GameView`] paints a snapshot into a
//! [`FrameBuffer`] without touching the terminal, and [`TerminalRenderer`]
//! flushes framebuffers to stdout through crossterm.
//!
//! Locked cells and the falling piece use different colors; cell geometry
//! (two columns per grid cell) is purely presentational.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Palette, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
