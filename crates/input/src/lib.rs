//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. Every key-down
//! (including terminal auto-repeat) triggers exactly one command; there is no
//! DAS/ARR timing layer.

pub mod event;
pub mod map;

pub use blockfall_types as types;

pub use event::{classify, Input};
pub use map::{handle_key_event, should_quit};
