//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the whole game-state engine. It has no dependency on
//! the terminal, input devices or timers; those live in the shell crates
//! and drive [`Game`] through its operations.
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 occupancy grid with collision checks and line clearing
//! - [`piece`]: the active piece (origin + four offsets), translation and rotation
//! - [`shapes`]: the seven canonical layouts and uniform random selection
//! - [`game`]: gravity, movement, locking, clearing and respawn
//! - [`snapshot`]: render-ready copy of the state
//!
//! # Rules
//!
//! - Gravity moves the piece one row per [`Game::tick`]; a blocked step locks it.
//! - Moves and rotations that do not fit are dropped, never corrected.
//! - Rotation is `(ox, oy) -> (-oy, ox)` about the local origin, no wall kicks.
//! - Full rows are removed bottom to top and the rows above shift down.
//! - There is no scoring and no game over.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Game, TickOutcome};
//! use blockfall_core::types::Command;
//!
//! let mut game = Game::new(12345);
//! game.apply(Command::MoveLeft);
//! game.apply(Command::Rotate);
//!
//! // A fresh piece always has room to fall at least once.
//! assert_eq!(game.tick(), TickOutcome::Fell);
//! ```

pub mod game;
pub mod grid;
pub mod piece;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

pub use game::{Game, TickOutcome};
pub use grid::Grid;
pub use piece::{rotate_offsets, Piece};
pub use shapes::{shape_offsets, ShapeCatalog};
pub use snapshot::Snapshot;
