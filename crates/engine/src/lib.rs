//! Game shell: configuration, logging, timing and the session actor.
//!
//! The core engine is passive. This crate supplies what drives it:
//!
//! - [`Config`]: environment-based settings (tick interval, seed, logging)
//! - [`init_logging`]: log4rs file logger, off unless a path is configured
//! - [`TickClock`]: the fixed-interval gravity timer
//! - [`Session`]: serialises ticks and commands onto one [`core::Game`] and
//!   renders after each
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{Session, Stimulus};
//! use blockfall_engine::core::{Game, Snapshot};
//! use blockfall_engine::types::Command;
//!
//! let mut frames = 0;
//! let mut session = Session::new(Game::new(7), |_: &Snapshot| -> anyhow::Result<()> {
//!     frames += 1;
//!     Ok(())
//! });
//! session.dispatch(Stimulus::Command(Command::MoveLeft)).unwrap();
//! session.dispatch(Stimulus::Tick).unwrap();
//! drop(session);
//! assert_eq!(frames, 2);
//! ```

pub mod clock;
pub mod config;
pub mod logging;
pub mod session;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use clock::TickClock;
pub use config::Config;
pub use logging::init_logging;
pub use session::{Render, Session, Stimulus};
