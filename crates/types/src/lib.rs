//! Shared types module - constants, shape kinds and player commands
//!
//! Everything here is plain data with no dependencies, so the core engine,
//! the terminal renderer and the input mapping can all agree on it.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn origin**: (4, 0) for every shape
//!
//! Rows with `y < 0` are above the visible grid. They are always free, so a
//! piece may hang partly above the top edge.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 500 | Gravity interval: one row per tick |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, ShapeKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(ShapeKind::ALL[3], ShapeKind::T);
//! assert_eq!(Command::SoftDrop.as_str(), "softDrop");
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Default gravity interval in milliseconds
pub const DEFAULT_TICK_MS: u32 = 500;

/// Origin given to every freshly spawned piece: top-center column, row 0
pub const SPAWN_ORIGIN: (i8, i8) = (4, 0);

/// Offset of a single cell relative to a piece origin, as `(dx, dy)`
pub type Offset = (i8, i8);

/// Absolute grid position, as `(x, y)`. `y` may be negative above the grid.
pub type Position = (i8, i8);


/// The seven tetromino shapes
///
/// The variant order matches the catalog index used for random selection,
/// so `ShapeKind::ALL[i]` is the shape drawn for index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    Z,
    L,
    T,
    O,
    S,
    J,
}

impl ShapeKind {
    /// Every shape, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::Z,
        ShapeKind::L,
        ShapeKind::T,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::J,
    ];

    /// Uppercase letter for display
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::Z => "Z",
            ShapeKind::L => "L",
            ShapeKind::T => "T",
            ShapeKind::O => "O",
            ShapeKind::S => "S",
            ShapeKind::J => "J",
        }
    }
}

/// Discrete player commands
///
/// Each command triggers exactly one engine operation, after which the
/// caller re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Apply one gravity step immediately (may lock the piece)
    SoftDrop,
    /// Rotate the piece 90° about its local origin
    Rotate,
}

impl Command {
    /// camelCase name, used in logs and by `key-probe`
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
        }
    }
}
