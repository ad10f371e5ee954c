use crate::types::{Position, ShapeKind, GRID_HEIGHT, GRID_WIDTH};

/// Render-ready copy of the game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Snapshot {
    /// Occupancy, indexed `[y][x]`
    pub grid: [[bool; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub kind: ShapeKind,
    /// Absolute cells of the active piece; `y` may be negative
    pub active: [Position; 4],
    pub pieces_locked: u32,
    pub lines_cleared: u32,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            grid: [[false; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            kind: ShapeKind::O,
            active: [(0, 0); 4],
            pieces_locked: 0,
            lines_cleared: 0,
        }
    }
}
