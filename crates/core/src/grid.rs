//! Grid module - the fixed-size occupancy matrix
//!
//! The grid is 10x20 and every cell is either empty or filled.
//! Storage is a flat row-major array, so it never allocates.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows with y < 0 sit above the visible grid and are always free.

use log::debug;

use crate::types::{Position, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// The playfield - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Row-major occupancy (y * WIDTH + x)
    cells: [bool; GRID_SIZE],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: [false; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Occupancy at (x, y), or `None` when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set occupancy at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, filled: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Whether a piece cell may occupy (x, y).
    ///
    /// True iff `0 <= x < W`, `y < H`, and either `y < 0` or the cell is empty.
    /// Only in-bounds coordinates are ever used to index storage.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= GRID_WIDTH as i8 || y >= GRID_HEIGHT as i8 {
            return false;
        }
        if y < 0 {
            return true;
        }
        !self.cells[(y as usize) * (GRID_WIDTH as usize) + (x as usize)]
    }

    /// Mark every in-bounds cell as filled; out-of-bounds cells are ignored.
    pub fn place(&mut self, cells: impl IntoIterator<Item = Position>) {
        for (x, y) in cells {
            self.set(x, y, true);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        self.cells[start..start + GRID_WIDTH as usize]
            .iter()
            .all(|&filled| filled)
    }

    /// Remove every full row, shifting the rows above down.
    ///
    /// Scans bottom to top. After a row is removed the same index is examined
    /// again, because the row that shifted into it may be full as well.
    /// Returns the number of rows removed.
    pub fn clear_full_lines(&mut self) -> u32 {
        let width = GRID_WIDTH as usize;
        let mut cleared = 0;
        let mut y = GRID_HEIGHT as usize;

        while y > 0 {
            let row = y - 1;
            if !self.is_row_full(row) {
                y -= 1;
                continue;
            }

            // Row r takes the contents of row r - 1, from the full row up to row 1.
            for r in (1..=row).rev() {
                let src = (r - 1) * width;
                self.cells.copy_within(src..src + width, r * width);
            }
            self.cells[..width].fill(false);
            cleared += 1;
        }

        if cleared > 0 {
            debug!("cleared {} full line(s)", cleared);
        }
        cleared
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of filled cells on the grid
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Copy of the occupancy as rows, for rendering
    pub fn rows(&self) -> [[bool; GRID_WIDTH as usize]; GRID_HEIGHT as usize] {
        let width = GRID_WIDTH as usize;
        let mut out = [[false; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * width..(y + 1) * width]);
        }
        out
    }

    /// Fill row `y` completely except for the listed columns.
    ///
    /// Fixture helper for tests and benchmarks; play never calls it.
    pub fn fill_row_except(&mut self, y: i8, holes: &[i8]) {
        for x in 0..GRID_WIDTH as i8 {
            self.set(x, y, !holes.contains(&x));
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
