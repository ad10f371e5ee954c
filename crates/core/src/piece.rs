//! Piece module - the active falling shape
//!
//! A piece is an origin plus four cell offsets. Rotation turns the offsets
//! 90° about the local origin `(0, 0)`, not about the geometric center, and
//! there is no wall kick: the engine simply refuses a rotation that does not fit.

use crate::types::{Offset, Position, ShapeKind, SPAWN_ORIGIN};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub x: i8,
    pub y: i8,
    pub offsets: [Offset; 4],
}

impl Piece {
    /// Create a piece of `kind` at the spawn origin
    pub fn new(kind: ShapeKind, offsets: [Offset; 4]) -> Self {
        Self::at(kind, offsets, SPAWN_ORIGIN.0, SPAWN_ORIGIN.1)
    }

    /// Create a piece at an explicit origin
    pub fn at(kind: ShapeKind, offsets: [Offset; 4], x: i8, y: i8) -> Self {
        Self {
            kind,
            x,
            y,
            offsets,
        }
    }

    /// Move the origin by (dx, dy). Validity is the caller's concern.
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Copy of this piece moved by (dx, dy)
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        let mut next = *self;
        next.translate(dx, dy);
        next
    }

    /// Rotate every offset `(ox, oy) -> (-oy, ox)` in place
    pub fn rotate(&mut self) {
        self.offsets = rotate_offsets(self.offsets);
    }

    /// Copy of this piece with rotated offsets; the original is untouched
    pub fn rotated(&self) -> Self {
        Self {
            offsets: rotate_offsets(self.offsets),
            ..*self
        }
    }

    /// Absolute positions of the four cells (origin + each offset)
    pub fn cells(&self) -> [Position; 4] {
        self.offsets.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// 90° rotation of an offset set about (0, 0)
pub fn rotate_offsets(offsets: [Offset; 4]) -> [Offset; 4] {
    offsets.map(|(ox, oy)| (-oy, ox))
}
