//! Shapes module - the seven canonical tetromino layouts and random selection
//!
//! Each layout is four offsets from the piece origin. Selection is uniform
//! over [`ShapeKind::ALL`] using a seeded PCG generator, so the same seed
//! always deals the same sequence of shapes.

use log::trace;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::piece::Piece;
use crate::types::{Offset, ShapeKind};

/// Canonical offsets for a shape kind
pub fn shape_offsets(kind: ShapeKind) -> [Offset; 4] {
    match kind {
        ShapeKind::I => [(0, 0), (1, 0), (2, 0), (3, 0)],
        ShapeKind::Z => [(0, 0), (1, 0), (1, 1), (2, 1)],
        ShapeKind::L => [(0, 0), (1, 0), (2, 0), (2, 1)],
        ShapeKind::T => [(0, 0), (1, 0), (2, 0), (1, 1)],
        ShapeKind::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
        ShapeKind::S => [(0, 1), (1, 1), (1, 0), (2, 0)],
        ShapeKind::J => [(0, 0), (0, 1), (0, 2), (1, 2)],
    }
}

/// Uniform random shape source
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    rng: Pcg32,
}

impl ShapeCatalog {
    /// Create a catalog with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Draw the next shape kind, uniformly among all seven
    pub fn next_kind(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.rng.random_range(0..ShapeKind::ALL.len())]
    }

    /// Draw a shape and return it as a new piece at the spawn origin
    pub fn spawn(&mut self) -> Piece {
        let kind = self.next_kind();
        trace!("spawning {}", kind.as_str());
        Piece::new(kind, shape_offsets(kind))
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::new(1)
    }
}
