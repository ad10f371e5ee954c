//! Game module - gravity, movement, locking, line clears and respawn
//!
//! [`Game`] owns the grid, the active piece and the shape catalog. Every
//! operation is total: a move that does not fit is silently dropped, and a
//! gravity step that does not fit locks the piece, clears full rows and
//! spawns the next shape in one atomic step.
//!
//! There is no game-over state. Once the stack reaches the top, new pieces
//! keep spawning at the origin and lock immediately.

use log::debug;

use crate::grid::Grid;
use crate::piece::Piece;
use crate::shapes::ShapeCatalog;
use crate::snapshot::Snapshot;
use crate::types::Command;

/// What a gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece could not fall; it was locked and a new piece spawned
    Locked { lines_cleared: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    active: Piece,
    catalog: ShapeCatalog,
    pieces_locked: u32,
    lines_cleared: u32,
}

impl Game {
    /// Create a game on an empty grid and spawn the first piece
    pub fn new(seed: u64) -> Self {
        let mut catalog = ShapeCatalog::new(seed);
        let active = catalog.spawn();
        Self::assemble(Grid::new(), active, catalog)
    }

    /// Create a game from an existing grid and active piece
    ///
    /// Later spawns are drawn from a catalog seeded with `seed`.
    pub fn from_parts(grid: Grid, active: Piece, seed: u64) -> Self {
        Self::assemble(grid, active, ShapeCatalog::new(seed))
    }

    fn assemble(grid: Grid, active: Piece, catalog: ShapeCatalog) -> Self {
        Self {
            grid,
            active,
            catalog,
            pieces_locked: 0,
            lines_cleared: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    /// Pieces locked since the game was created
    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Rows removed since the game was created
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Whether every cell of `piece` is free on the current grid
    pub fn fits(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .iter()
            .all(|&(x, y)| self.grid.is_free(x, y))
    }

    /// Commit `candidate` as the active piece if it fits
    fn try_commit(&mut self, candidate: Piece) -> bool {
        if self.fits(&candidate) {
            self.active = candidate;
            true
        } else {
            false
        }
    }

    /// One gravity step
    pub fn tick(&mut self) -> TickOutcome {
        if self.try_commit(self.active.translated(0, 1)) {
            return TickOutcome::Fell;
        }

        let lines_cleared = self.lock_active();
        TickOutcome::Locked { lines_cleared }
    }

    /// Lock the active piece, clear full rows and spawn the next piece
    fn lock_active(&mut self) -> u32 {
        let locked = self.active;
        self.grid.place(locked.cells());
        let cleared = self.grid.clear_full_lines();

        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        self.lines_cleared = self.lines_cleared.wrapping_add(cleared);
        self.active = self.catalog.spawn();

        debug!(
            "locked {} at ({}, {}), cleared {}, next {}",
            locked.kind.as_str(),
            locked.x,
            locked.y,
            cleared,
            self.active.kind.as_str()
        );
        cleared
    }

    pub fn move_left(&mut self) -> bool {
        self.try_commit(self.active.translated(-1, 0))
    }

    pub fn move_right(&mut self) -> bool {
        self.try_commit(self.active.translated(1, 0))
    }

    /// Rotate the active piece if the whole rotated shape fits
    pub fn rotate(&mut self) -> bool {
        self.try_commit(self.active.rotated())
    }

    /// Manual gravity step, identical to [`Game::tick`]
    pub fn soft_drop(&mut self) -> TickOutcome {
        self.tick()
    }

    /// Apply one player command. Returns false if the command was rejected.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => {
                self.soft_drop();
                true
            }
            Command::Rotate => self.rotate(),
        }
    }

    /// Write the render-ready state into an existing snapshot
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.grid = self.grid.rows();
        out.kind = self.active.kind;
        out.active = self.active.cells();
        out.pieces_locked = self.pieces_locked;
        out.lines_cleared = self.lines_cleared;
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut s = Snapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::shape_offsets;
    use crate::types::ShapeKind;

    fn o_piece(x: i8, y: i8) -> Piece {
        Piece::at(ShapeKind::O, shape_offsets(ShapeKind::O), x, y)
    }

    #[test]
    fn tick_moves_piece_down_one_row() {
        let mut game = Game::from_parts(Grid::new(), o_piece(4, 0), 1);
        assert_eq!(game.tick(), TickOutcome::Fell);
        assert_eq!((game.active().x, game.active().y), (4, 1));
    }

    #[test]
    fn blocked_tick_locks_and_respawns() {
        let mut game = Game::from_parts(Grid::new(), o_piece(0, 18), 1);
        assert_eq!(game.tick(), TickOutcome::Locked { lines_cleared: 0 });

        for (x, y) in [(0, 18), (1, 18), (0, 19), (1, 19)] {
            assert_eq!(game.grid().get(x, y), Some(true));
        }
        assert_eq!(game.pieces_locked(), 1);
        assert_eq!((game.active().x, game.active().y), (4, 0));
    }

    #[test]
    fn rejected_moves_leave_state_unchanged() {
        let mut game = Game::from_parts(Grid::new(), o_piece(8, 5), 1);
        let before = game.active();
        assert!(!game.move_right());
        assert_eq!(game.active(), before);
    }

    #[test]
    fn apply_dispatches_commands() {
        let mut game = Game::from_parts(Grid::new(), o_piece(4, 5), 1);
        assert!(game.apply(Command::MoveLeft));
        assert_eq!(game.active().x, 3);
        assert!(game.apply(Command::MoveRight));
        assert_eq!(game.active().x, 4);
        assert!(game.apply(Command::SoftDrop));
        assert_eq!(game.active().y, 6);
        assert!(game.apply(Command::Rotate));
        assert_eq!(game.active().offsets, [(0, 0), (-1, 0), (0, 1), (-1, 1)]);
    }

    #[test]
    fn snapshot_reflects_grid_and_active_cells() {
        let mut grid = Grid::new();
        grid.set(0, 19, true);
        let game = Game::from_parts(grid, o_piece(4, 0), 1);
        let snap = game.snapshot();
        assert!(snap.grid[19][0]);
        assert_eq!(snap.kind, ShapeKind::O);
        assert_eq!(snap.active, [(4, 0), (4, 1), (5, 0), (5, 1)]);
    }
}
