//! Property tests for the grid and engine invariants.
//!
//! - `is_free` is total for any coordinates and matches the bounds rule.
//! - Placing cells changes nothing outside those cells.
//! - A second `clear_full_lines` removes nothing and changes nothing.
//! - Four rotations restore every offset exactly.
//! - Rejected commands leave the game untouched.

use proptest::prelude::*;

use blockfall::core::{shape_offsets, Game, Grid, Piece};
use blockfall::types::{Command, ShapeKind, GRID_HEIGHT, GRID_WIDTH};

const W: i8 = GRID_WIDTH as i8;
const H: i8 = GRID_HEIGHT as i8;

fn grid_from(bits: &[bool]) -> Grid {
    let mut grid = Grid::new();
    for (i, &filled) in bits.iter().enumerate() {
        let x = (i % GRID_WIDTH as usize) as i8;
        let y = (i / GRID_WIDTH as usize) as i8;
        grid.set(x, y, filled);
    }
    grid
}

fn any_grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec(any::<bool>(), GRID_WIDTH as usize * GRID_HEIGHT as usize)
        .prop_map(|bits| grid_from(&bits))
}

/// Grids whose bottom rows are often full, to exercise clearing.
fn stacked_grid() -> impl Strategy<Value = Grid> {
    (any_grid(), prop::collection::vec(any::<bool>(), GRID_HEIGHT as usize)).prop_map(
        |(mut grid, full_rows)| {
            for (y, full) in full_rows.into_iter().enumerate() {
                if full {
                    grid.fill_row_except(y as i8, &[]);
                }
            }
            grid
        },
    )
}

fn any_kind() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(ShapeKind::ALL.to_vec())
}

fn any_command() -> impl Strategy<Value = Command> {
    prop::sample::select(vec![
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::Rotate,
    ])
}

proptest! {
    #[test]
    fn is_free_is_total_and_matches_bounds(grid in any_grid(), x in -60i8..60, y in -60i8..60) {
        let free = grid.is_free(x, y);
        let expected = (0..W).contains(&x)
            && y < H
            && (y < 0 || grid.get(x, y) == Some(false));
        prop_assert_eq!(free, expected);
    }

    #[test]
    fn place_only_touches_given_cells(
        grid in any_grid(),
        kind in any_kind(),
        x in -4i8..14,
        y in -4i8..24,
        turns in 0usize..4,
    ) {
        let mut piece = Piece::at(kind, shape_offsets(kind), x, y);
        for _ in 0..turns {
            piece.rotate();
        }
        let cells = piece.cells();

        let mut placed = grid.clone();
        placed.place(cells);

        for cy in 0..H {
            for cx in 0..W {
                if cells.contains(&(cx, cy)) {
                    prop_assert_eq!(placed.get(cx, cy), Some(true));
                } else {
                    prop_assert_eq!(placed.get(cx, cy), grid.get(cx, cy));
                }
            }
        }
    }

    #[test]
    fn clear_full_lines_is_idempotent(grid in stacked_grid()) {
        let mut grid = grid;
        let full_before = (0..H as usize).filter(|&y| grid.is_row_full(y)).count() as u32;
        prop_assert_eq!(grid.clear_full_lines(), full_before);

        let settled = grid.clone();
        prop_assert_eq!(grid.clear_full_lines(), 0);
        prop_assert_eq!(grid, settled);
    }

    #[test]
    fn four_rotations_round_trip(kind in any_kind(), x in -4i8..14, y in -4i8..24) {
        let piece = Piece::at(kind, shape_offsets(kind), x, y);
        let mut turned = piece;
        for _ in 0..4 {
            turned = turned.rotated();
        }
        prop_assert_eq!(turned, piece);
    }

    #[test]
    fn rejected_commands_leave_game_untouched(
        seed in any::<u64>(),
        commands in prop::collection::vec(any_command(), 1..300),
    ) {
        let mut game = Game::new(seed);
        for command in commands {
            let before_piece = game.active();
            let before_grid = game.grid().clone();
            let applied = game.apply(command);
            if !applied {
                prop_assert_eq!(game.active(), before_piece);
                prop_assert_eq!(game.grid(), &before_grid);
            }
            if command != Command::SoftDrop && applied {
                prop_assert_eq!(game.grid(), &before_grid);
                prop_assert!(game.fits(&game.active()));
            }
        }
    }
}
