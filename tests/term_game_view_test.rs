use blockfall::core::{shape_offsets, Game, Grid, Piece, Snapshot};
use blockfall::term::{GameView, Palette, Viewport};
use blockfall::types::ShapeKind;

fn snapshot_with(grid: Grid, piece: Piece) -> Snapshot {
    Game::from_parts(grid, piece, 1).snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Game::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // 10 cells * 2 columns + border = 22 wide; 20 rows + border = 22 tall.
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_locked_and_active_cells_use_different_colors() {
    let mut grid = Grid::new();
    grid.set(0, 19, true);
    let o = Piece::at(ShapeKind::O, shape_offsets(ShapeKind::O), 4, 0);
    let snap = snapshot_with(grid, o);

    let palette = Palette::default();
    let fb = GameView::default().render(&snap, Viewport::new(22, 24));

    // Locked cell (0, 19): two columns wide inside the border.
    let locked = fb.get(1, 20).unwrap();
    assert_eq!(locked.ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(locked.style.fg, palette.locked);

    // Active cell (4, 0) starts at column 1 + 4 * 2.
    let active = fb.get(9, 1).unwrap();
    assert_eq!(active.ch, '█');
    assert_eq!(active.style.fg, palette.active);

    // Empty cell.
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_status_line_reports_counters() {
    let mut game = Game::from_parts(
        Grid::new(),
        Piece::at(ShapeKind::O, shape_offsets(ShapeKind::O), 0, 18),
        1,
    );
    game.tick();
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(30, 24));

    let (x0, y0) = GameView::default().origin(Viewport::new(30, 24));
    let status = fb.row_text(y0 + 22);
    assert!(status.contains("lines 0"), "status: {:?}", status);
    assert!(status.contains("pieces 1"), "status: {:?}", status);
    assert_eq!(x0, 4);
}

#[test]
fn term_view_handles_tiny_viewport() {
    let snap = Game::new(3).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
