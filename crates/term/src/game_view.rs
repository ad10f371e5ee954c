//! GameView: paints a `core::Snapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O), so layouts can be unit-tested.

use crate::core::Snapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Lines reserved under the board for the status and key help.
const STATUS_LINES: u16 = 2;

const BLOCK: char = '█';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Colors for the two kinds of filled cells plus the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub locked: Rgb,
    pub active: Rgb,
    pub well: Rgb,
    pub border: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            locked: Rgb::new(70, 110, 230),
            active: Rgb::new(225, 60, 60),
            well: Rgb::new(30, 30, 40),
            border: Rgb::new(200, 200, 200),
        }
    }
}

/// Board renderer.
pub struct GameView {
    /// Terminal columns per grid cell.
    cell_w: u16,
    /// Terminal rows per grid cell.
    cell_h: u16,
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares up typical terminal glyphs.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            palette: Palette::default(),
        }
    }

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (GRID_WIDTH as u16).saturating_mul(self.cell_w).saturating_add(2),
            (GRID_HEIGHT as u16).saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Top-left corner of the board frame inside `viewport`.
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h.saturating_add(STATUS_LINES)) / 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &Snapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let (frame_w, frame_h) = self.frame_size();
        let (x0, y0) = self.origin(viewport);
        let well = Style::new(Rgb::new(90, 90, 100), self.palette.well).dim();

        self.draw_border(fb, x0, y0, frame_w, frame_h);

        for (y, row) in snap.grid.iter().enumerate() {
            for (x, &filled) in row.iter().enumerate() {
                let glyph = if filled {
                    Glyph::new(BLOCK, Style::new(self.palette.locked, self.palette.well))
                } else {
                    Glyph::new('·', well)
                };
                self.paint_cell(fb, x0, y0, x as u16, y as u16, glyph);
            }
        }

        let active = Glyph::new(
            BLOCK,
            Style::new(self.palette.active, self.palette.well).bold(),
        );
        for &(x, y) in &snap.active {
            if (0..GRID_WIDTH as i8).contains(&x) && (0..GRID_HEIGHT as i8).contains(&y) {
                self.paint_cell(fb, x0, y0, x as u16, y as u16, active);
            }
        }

        self.draw_status(fb, snap, x0, y0.saturating_add(frame_h), frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &Snapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn paint_cell(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, x: u16, y: u16, glyph: Glyph) {
        fb.fill_rect(
            x0.saturating_add(1)
                .saturating_add(x.saturating_mul(self.cell_w)),
            y0.saturating_add(1)
                .saturating_add(y.saturating_mul(self.cell_h)),
            self.cell_w,
            self.cell_h,
            glyph,
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::new(self.palette.border, Rgb::default());
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        for cx in x + 1..right {
            fb.set(cx, y, Glyph::new('─', style));
            fb.set(cx, bottom, Glyph::new('─', style));
        }
        for cy in y + 1..bottom {
            fb.set(x, cy, Glyph::new('│', style));
            fb.set(right, cy, Glyph::new('│', style));
        }
        fb.set(x, y, Glyph::new('┌', style));
        fb.set(right, y, Glyph::new('┐', style));
        fb.set(x, bottom, Glyph::new('└', style));
        fb.set(right, bottom, Glyph::new('┘', style));
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &Snapshot, x: u16, y: u16, width: u16) {
        let text = Style::default();
        let status = format!(
            "lines {}  pieces {}",
            snap.lines_cleared, snap.pieces_locked
        );
        fb.put_str(x + 1, y, &status, text);

        let help = "←→ ↑rot ↓drop q:quit";
        if help.chars().count() as u16 <= width {
            fb.put_str(x + 1, y.saturating_add(1), help, text.dim());
        }
    }
}
