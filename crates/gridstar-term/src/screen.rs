//! Off-screen glyph buffer ([`Screen`]) and [`compute_frame`], which diffs
//! two buffers so only changed glyphs are written to the terminal.

use gridstar_core::{Grid, Role};

use crate::palette::{self, Color};

// ---------------------------------------------------------------------------
// Glyph
// ---------------------------------------------------------------------------

/// One terminal character cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Glyph {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: palette::WHITE,
            bg: palette::BLACK,
        }
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// A `width`×`height` buffer of glyphs, addressed by terminal column/row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    cells: Vec<Glyph>,
    width: u16,
    height: u16,
}

impl Screen {
    /// Create a screen filled with default glyphs.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Glyph::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Glyph at `(x, y)`, or `None` outside the screen.
    pub fn at(&self, x: u16, y: u16) -> Option<Glyph> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set the glyph at `(x, y)`. No-op outside the screen.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = glyph;
        }
    }

    /// Write `text` across row `y`, padding with blanks in the same colours.
    /// Characters past the right edge are dropped.
    pub fn put_line(&mut self, y: u16, text: &str, fg: Color, bg: Color) {
        let mut chars = text.chars();
        for x in 0..self.width {
            let ch = chars.next().unwrap_or(' ');
            self.set(x, y, Glyph { ch, fg, bg });
        }
    }
}

// ---------------------------------------------------------------------------
// Grid view
// ---------------------------------------------------------------------------

/// Paint every grid cell as a block of `cell.size()` columns by one row,
/// coloured by role. Empty cells get a grey dot so the lattice stays
/// visible.
pub fn draw_grid(grid: &Grid, screen: &mut Screen) {
    for cell in grid.iter() {
        let bg = palette::role_color(cell.role());
        let (x0, _) = cell.origin();
        let y = cell.coordinates().row;
        let (Ok(x0), Ok(y)) = (u16::try_from(x0), u16::try_from(y)) else {
            continue;
        };
        for dx in 0..cell.size() {
            let ch = if dx == 0 && cell.role() == Role::Empty {
                '·'
            } else {
                ' '
            };
            screen.set(
                x0.saturating_add(dx),
                y,
                Glyph {
                    ch,
                    fg: palette::GREY,
                    bg,
                },
            );
        }
    }
}

/// Paint the status line on the last screen row.
pub fn draw_status(screen: &mut Screen, text: &str) {
    if let Some(y) = screen.height().checked_sub(1) {
        screen.put_line(y, text, palette::STATUS_FG, palette::STATUS_BG);
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single glyph that changed between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub x: u16,
    pub y: u16,
    pub glyph: Glyph,
}

/// Compute the glyphs of `curr` that differ from `prev`.
///
/// Without a previous screen, or when sizes differ, every glyph is
/// returned.
pub fn compute_frame(prev: Option<&Screen>, curr: &Screen) -> Vec<FrameCell> {
    let prev = prev.filter(|p| p.width == curr.width && p.height == curr.height);
    let mut cells = Vec::new();
    for y in 0..curr.height {
        for x in 0..curr.width {
            let glyph = curr.at(x, y).unwrap_or_default();
            if prev.and_then(|p| p.at(x, y)) != Some(glyph) {
                cells.push(FrameCell { x, y, glyph });
            }
        }
    }
    cells
}
