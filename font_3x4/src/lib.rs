//! The 3x4 snail font, packed at build time, and a small text rasterizer for
//! it.

use glyphpack::table::{HEIGHT, WIDTH};
use glyphpack::{unpack_pattern, Blob};
use thiserror::Error;

mod packed {
    include!(concat!(env!("OUT_DIR"), "/glyphs_include.rs"));
}

pub use packed::{GLYPHS, GLYPH_COUNT};

/// Horizontal distance between the left edges of adjacent characters.
pub const ADVANCE: usize = WIDTH + 1;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("no glyph for {0:?}")]
pub struct UnknownGlyph(pub char);

/// Finds the packed glyph for `c`.
pub fn blob(c: char) -> Option<&'static Blob> {
    GLYPHS.iter().find(|(name, _)| *name == c).map(|(_, blob)| blob)
}

/// Resolves every non-space character of `text` to its x offset and glyph.
fn layout(text: &str) -> Result<Vec<(usize, &'static Blob)>, UnknownGlyph> {
    text.chars()
        .enumerate()
        .filter(|&(_, c)| c != ' ')
        .map(|(i, c)| blob(c).map(|b| (i * ADVANCE, b)).ok_or(UnknownGlyph(c)))
        .collect()
}

/// Lit cells of a glyph, row by row.
fn cells(blob: &Blob) -> impl Iterator<Item = (usize, usize)> {
    let pattern = unpack_pattern(blob);
    (0..HEIGHT)
        .flat_map(|y| (0..WIDTH).map(move |x| (x, y)))
        .filter(move |&(x, y)| pattern.is_lit(x, y))
}

/// An RGBA8 image in row-major order.
pub struct Canvas<'a> {
    pub buffer: &'a mut [u8],
    pub width: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(buffer: &'a mut [u8], width: usize) -> Self {
        Canvas { buffer, width }
    }

    fn draw_pixel(&mut self, x: usize, y: usize, color: [u8; 3]) {
        assert!(x < self.width, "x = {} is off the canvas", x);
        let px = 4 * (y * self.width + x);
        self.buffer[px..px + 3].copy_from_slice(&color);
        self.buffer[px + 3] = 0xFF;
    }

    /// Draws `text` with its top-left corner at `(x, y)`. Spaces leave a gap.
    /// Lit cells are painted opaque in `color`; nothing else is touched.
    ///
    /// If `text` contains a character the font lacks, nothing is drawn.
    ///
    /// # Panics
    ///
    /// If the text runs off the canvas.
    pub fn draw_text(
        &mut self,
        text: &str,
        x: usize,
        y: usize,
        color: [u8; 3],
    ) -> Result<(), UnknownGlyph> {
        for (offset, blob) in layout(text)? {
            for (cx, cy) in cells(blob) {
                self.draw_pixel(x + offset + cx, y + cy, color);
            }
        }
        Ok(())
    }
}

/// Renders `text` as ASCII art, one line per glyph row, `#` for lit cells and
/// `.` for everything else.
pub fn preview(text: &str) -> Result<String, UnknownGlyph> {
    let width = (text.chars().count() * ADVANCE).saturating_sub(1);
    let mut rows = vec![vec!['.'; width]; HEIGHT];

    for (offset, blob) in layout(text)? {
        for (x, y) in cells(blob) {
            rows[y][offset + x] = '#';
        }
    }

    Ok(rows
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n"))
}
