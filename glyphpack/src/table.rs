//! The built-in 3x4 font table.
//!
//! Each glyph is written as four rows of three cells, top to bottom, where `#`
//! marks a lit cell. Cells are stored in that same order, so cell `i` sits at
//! column `i % WIDTH` and row `i / WIDTH`.

/// Glyph width in cells.
pub const WIDTH: usize = 3;
/// Glyph height in cells.
pub const HEIGHT: usize = 4;
/// Number of cells in a glyph.
pub const CELLS: usize = WIDTH * HEIGHT;

/// Monochrome cell states of one glyph, in storage order.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Pattern(pub [bool; CELLS]);

impl Pattern {
    /// Builds a pattern from four rows of exactly `WIDTH` characters. `#` is
    /// lit; anything else is dark.
    ///
    /// # Panics
    ///
    /// If any row is not `WIDTH` bytes long. For the built-in table this
    /// happens at compile time.
    pub const fn from_rows(rows: [&str; HEIGHT]) -> Self {
        let mut cells = [false; CELLS];
        let mut y = 0;
        while y < HEIGHT {
            let row = rows[y].as_bytes();
            assert!(row.len() == WIDTH, "glyph row has the wrong width");
            let mut x = 0;
            while x < WIDTH {
                cells[y * WIDTH + x] = row[x] == b'#';
                x += 1;
            }
            y += 1;
        }
        Pattern(cells)
    }

    /// Parses a pattern from its `CELLS` characters in storage order. Returns
    /// `None` if the text has any other length.
    #[cfg(test)]
    fn parse(text: &str) -> Option<Self> {
        let mut cells = [false; CELLS];
        let mut chars = text.chars();
        for cell in cells.iter_mut() {
            *cell = chars.next()? == '#';
        }
        if chars.next().is_some() {
            return None;
        }
        Some(Pattern(cells))
    }

    /// Indices of lit cells, in storage order.
    pub fn lit_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &lit)| lit)
            .map(|(index, _)| index)
    }

    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        x < WIDTH && y < HEIGHT && self.0[y * WIDTH + x]
    }
}

/// A named glyph.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Glyph {
    pub name: char,
    pub pattern: Pattern,
}

const fn glyph(name: char, rows: [&str; HEIGHT]) -> Glyph {
    Glyph {
        name,
        pattern: Pattern::from_rows(rows),
    }
}

pub const GLYPH_COUNT: usize = 37;

/// Every glyph in the font: `a` through `z`, `0` through `9`, then `:`.
pub static GLYPHS: [Glyph; GLYPH_COUNT] = [
    glyph('a', [" # ", "# #", "###", "# #"]),
    glyph('b', ["###", "## ", "# #", "## "]),
    glyph('c', [" ##", "#  ", "#  ", " ##"]),
    glyph('d', ["## ", "# #", "# #", "## "]),
    glyph('e', ["###", "## ", "#  ", "###"]),
    glyph('f', ["###", "## ", "#  ", "#  "]),
    glyph('g', [" ##", "#  ", "# #", " ##"]),
    glyph('h', ["# #", "###", "# #", "# #"]),
    glyph('i', ["###", " # ", " # ", "###"]),
    glyph('j', ["###", "  #", "# #", " # "]),
    glyph('k', ["# #", "## ", "# #", "# #"]),
    glyph('l', ["#  ", "#  ", "#  ", "###"]),
    glyph('m', ["###", "###", "# #", "# #"]),
    glyph('n', ["## ", "# #", "# #", "# #"]),
    glyph('o', [" # ", "# #", "# #", " # "]),
    glyph('p', ["###", "# #", "###", "#  "]),
    glyph('q', [" # ", "# #", "###", " ##"]),
    glyph('r', ["## ", "# #", "## ", "# #"]),
    glyph('s', ["###", "## ", "  #", "###"]),
    glyph('t', ["###", " # ", " # ", " # "]),
    glyph('u', ["# #", "# #", "# #", " # "]),
    glyph('v', ["# #", "# #", "## ", "#  "]),
    glyph('w', ["# #", "# #", "###", "###"]),
    glyph('x', ["# #", " # ", "# #", "# #"]),
    glyph('y', ["# #", " # ", " # ", " # "]),
    glyph('z', ["###", " # ", "#  ", "###"]),
    glyph('0', [" # ", "###", "# #", " # "]),
    glyph('1', ["## ", " # ", " # ", "###"]),
    glyph('2', ["## ", "  #", " # ", "###"]),
    glyph('3', ["## ", " ##", "  #", "## "]),
    glyph('4', ["# #", "###", "  #", "  #"]),
    glyph('5', ["###", "## ", "  #", " # "]),
    glyph('6', [" ##", "#  ", "###", "## "]),
    glyph('7', ["###", "  #", " # ", "#  "]),
    glyph('8', ["###", "###", "# #", "###"]),
    glyph('9', [" ##", "###", "  #", "## "]),
    glyph(':', ["#  ", "   ", "#  ", "   "]),
];

/// Looks up a glyph by name.
pub fn find(name: char) -> Option<&'static Glyph> {
    GLYPHS.iter().find(|g| g.name == name)
}
