//! Packer for the 3x4 snail font.
//!
//! Each glyph is a 3x4 grid of monochrome cells. We store only the lit cells,
//! as 4-bit coordinate codes packed two to a byte, and pad every glyph out to
//! a fixed 12 bytes. A glyph with an odd number of lit cells ends its last
//! byte with an `END_NIBBLE`; everything after the data is `PADDING`.
//!
//! The packed glyphs can be written out as one `<name>.bin` file per glyph
//! (`write_font`) or as Rust source for inclusion from a build script
//! (`generate_table`).

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use byteorder::WriteBytesExt;
use log::{debug, info};

pub mod pack;
pub mod table;
pub mod unpack;

pub use crate::pack::{pack, Blob, PackedByte, BLOB_LEN};
pub use crate::table::{find, Glyph, Pattern, GLYPHS, GLYPH_COUNT};
pub use crate::unpack::{unpack, unpack_pattern};

/// Writes the packed form of `glyph` to `output`.
pub fn write_glyph(glyph: &Glyph, mut output: impl Write) -> io::Result<()> {
    for byte in pack(&glyph.pattern).iter() {
        debug!("{}: writing byte {:08b}", glyph.name, byte);
        output.write_u8(*byte)?;
    }
    Ok(())
}

/// Name of the file `glyph` is written to by `write_font`.
pub fn file_name(glyph: &Glyph) -> String {
    format!("{}.bin", glyph.name)
}

/// Writes every glyph in the table into `dir`, one `<name>.bin` file each,
/// replacing any existing files. Returns the number of files written.
pub fn write_font(dir: impl AsRef<Path>) -> io::Result<usize> {
    let dir = dir.as_ref();
    for glyph in GLYPHS.iter() {
        let path = dir.join(file_name(glyph));
        write_glyph(glyph, File::create(&path)?)?;
        info!("wrote {}", path.display());
    }
    Ok(GLYPHS.len())
}

/// Produces Rust code on `output` declaring the packed table as
/// `GLYPHS: [(char, [u8; BLOB_LEN]); GLYPH_COUNT]`.
pub fn generate_table(mut output: impl Write) -> io::Result<()> {
    writeln!(output, "// {} glyphs, {} bytes each", GLYPHS.len(), BLOB_LEN)?;
    writeln!(output, "pub const GLYPH_COUNT: usize = {};", GLYPHS.len())?;
    writeln!(
        output,
        "pub static GLYPHS: [(char, [u8; {}]); GLYPH_COUNT] = [",
        BLOB_LEN
    )?;
    for glyph in GLYPHS.iter() {
        write!(output, "    ({:?}, [", glyph.name)?;
        for (i, byte) in pack(&glyph.pattern).iter().enumerate() {
            if i != 0 {
                write!(output, ", ")?;
            }
            write!(output, "{:#04x}", byte)?;
        }
        writeln!(output, "]),")?;
    }
    writeln!(output, "];")?;

    Ok(())
}
