//! Nibble-pair packing of lit cells.

use arrayvec::ArrayVec;

use crate::table::{Pattern, CELLS, WIDTH};

/// Length of every packed glyph, in bytes.
pub const BLOB_LEN: usize = 12;

/// A packed glyph.
pub type Blob = [u8; BLOB_LEN];

/// Nibble value meaning "no point here".
pub const END_NIBBLE: u8 = 0b1111;

/// Byte value used to pad a glyph out to `BLOB_LEN`.
pub const PADDING: u8 = 0b1111_1111;

/// Computes the 4-bit coordinate code for cell `index`: column in the high two
/// bits, row in the low two. The largest code a 3x4 glyph can produce is 11,
/// so it never collides with `END_NIBBLE`.
pub fn coord(index: usize) -> u8 {
    debug_assert!(index < CELLS);
    (((index % WIDTH) << 2) | (index / WIDTH)) as u8
}

/// Splits a coordinate code back into `(x, y)`.
pub fn cell(coord: u8) -> (u8, u8) {
    (coord >> 2, coord & 0b11)
}

/// One byte of a packed glyph, before serialization.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PackedByte {
    /// Two lit cells.
    Pair(u8, u8),
    /// The last, odd lit cell, followed by `END_NIBBLE`.
    Single(u8),
    Padding,
}

impl PackedByte {
    pub fn to_byte(self) -> u8 {
        match self {
            PackedByte::Pair(a, b) => (a << 4) | b,
            PackedByte::Single(a) => (a << 4) | END_NIBBLE,
            PackedByte::Padding => PADDING,
        }
    }

    /// Classifies a serialized byte. Anything with `END_NIBBLE` on top is
    /// padding, since readers stop there.
    pub fn from_byte(byte: u8) -> Self {
        match (byte >> 4, byte & 0xF) {
            (END_NIBBLE, _) => PackedByte::Padding,
            (a, END_NIBBLE) => PackedByte::Single(a),
            (a, b) => PackedByte::Pair(a, b),
        }
    }
}

/// Packs `pattern` into its byte kinds. Lit cells are paired up in storage
/// order; an odd one out gets a `Single`, and the rest is `Padding`.
pub fn pack_bytes(pattern: &Pattern) -> ArrayVec<[PackedByte; BLOB_LEN]> {
    let mut out = ArrayVec::new();
    let mut pending = ArrayVec::<[usize; 2]>::new();

    for index in pattern.lit_cells() {
        pending.push(index);
        if pending.len() == pending.capacity() {
            out.push(PackedByte::Pair(coord(pending[0]), coord(pending[1])));
            pending.clear();
        }
    }

    if let Some(&index) = pending.first() {
        out.push(PackedByte::Single(coord(index)));
    }

    while out.len() < BLOB_LEN {
        out.push(PackedByte::Padding);
    }
    out
}

/// Packs `pattern` into its serialized form.
pub fn pack(pattern: &Pattern) -> Blob {
    let mut blob = [PADDING; BLOB_LEN];
    for (slot, byte) in blob.iter_mut().zip(pack_bytes(pattern)) {
        *slot = byte.to_byte();
    }
    blob
}
