//! Reading packed glyphs back.
//!
//! This mirrors what the game does when it draws text: walk the blob a nibble
//! at a time, high nibble first, and stop at the first `END_NIBBLE`.

use core::iter::once;

use crate::pack::{cell, Blob, PackedByte};
use crate::table::{Pattern, HEIGHT, WIDTH};

/// Yields the `(x, y)` position of each lit cell, in packing order.
pub fn unpack(blob: &Blob) -> impl Iterator<Item = (u8, u8)> + '_ {
    blob.iter()
        .flat_map(|&byte| {
            let (hi, lo) = match PackedByte::from_byte(byte) {
                PackedByte::Pair(a, b) => (Some(a), Some(b)),
                PackedByte::Single(a) => (Some(a), None),
                PackedByte::Padding => (None, None),
            };
            once(hi).chain(once(lo))
        })
        .take_while(Option::is_some)
        .flatten()
        .map(cell)
}

/// Rebuilds the pattern a blob was packed from. Positions that fall outside
/// the glyph cell are ignored.
pub fn unpack_pattern(blob: &Blob) -> Pattern {
    let mut pattern = Pattern::default();
    for (x, y) in unpack(blob) {
        let (x, y) = (usize::from(x), usize::from(y));
        if x < WIDTH && y < HEIGHT {
            pattern.0[y * WIDTH + x] = true;
        }
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::{pack, BLOB_LEN, PADDING};
    use crate::table::{find, CELLS, GLYPHS};

    #[test]
    fn round_trip_whole_table() {
        for g in GLYPHS.iter() {
            assert_eq!(
                unpack_pattern(&pack(&g.pattern)),
                g.pattern,
                "Glyph {:?} did not survive",
                g.name
            );
        }
    }

    #[test]
    fn round_trip_every_pattern() {
        for mask in 0u32..1 << CELLS {
            let mut pattern = Pattern::default();
            for (i, lit) in pattern.0.iter_mut().enumerate() {
                *lit = mask & (1 << i) != 0;
            }
            assert_eq!(
                unpack_pattern(&pack(&pattern)),
                pattern,
                "Pattern {:012b} did not survive",
                mask
            );
        }
    }

    #[test]
    fn positions_come_out_in_scan_order() {
        let a = pack(&find('a').unwrap().pattern);
        let points: Vec<(u8, u8)> = unpack(&a).collect();
        assert_eq!(
            points,
            [(1, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2), (0, 3), (2, 3)]
        );
    }

    #[test]
    fn stops_at_first_end_nibble() {
        let mut blob = [PADDING; BLOB_LEN];
        blob[0] = 0x4F;
        // Readers never get this far.
        blob[1] = 0x00;
        assert_eq!(unpack(&blob).collect::<Vec<_>>(), [(1, 0)]);
    }

    #[test]
    fn padding_only_is_empty() {
        assert_eq!(unpack(&[PADDING; BLOB_LEN]).count(), 0);
        assert_eq!(unpack_pattern(&[PADDING; BLOB_LEN]), Pattern::default());
    }

    #[test]
    fn out_of_cell_codes_are_dropped() {
        let mut blob = [PADDING; BLOB_LEN];
        // Column 3 doesn't exist in a 3-wide glyph.
        blob[0] = 0xC0;
        let p = unpack_pattern(&blob);
        assert_eq!(p.lit_cells().collect::<Vec<_>>(), [0]);
    }
}
