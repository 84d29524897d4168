//! The fixed sprite palette.

use image::Rgba;

/// Index byte used for fully transparent pixels.
pub const TRANSPARENT: u8 = 255;

/// Every colour the sprites may use, with its palette index. Several shades of
/// yellow share index 0.
pub static PALETTE: [([u8; 4], u8); 7] = [
    ([248, 252, 0, 255], 0),
    ([255, 255, 0, 255], 0),
    ([251, 242, 54, 255], 0),
    ([168, 84, 80, 255], 1),
    ([248, 84, 0, 255], 2),
    ([255, 255, 255, 255], 3),
    ([0, 0, 0, 0], TRANSPARENT),
];

/// Looks up the palette index of `pixel`. Only exact matches count.
pub fn palette_index(pixel: Rgba<u8>) -> Option<u8> {
    PALETTE
        .iter()
        .find(|(color, _)| *color == pixel.0)
        .map(|&(_, index)| index)
}
