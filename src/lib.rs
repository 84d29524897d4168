//! Command-line tools that prepare binary assets for the snail game: the 3x4
//! bitmap font (`bitmap_font`) and raw sprite pixel dumps (`raw_pixels`).
//!
//! The actual work lives in the `glyphpack`, `font_3x4` and `pixeldump`
//! crates; this crate holds the binaries and the bits they share.

pub mod logger;
