//! Image to raw byte stream converter for sprite assets.
//!
//! Pixels are emitted in column-major order: every pixel of column 0 top to
//! bottom, then column 1, and so on. The game indexes sprites with that
//! transposition in mind.
//!
//! Two encodings are supported. `Mode::Raw` writes four bytes per pixel (red,
//! green, blue, alpha). `Mode::Palette` writes one byte per pixel, the index of
//! the pixel's colour in `palette::PALETTE`; a colour outside the palette is an
//! error.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use byteorder::WriteBytesExt;
use image::{GenericImageView, ImageError, Rgba};
use log::info;
use scopeguard::ScopeGuard;
use thiserror::Error;

pub mod palette;

pub use crate::palette::{palette_index, PALETTE};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Red, green, blue and alpha bytes for each pixel.
    Raw,
    /// A single palette index byte for each pixel.
    Palette,
}

impl Mode {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Mode::Raw => 4,
            Mode::Palette => 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("could not read image")]
    Image(#[from] ImageError),
    #[error("pixel ({x}, {y}) has colour {color:?}, which is not in the palette")]
    UnmappedColor { x: u32, y: u32, color: [u8; 4] },
}

/// Writes every pixel of `image` to `output` in column-major order, encoded
/// per `mode`. Returns the number of bytes written.
///
/// In palette mode, stops at the first pixel whose colour is not in the
/// palette; bytes for earlier pixels will already have been written.
pub fn dump<I>(
    image: &I,
    mode: Mode,
    mut output: impl Write,
) -> Result<usize, DumpError>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    let mut written = 0;

    for x in 0..width {
        for y in 0..height {
            let pixel = image.get_pixel(x, y);
            match mode {
                Mode::Raw => {
                    for &channel in pixel.0.iter() {
                        output.write_u8(channel)?;
                    }
                }
                Mode::Palette => {
                    let index = palette_index(pixel).ok_or(
                        DumpError::UnmappedColor {
                            x,
                            y,
                            color: pixel.0,
                        },
                    )?;
                    output.write_u8(index)?;
                }
            }
            written += mode.bytes_per_pixel();
        }
    }

    Ok(written)
}

/// Decodes the image at `input` and dumps it to a new file at `output`.
///
/// If anything goes wrong after `output` has been created, it is removed
/// again rather than left half-written.
pub fn dump_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    mode: Mode,
) -> Result<usize, DumpError> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let image = image::open(input)?.to_rgba8();
    info!(
        "{}: {}x{} pixels",
        input.display(),
        image.width(),
        image.height()
    );

    let file = File::create(output)?;
    let cleanup = scopeguard::guard(output, |path| {
        let _ = fs::remove_file(path);
    });

    let mut writer = BufWriter::new(file);
    let written = dump(&image, mode, &mut writer)?;
    writer.flush()?;

    ScopeGuard::into_inner(cleanup);
    info!("{}: wrote {} bytes", output.display(), written);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;
    use tempfile::tempdir;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
    const BROWN: Rgba<u8> = Rgba([168, 84, 80, 255]);
    const ORANGE: Rgba<u8> = Rgba([248, 84, 0, 255]);

    fn dump_to_vec(image: &RgbaImage, mode: Mode) -> Result<Vec<u8>, DumpError> {
        let mut out = vec![];
        let n = dump(image, mode, &mut out)?;
        assert_eq!(n, out.len());
        Ok(out)
    }

    #[test]
    fn palette_single_white() {
        let image = RgbaImage::from_pixel(1, 1, WHITE);
        assert_eq!(dump_to_vec(&image, Mode::Palette).unwrap(), [3]);
    }

    #[test]
    fn raw_single() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([10, 20, 30, 40]));
        assert_eq!(dump_to_vec(&image, Mode::Raw).unwrap(), [10, 20, 30, 40]);
    }

    #[test]
    fn scan_is_column_major() {
        // 2 wide, 3 tall, every pixel distinct.
        let image = RgbaImage::from_fn(2, 3, |x, y| {
            Rgba([x as u8, y as u8, 0, 1])
        });
        let out = dump_to_vec(&image, Mode::Raw).unwrap();
        let order: Vec<(u8, u8)> =
            out.chunks(4).map(|px| (px[0], px[1])).collect();
        assert_eq!(order, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn palette_scan_is_column_major() {
        let mut image = RgbaImage::from_pixel(2, 2, CLEAR);
        image.put_pixel(1, 0, BROWN);
        image.put_pixel(0, 1, ORANGE);
        assert_eq!(
            dump_to_vec(&image, Mode::Palette).unwrap(),
            [255, 2, 1, 255]
        );
    }

    #[test]
    fn palette_unmapped_color_fails() {
        let mut image = RgbaImage::from_pixel(3, 2, WHITE);
        image.put_pixel(2, 1, Rgba([1, 2, 3, 255]));
        match dump_to_vec(&image, Mode::Palette) {
            Err(DumpError::UnmappedColor { x, y, color }) => {
                assert_eq!((x, y), (2, 1));
                assert_eq!(color, [1, 2, 3, 255]);
            }
            other => panic!("expected unmapped colour, got {:?}", other),
        }
    }

    #[test]
    fn empty_image() {
        let image = RgbaImage::new(0, 0);
        assert!(dump_to_vec(&image, Mode::Raw).unwrap().is_empty());
        assert!(dump_to_vec(&image, Mode::Palette).unwrap().is_empty());
    }

    #[test]
    fn dump_file_sizes() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sprite.png");
        RgbaImage::from_pixel(3, 5, WHITE).save(&input).unwrap();

        let raw = dir.path().join("sprite_raw.bin");
        assert_eq!(dump_file(&input, &raw, Mode::Raw).unwrap(), 3 * 5 * 4);
        assert_eq!(fs::read(&raw).unwrap(), vec![255; 3 * 5 * 4]);

        let indexed = dir.path().join("sprite_indexed.bin");
        assert_eq!(dump_file(&input, &indexed, Mode::Palette).unwrap(), 15);
        assert_eq!(fs::read(&indexed).unwrap(), vec![3; 15]);
    }

    #[test]
    fn dump_file_removes_partial_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sprite.png");
        let mut image = RgbaImage::from_pixel(4, 4, WHITE);
        image.put_pixel(3, 3, Rgba([0, 0, 255, 255]));
        image.save(&input).unwrap();

        let output = dir.path().join("sprite.bin");
        match dump_file(&input, &output, Mode::Palette) {
            Err(DumpError::UnmappedColor { x: 3, y: 3, .. }) => (),
            other => panic!("expected unmapped colour, got {:?}", other),
        }
        assert!(!output.exists());
    }

    #[test]
    fn dump_file_missing_input() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("never.bin");
        match dump_file(dir.path().join("nope.png"), &output, Mode::Raw) {
            Err(e @ DumpError::Image(_)) => {
                assert_eq!(e.to_string(), "could not read image");
            }
            other => panic!("expected image error, got {:?}", other),
        }
        assert!(!output.exists());
    }
}
