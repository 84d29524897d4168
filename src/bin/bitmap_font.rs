//! Packs the 3x4 font into one 12-byte `<glyph>.bin` file per glyph.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use snail_assets::logger;

#[derive(Parser)]
#[command(about = "Packs the 3x4 bitmap font into per-glyph .bin files")]
struct Args {
    /// Directory to write the glyph files into.
    #[arg(long, short = 'o', default_value = ".")]
    out_dir: PathBuf,
    /// Print TEXT as ASCII art using the packed font instead of writing files.
    #[arg(long, value_name = "TEXT")]
    preview: Option<String>,
    /// More output; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.verbose);

    if let Some(text) = args.preview {
        println!("{}", font_3x4::preview(&text)?);
        return Ok(());
    }

    let count = glyphpack::write_font(&args.out_dir).with_context(|| {
        format!("writing glyphs into {}", args.out_dir.display())
    })?;
    info!("{} glyphs written", count);

    Ok(())
}
