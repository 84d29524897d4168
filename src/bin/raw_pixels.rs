//! Dumps an image's pixels, column by column, as raw RGBA or palette indices.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pixeldump::Mode;
use snail_assets::logger;

#[derive(Parser)]
#[command(about = "Converts an image into a raw pixel byte stream")]
struct Args {
    /// Image to read. Any format the `image` crate can decode.
    input: PathBuf,
    /// File to write.
    output: PathBuf,
    /// Write one palette index per pixel instead of four RGBA bytes.
    #[arg(long)]
    palette: bool,
    /// More output; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.verbose);

    let mode = if args.palette { Mode::Palette } else { Mode::Raw };
    pixeldump::dump_file(&args.input, &args.output, mode).with_context(|| {
        format!(
            "dumping {} to {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    Ok(())
}
