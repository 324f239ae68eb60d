use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::sync::Arc;

use colorlut::*;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to palette file (.json, .ron, .yaml or .lut).
    ///
    /// When omitted a 256-entry grayscale ramp is used.
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Path to output image (file extension must be JPEG or PNG).
    output: PathBuf,
    /// Dimensions (in pixels) of the color bar.
    #[arg(short, long, number_of_values = 2, default_values_t = [256, 32])]
    #[arg(value_names = ["WIDTH", "HEIGHT"])]
    dims: Vec<usize>,
    /// Invert the grayscale ramp (ignored when a palette file is given).
    #[arg(long)]
    inverted: bool,
    /// Outline the bar with a one pixel black frame.
    #[arg(short, long)]
    framed: bool,
    /// Render into an indexed buffer carrying the palette instead of true color.
    #[arg(short='I', long)]
    indexed: bool,
    /// Print debugging output.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn bar_config(&self) -> BarConfig {
        BarConfig {
            width: self.dims[0],
            height: self.dims[1],
            framed: self.framed,
            mode: if self.indexed { BarMode::Indexed } else { BarMode::TrueColor },
        }
    }

    fn palette(&self) -> Result<Palette, PaletteFileError> {
        match &self.input {
            Some(path) => Palette::from_file(path),
            None => Ok(create_grayscale_palette(self.inverted)),
        }
    }
}

fn run() -> Result<(), PaletteFileError> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .init();

    let lut = ColorLut::from_palette(Arc::new(cli.palette()?))?;

    println!(
        "Rendering {}-entry {} palette...",
        lut.map_size(),
        if lut.is_grayscale() { "grayscale" } else { "color" }
    );

    let bar = lut.render_bar(cli.bar_config())?;
    save_buffer(&bar, &cli.output)?;

    println!(
        "Completed! {}x{} color bar written to '{}'",
        bar.width(),
        bar.height(),
        cli.output.display()
    );

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
