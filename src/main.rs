use anyhow::{Context, Result};
use clap::Parser;

use pdf_squeeze::cli::{Args, Mode};
use pdf_squeeze::compress::{compress, compress_aggressive, compress_custom};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let output_path = args.output_path();

    let stats = match args.mode {
        Mode::Standard => compress(&args.input, &output_path)
            .with_context(|| format!("Failed to compress {}", args.input.display()))?,
        Mode::Aggressive => compress_aggressive(&args.input, &output_path, args.image_quality)
            .with_context(|| {
                format!("Failed to aggressively compress {}", args.input.display())
            })?,
        Mode::Custom => compress_custom(
            &args.input,
            &output_path,
            args.remove_metadata,
            !args.no_linearize,
            args.compression_level,
        )
        .with_context(|| format!("Failed to compress {}", args.input.display()))?,
    };

    println!("Successfully wrote PDF to {}", output_path.display());
    println!("{}", stats);
    if !stats.is_worthwhile() {
        println!("Savings are marginal; the input may already be well compressed.");
    }

    Ok(())
}
