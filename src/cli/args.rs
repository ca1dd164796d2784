use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::defaults::{DEFAULT_COMPRESSION_LEVEL, DEFAULT_IMAGE_QUALITY};

#[derive(Parser, Debug)]
#[command(name = "pdf-squeeze")]
#[command(
    author,
    version,
    about = "Shrink existing PDF files by rewriting them with compressed streams"
)]
pub struct Args {
    /// Input PDF file path
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output PDF file path (defaults to input with .compressed.pdf extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Compression mode
    #[arg(short, long, value_enum, default_value = "standard")]
    pub mode: Mode,

    /// Strip the document information dictionary (custom mode; aggressive
    /// mode always strips it)
    #[arg(long)]
    pub remove_metadata: bool,

    /// Skip the fast web view ordering pass (custom mode)
    #[arg(long)]
    pub no_linearize: bool,

    /// Target quality for image recompression, 0-100 (aggressive mode).
    /// Currently accepted but unused.
    #[arg(short = 'q', long, default_value_t = DEFAULT_IMAGE_QUALITY, value_parser = clap::value_parser!(i32).range(0..=100))]
    pub image_quality: i32,

    /// Flate compression level, 0-9 (custom mode). Currently accepted but
    /// unused.
    #[arg(long, default_value_t = DEFAULT_COMPRESSION_LEVEL, value_parser = clap::value_parser!(i32).range(0..=9))]
    pub compression_level: i32,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Compression mode
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum Mode {
    /// Good balance of speed and size reduction
    #[default]
    Standard,
    /// Maximum size reduction; also strips document metadata
    Aggressive,
    /// Metadata removal and fast view ordering controlled by flags
    Custom,
}

impl Args {
    /// Get the output path, defaulting to input with .compressed.pdf extension
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("compressed.pdf"))
    }
}
