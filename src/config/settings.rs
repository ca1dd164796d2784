use crate::cli::{Args, Mode};

use super::defaults::*;

/// Runtime settings for a single compression run.
///
/// The three mode constructors mirror the public operations; `custom` is the
/// only profile where callers pick metadata removal and ordering themselves.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Remove the document information dictionary before writing
    pub remove_metadata: bool,
    /// Renumber objects so the first page serializes at the front of the file
    pub linearize: bool,
    /// Decode existing flate streams before re-encoding them
    pub decode_streams: bool,
    /// Drop objects unreachable from the trailer
    pub prune_unreferenced: bool,
    /// Raise the document version to at least this
    pub min_version: &'static str,

    /// Target image recompression quality. Accepted for compatibility with
    /// the aggressive profile; no recompression is performed yet.
    pub image_quality: i32,
    /// Flate compression level. Accepted for compatibility with the custom
    /// profile; the toolkit uses its default level.
    pub compression_level: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            remove_metadata: false,
            linearize: true,
            decode_streams: true,
            prune_unreferenced: true,
            min_version: MIN_PDF_VERSION,
            image_quality: DEFAULT_IMAGE_QUALITY,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl Settings {
    /// Standard profile: maximum stream compression, fast view ordering,
    /// metadata kept.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Aggressive profile: standard plus metadata removal.
    pub fn aggressive(image_quality: i32) -> Self {
        Self {
            remove_metadata: true,
            image_quality,
            ..Self::default()
        }
    }

    /// Custom profile: metadata removal and ordering chosen by the caller.
    pub fn custom(remove_metadata: bool, linearize: bool, compression_level: i32) -> Self {
        Self {
            remove_metadata,
            linearize,
            compression_level,
            ..Self::default()
        }
    }

    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        match args.mode {
            Mode::Standard => Self::standard(),
            Mode::Aggressive => Self::aggressive(args.image_quality),
            Mode::Custom => Self::custom(
                args.remove_metadata,
                !args.no_linearize,
                args.compression_level,
            ),
        }
    }
}
