pub mod cli;
pub mod compress;
pub mod config;
pub mod error;
pub mod stats;

pub use cli::Mode;
pub use compress::{compress, compress_aggressive, compress_custom, compress_with_settings};
pub use config::Settings;
pub use error::CompressError;
pub use stats::CompressionStats;
