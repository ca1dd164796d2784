/// Minimum PDF version stamped on rewritten output
pub const MIN_PDF_VERSION: &str = "1.5";

/// Default image recompression quality (accepted, currently unused)
pub const DEFAULT_IMAGE_QUALITY: i32 = 75;

/// Default flate compression level (accepted, currently unused)
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 9;

/// Savings below this percentage are reported as not worthwhile
pub const WORTHWHILE_SAVINGS_PERCENT: f64 = 5.0;
