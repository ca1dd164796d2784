use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the compression pipeline.
///
/// A run is all-or-nothing: any error means no usable output was produced
/// for that call.
#[derive(Error, Debug)]
pub enum CompressError {
    #[error("Input file does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to load PDF: {0}")]
    Load(String),

    #[error("Failed to rewrite PDF: {0}")]
    Rewrite(String),

    #[error("Failed to write PDF: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
