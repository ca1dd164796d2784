//! PDF rewrite pipeline.
//!
//! Three entry points marshal paths and flags into one pass over the
//! document: load, optional metadata strip, prune, full decode/re-encode of
//! flate streams, version raise, optional fast view ordering, save. Each
//! call owns its document for the duration and is all-or-nothing.

pub(crate) mod graph;
pub(crate) mod reorder;

use std::fs;
use std::path::Path;

use lopdf::Document;

use crate::config::Settings;
use crate::error::CompressError;
use crate::stats::CompressionStats;

/// Standard compression - good balance of speed and size reduction.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// let stats = pdf_squeeze::compress(Path::new("report.pdf"), Path::new("report.small.pdf"))
///     .expect("compression failed");
/// println!("{}", stats);
/// ```
pub fn compress(input: &Path, output: &Path) -> Result<CompressionStats, CompressError> {
    compress_with_settings(input, output, &Settings::standard())
}

/// Aggressive compression - maximum size reduction, also strips the
/// document information dictionary.
///
/// `image_quality` is accepted for any value (including out of range) and
/// currently has no effect; per-image recompression is not implemented.
pub fn compress_aggressive(
    input: &Path,
    output: &Path,
    image_quality: i32,
) -> Result<CompressionStats, CompressError> {
    compress_with_settings(input, output, &Settings::aggressive(image_quality))
}

/// Custom compression with configurable options.
///
/// Metadata removal and fast view ordering follow the two booleans.
/// `compression_level` is accepted and currently has no effect; the toolkit
/// writes flate streams at its default level.
pub fn compress_custom(
    input: &Path,
    output: &Path,
    remove_metadata: bool,
    linearize: bool,
    compression_level: i32,
) -> Result<CompressionStats, CompressError> {
    compress_with_settings(
        input,
        output,
        &Settings::custom(remove_metadata, linearize, compression_level),
    )
}

/// Compress with an explicit [`Settings`] value.
pub fn compress_with_settings(
    input: &Path,
    output: &Path,
    settings: &Settings,
) -> Result<CompressionStats, CompressError> {
    let result = rewrite(input, output, settings);
    match &result {
        Ok(stats) => log::info!("Compressed {}: {}", input.display(), stats),
        Err(err) => log::error!("Error compressing {}: {}", input.display(), err),
    }
    result
}

fn rewrite(
    input: &Path,
    output: &Path,
    settings: &Settings,
) -> Result<CompressionStats, CompressError> {
    if !input.exists() {
        return Err(CompressError::InputNotFound(input.to_path_buf()));
    }
    let input_size = fs::metadata(input)?.len();

    log::info!("Compressing {} -> {}", input.display(), output.display());
    log::debug!("Settings: {:?}", settings);

    let mut doc = Document::load(input).map_err(|e| CompressError::Load(e.to_string()))?;

    if settings.remove_metadata {
        strip_document_info(&mut doc);
    }

    if settings.prune_unreferenced {
        let removed = graph::prune_unreachable(&mut doc);
        if removed > 0 {
            log::debug!("Pruned {} unreferenced objects", removed);
        }
    }

    if settings.decode_streams {
        doc.decompress();
    }
    doc.compress();

    raise_version(&mut doc, settings.min_version);

    if settings.linearize {
        reorder::front_load_first_page(&mut doc)?;
    } else {
        doc.renumber_objects();
    }

    doc.save(output)
        .map_err(|e| CompressError::Write(e.to_string()))?;
    let output_size = fs::metadata(output)?.len();

    Ok(CompressionStats {
        input_size,
        output_size,
    })
}

/// Remove the trailer's /Info key. The detached dictionary itself is left
/// for the pruning pass.
fn strip_document_info(doc: &mut Document) {
    if doc.trailer.remove(b"Info").is_some() {
        log::debug!("Removed document information dictionary");
    }
}

/// Raise the document version to at least `min`; never lower it.
fn raise_version(doc: &mut Document, min: &str) {
    if parse_version(&doc.version) < parse_version(min) {
        log::debug!("Raising PDF version {} -> {}", doc.version, min);
        doc.version = min.to_string();
    }
}

fn parse_version(v: &str) -> (u32, u32) {
    let mut parts = v.splitn(2, '.');
    let major = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0);
    let minor = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0);
    (major, minor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Dictionary, Object};

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("1.5"), (1, 5));
        assert_eq!(parse_version("2.0"), (2, 0));
        assert_eq!(parse_version("garbage"), (0, 0));
    }

    #[test]
    fn test_raise_version_bumps_older() {
        let mut doc = Document::with_version("1.3");
        raise_version(&mut doc, "1.5");
        assert_eq!(doc.version, "1.5");
    }

    #[test]
    fn test_raise_version_keeps_newer() {
        let mut doc = Document::with_version("1.7");
        raise_version(&mut doc, "1.5");
        assert_eq!(doc.version, "1.7");
    }

    #[test]
    fn test_strip_document_info() {
        let mut doc = Document::with_version("1.5");
        let mut info = Dictionary::new();
        info.set("Producer", Object::string_literal("test"));
        let info_id = doc.add_object(Object::Dictionary(info));
        doc.trailer.set("Info", Object::Reference(info_id));

        strip_document_info(&mut doc);
        assert!(doc.trailer.get(b"Info").is_err());

        // Second strip is a no-op.
        strip_document_info(&mut doc);
        assert!(doc.trailer.get(b"Info").is_err());
    }
}
