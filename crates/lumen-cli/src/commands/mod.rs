//! CLI command implementations

pub mod enhance;

use anyhow::{Context, Result};
use lumen_core::Image;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<Image> {
    lumen_io::read(path).context("Could not read image")
}

/// Encode image as JPEG in memory
pub fn encode_jpeg(image: &Image, quality: u8, what: &str) -> Result<Vec<u8>> {
    lumen_io::encode(lumen_io::Format::Jpeg, image, quality)
        .with_context(|| format!("Failed to encode {what}"))
}

/// Returns the file name of `path` for display.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
