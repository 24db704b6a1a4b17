//! # lumen-io
//!
//! Image I/O for lumen.
//!
//! - **PNG** - lossless, 8-bit gray or RGB output
//! - **JPEG** - lossy, quality setting
//!
//! Every reader returns an 8-bit, three-channel [`Image`]. Writers accept
//! one- or three-channel images.
//!
//! # Architecture
//!
//! - [`ImageReader`] / [`ImageWriter`] - traits for format readers and writers
//! - [`read`] / [`write`] - format auto-detection from content or extension
//! - [`encode`] - encode into memory so callers control when files appear
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lumen_io::{read, write};
//!
//! let image = read("input.png").unwrap();
//! write("output.jpg", &image).unwrap();
//! ```
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)

#![warn(missing_docs)]

mod detect;
mod error;
mod traits;

#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png")]
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use traits::{ImageReader, ImageWriter};

use lumen_core::Image;
use std::path::Path;
use tracing::debug;

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}

/// Reads an image file, detecting the format from its content.
///
/// Falls back to the extension when the magic bytes are not recognized.
///
/// # Errors
///
/// - [`IoError::Io`] if the file cannot be opened
/// - [`IoError::UnsupportedFormat`] if neither content nor extension match
/// - [`IoError::DecodeError`] if the data is corrupt
#[allow(unreachable_patterns)]
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    debug!(path = %path.display(), %format, "Reading image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::read(path),

        _ => Err(unsupported(path)),
    }
}

/// Decodes an image held in memory, detecting the format from its content.
#[allow(unreachable_patterns)]
pub fn read_from_memory(data: &[u8]) -> IoResult<Image> {
    match Format::from_bytes(data) {
        #[cfg(feature = "png")]
        Format::Png => png::read_from_memory(data),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::JpegReader::new().read_from_memory(data),

        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

/// Encodes an image into memory.
///
/// `quality` (1-100) applies to JPEG and is ignored for PNG.
#[allow(unreachable_patterns)]
#[cfg_attr(not(feature = "jpeg"), allow(unused_variables))]
pub fn encode(format: Format, image: &Image, quality: u8) -> IoResult<Vec<u8>> {
    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write_to_memory(image),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::JpegWriter::with_options(jpeg::JpegWriterOptions {
            quality,
            ..Default::default()
        })
        .write_to_memory(image),

        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

/// Writes an image to a file, choosing the format from the extension.
#[allow(unreachable_patterns)]
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), width = image.width(), height = image.height(), "Writing image");

    match Format::from_extension(path) {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::write(path, image),

        _ => Err(unsupported(path)),
    }
}
