//! JPEG format support.
//!
//! Two ways in:
//!
//! 1. **Struct + trait**: [`JpegReader`] / [`JpegWriter`] implement
//!    [`ImageReader`] / [`ImageWriter`]; configure via [`JpegWriterOptions`].
//! 2. **Convenience functions**: [`read()`] and [`write()`] with defaults.
//!
//! Decoding always yields 8-bit RGB. Gray and CMYK sources are converted.
//!
//! # Example
//!
//! ```rust,no_run
//! use lumen_io::jpeg::{JpegWriter, JpegWriterOptions};
//! use lumen_io::ImageWriter;
//! # let image = lumen_core::Image::new(8, 8, 3).unwrap();
//!
//! let writer = JpegWriter::with_options(JpegWriterOptions {
//!     quality: 95,
//!     ..Default::default()
//! });
//! writer.write("highq.jpg", &image).unwrap();
//! ```

use crate::{ImageReader, ImageWriter, IoError, IoResult};
use lumen_core::{luma_bt601, Image};
use std::io::{BufReader, Cursor, Read};
use std::path::Path;
use tracing::trace;

/// JPEG output color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorType {
    /// Luma for single-channel images, RGB for three-channel images.
    #[default]
    Auto,
    /// Full color RGB output.
    Rgb,
    /// Grayscale output.
    Grayscale,
}

/// Options for writing JPEG files.
#[derive(Debug, Clone)]
pub struct JpegWriterOptions {
    /// Quality level 1-100. Higher = better quality, larger files.
    /// Default: 90.
    pub quality: u8,
    /// Output color mode. Default: [`ColorType::Auto`].
    pub color_type: ColorType,
}

impl Default for JpegWriterOptions {
    fn default() -> Self {
        Self { quality: 90, color_type: ColorType::Auto }
    }
}

/// JPEG file reader.
#[derive(Debug, Clone, Default)]
pub struct JpegReader;

impl JpegReader {
    /// Creates a new reader.
    pub fn new() -> Self {
        Self
    }

    fn read_impl<R: Read>(&self, reader: R) -> IoResult<Image> {
        let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(reader));
        let pixels = decoder.decode().map_err(|e| IoError::DecodeError(e.to_string()))?;

        let info = decoder
            .info()
            .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

        trace!(width = info.width, height = info.height, format = ?info.pixel_format, "jpeg::decode");

        let rgb: Vec<u8> = match info.pixel_format {
            jpeg_decoder::PixelFormat::RGB24 => pixels,
            jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g]).collect(),
            jpeg_decoder::PixelFormat::L16 => {
                // Big-endian samples; keep the high byte.
                pixels.chunks_exact(2).flat_map(|l| [l[0], l[0], l[0]]).collect()
            }
            jpeg_decoder::PixelFormat::CMYK32 => pixels
                .chunks_exact(4)
                .flat_map(|cmyk| {
                    let k = 1.0 - cmyk[3] as f32 / 255.0;
                    let ink = |v: u8| ((1.0 - v as f32 / 255.0) * k * 255.0).round() as u8;
                    [ink(cmyk[0]), ink(cmyk[1]), ink(cmyk[2])]
                })
                .collect(),
        };

        Ok(Image::rgb(info.width as u32, info.height as u32, rgb)?)
    }
}

impl ImageReader for JpegReader {
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<Image> {
        let data = std::fs::read(path.as_ref())?;
        self.read_impl(Cursor::new(data))
    }

    fn read_from_memory(&self, data: &[u8]) -> IoResult<Image> {
        self.read_impl(Cursor::new(data))
    }
}

/// JPEG file writer.
#[derive(Debug, Clone)]
pub struct JpegWriter {
    options: JpegWriterOptions,
}

impl JpegWriter {
    /// Creates a new writer with default options (quality 90).
    pub fn new() -> Self {
        Self::with_options(JpegWriterOptions::default())
    }

    /// Creates a writer with custom options.
    pub fn with_options(options: JpegWriterOptions) -> Self {
        Self { options }
    }

    fn write_impl(&self, image: &Image) -> IoResult<Vec<u8>> {
        use jpeg_encoder::{ColorType as JpegColorType, Encoder};

        let (width, height) = match (u16::try_from(image.width()), u16::try_from(image.height())) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
            _ => {
                return Err(IoError::EncodeError(format!(
                    "JPEG cannot store a {}x{} image",
                    image.width(),
                    image.height()
                )));
            }
        };

        let gray = match (self.options.color_type, image.channels()) {
            (ColorType::Auto, 1) | (ColorType::Grayscale, _) => true,
            (ColorType::Auto, 3) | (ColorType::Rgb, _) => false,
            (ColorType::Auto, n) => {
                return Err(IoError::EncodeError(format!("unsupported channel count: {}", n)));
            }
        };

        let (color_type, pixel_data): (JpegColorType, std::borrow::Cow<'_, [u8]>) =
            match (gray, image.channels()) {
                (true, 1) => (JpegColorType::Luma, image.as_slice().into()),
                (true, 3) => {
                    let luma = image
                        .pixels()
                        .map(|p| luma_bt601([p[0], p[1], p[2]]).round().clamp(0.0, 255.0) as u8)
                        .collect::<Vec<_>>();
                    (JpegColorType::Luma, luma.into())
                }
                (false, 3) => (JpegColorType::Rgb, image.as_slice().into()),
                (false, 1) => {
                    let rgb = image.as_slice().iter().flat_map(|&g| [g, g, g]).collect::<Vec<_>>();
                    (JpegColorType::Rgb, rgb.into())
                }
                (_, n) => {
                    return Err(IoError::EncodeError(format!("unsupported channel count: {}", n)));
                }
            };

        let mut buffer = Vec::new();
        let encoder = Encoder::new(&mut buffer, self.options.quality.clamp(1, 100));
        encoder
            .encode(&pixel_data, width, height, color_type)
            .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;

        Ok(buffer)
    }
}

impl Default for JpegWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for JpegWriter {
    fn write_to_memory(&self, image: &Image) -> IoResult<Vec<u8>> {
        self.write_impl(image)
    }
}

/// Reads a JPEG file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    JpegReader::new().read(path)
}

/// Writes a JPEG file with default options (quality 90).
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    JpegWriter::new().write(path, image)
}
