//! PNG format support.
//!
//! Every decoded PNG is normalized to 8-bit RGB: palettes are expanded,
//! 16-bit samples are reduced, gray is replicated and alpha is dropped.
//! Writing accepts gray or RGB images.

use crate::{IoError, IoResult};
use lumen_core::Image;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;
use tracing::trace;

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let file = std::fs::File::open(path.as_ref())?;
    decode(BufReader::new(file))
}

/// Reads a PNG from a byte slice.
pub fn read_from_memory(data: &[u8]) -> IoResult<Image> {
    decode(Cursor::new(data))
}

fn decode<R: BufRead + Seek>(source: R) -> IoResult<Image> {
    let mut decoder = png::Decoder::new(source);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    let samples = &buf[..info.buffer_size()];

    trace!(width = info.width, height = info.height, color = ?info.color_type, "png::decode");

    let rgb: Vec<u8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => samples.to_vec(),
        (png::ColorType::Rgba, png::BitDepth::Eight) => {
            samples.chunks_exact(4).flat_map(|p| [p[0], p[1], p[2]]).collect()
        }
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            samples.iter().flat_map(|&g| [g, g, g]).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            samples.chunks_exact(2).flat_map(|ga| [ga[0], ga[0], ga[0]]).collect()
        }
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!("{:?} {:?}", color_type, bit_depth)));
        }
    };

    Ok(Image::rgb(info.width, info.height, rgb)?)
}

/// Writes an image to a PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let data = write_to_memory(image)?;
    std::fs::write(path.as_ref(), data)?;
    Ok(())
}

/// Encodes an image as PNG into a byte vector.
pub fn write_to_memory(image: &Image) -> IoResult<Vec<u8>> {
    let color_type = match image.channels() {
        1 => png::ColorType::Grayscale,
        3 => png::ColorType::Rgb,
        n => return Err(IoError::EncodeError(format!("unsupported channel count: {}", n))),
    };

    let mut buffer = Vec::new();
    let mut encoder = png::Encoder::new(&mut buffer, image.width(), image.height());
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut writer = encoder.write_header().map_err(|e| IoError::EncodeError(e.to_string()))?;
    writer
        .write_image_data(image.as_slice())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    writer.finish().map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(buffer)
}
