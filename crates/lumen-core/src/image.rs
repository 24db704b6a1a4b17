//! 8-bit image buffer.
//!
//! [`Image`] stores samples in **row-major** order, top-to-bottom, with
//! channels interleaved:
//!
//! ```text
//! gray:  [Y Y Y Y ...]          ← Row 0
//! color: [R G B R G B ...]      ← Row 0
//!        [R G B R G B ...]      ← Row 1
//! ```
//!
//! The buffer does not track a color space. A 3-channel image is RGB when
//! it comes from `lumen-io`, and YCrCb inside the equalizer's working copy.
//!
//! # Usage
//!
//! ```rust
//! use lumen_core::Image;
//!
//! let img = Image::gray(2, 2, vec![0, 0, 255, 255]).unwrap();
//! assert!(img.is_gray());
//! assert_eq!(img.sample(1, 1, 0), 255);
//! ```

use crate::{Error, Result};

/// Owned 8-bit image, `height × width × channels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    channels: u32,
    data: Vec<u8>,
}

impl Image {
    /// Creates a zero-filled image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when `channels` is zero.
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self> {
        let len = Self::expected_len(width, height, channels)?;
        Ok(Self { width, height, channels, data: vec![0; len] })
    }

    /// Creates an image from existing samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len() != width * height * channels`,
    /// or [`Error::InvalidDimensions`] when `channels` is zero.
    pub fn from_vec(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::expected_len(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::BufferSize { expected, actual: data.len() });
        }
        Ok(Self { width, height, channels, data })
    }

    /// Creates a single-channel image.
    pub fn gray(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::from_vec(width, height, 1, data)
    }

    /// Creates a 3-channel image.
    pub fn rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::from_vec(width, height, 3, data)
    }

    /// Creates an image with every sample set to `value`.
    pub fn filled(width: u32, height: u32, channels: u32, value: u8) -> Result<Self> {
        let len = Self::expected_len(width, height, channels)?;
        Ok(Self { width, height, channels, data: vec![value; len] })
    }

    fn expected_len(width: u32, height: u32, channels: u32) -> Result<usize> {
        if channels == 0 {
            return Err(Error::invalid_dimensions(width, height, channels, "zero channels"));
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels as usize))
            .ok_or_else(|| Error::invalid_dimensions(width, height, channels, "size overflows"))
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Samples per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// `true` for single-channel images.
    #[inline]
    pub fn is_gray(&self) -> bool {
        self.channels == 1
    }

    /// `true` when the image holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if `other` has the same width, height and channel count.
    pub fn same_shape(&self, other: &Image) -> bool {
        self.width == other.width && self.height == other.height && self.channels == other.channels
    }

    /// Raw interleaved samples.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Iterates over pixels as channel slices.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.channels as usize)
    }

    /// Iterates mutably over pixels as channel slices.
    pub fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(self.channels as usize)
    }

    /// Returns one sample.
    ///
    /// # Panics
    ///
    /// Panics if `x`, `y` or `c` is out of range.
    #[inline]
    pub fn sample(&self, x: u32, y: u32, c: u32) -> u8 {
        assert!(x < self.width && y < self.height && c < self.channels);
        self.data[self.index(x, y, c)]
    }

    #[inline]
    fn index(&self, x: u32, y: u32, c: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels as usize + c as usize
    }

    /// Copies one channel out as a plane of `width * height` samples.
    ///
    /// # Panics
    ///
    /// Panics if `c >= channels`.
    pub fn plane(&self, c: u32) -> Vec<u8> {
        assert!(c < self.channels, "channel {c} out of range");
        self.pixels().map(|px| px[c as usize]).collect()
    }

    /// Overwrites one channel from a plane of `width * height` samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if the plane length is wrong.
    ///
    /// # Panics
    ///
    /// Panics if `c >= channels`.
    pub fn set_plane(&mut self, c: u32, plane: &[u8]) -> Result<()> {
        assert!(c < self.channels, "channel {c} out of range");
        if plane.len() != self.pixel_count() {
            return Err(Error::BufferSize { expected: self.pixel_count(), actual: plane.len() });
        }
        let c = c as usize;
        for (px, &v) in self.pixels_mut().zip(plane) {
            px[c] = v;
        }
        Ok(())
    }

    /// Minimum and maximum sample, or `None` for an empty image.
    pub fn min_max(&self) -> Option<(u8, u8)> {
        let first = *self.data.first()?;
        Some(self.data.iter().fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_checks_length() {
        assert!(Image::from_vec(4, 3, 3, vec![0; 36]).is_ok());
        let err = Image::from_vec(4, 3, 3, vec![0; 35]).unwrap_err();
        assert!(matches!(err, Error::BufferSize { expected: 36, actual: 35 }));
    }

    #[test]
    fn zero_channels_rejected() {
        assert!(matches!(Image::new(2, 2, 0), Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn empty_image_is_allowed() {
        let img = Image::new(0, 0, 1).unwrap();
        assert!(img.is_empty());
        assert_eq!(img.min_max(), None);
    }

    #[test]
    fn sample_addressing_is_row_major() {
        let img = Image::rgb(2, 2, (0..12).collect()).unwrap();
        assert_eq!(img.sample(0, 0, 0), 0);
        assert_eq!(img.sample(1, 0, 2), 5);
        assert_eq!(img.sample(0, 1, 1), 7);
        assert_eq!(img.sample(1, 1, 2), 11);
    }

    #[test]
    fn plane_roundtrip() {
        let mut img = Image::rgb(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(img.plane(1), vec![2, 5]);

        img.set_plane(1, &[20, 50]).unwrap();
        assert_eq!(img.as_slice(), &[1, 20, 3, 4, 50, 6]);
        assert!(img.set_plane(0, &[1, 2, 3]).is_err());
    }

    #[test]
    fn min_max_and_shape() {
        let a = Image::gray(3, 1, vec![9, 3, 200]).unwrap();
        assert_eq!(a.min_max(), Some((3, 200)));

        let b = Image::filled(3, 1, 1, 7).unwrap();
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&Image::new(1, 3, 1).unwrap()));
    }
}
