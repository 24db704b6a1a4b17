//! Error types for lumen-core.
//!
//! # Usage
//!
//! ```rust
//! use lumen_core::{Error, Image};
//!
//! let err = Image::from_vec(2, 2, 1, vec![0; 3]).unwrap_err();
//! assert!(matches!(err, Error::BufferSize { expected: 4, actual: 3 }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or addressing an image buffer.
#[derive(Debug, Error)]
pub enum Error {
    /// Width, height or channel count is unusable.
    #[error("invalid dimensions {width}x{height}x{channels}: {reason}")]
    InvalidDimensions {
        /// Image width
        width: u32,
        /// Image height
        height: u32,
        /// Channel count
        channels: u32,
        /// Why the dimensions were rejected
        reason: String,
    },

    /// Sample buffer length does not match `width * height * channels`.
    #[error("buffer holds {actual} samples, expected {expected}")]
    BufferSize {
        /// Required number of samples
        expected: usize,
        /// Number of samples supplied
        actual: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`].
    pub fn invalid_dimensions(
        width: u32,
        height: u32,
        channels: u32,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            channels,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_dimensions() {
        let err = Error::invalid_dimensions(3, 4, 2, "two channels");
        let msg = err.to_string();
        assert!(msg.contains("3x4x2"));
        assert!(msg.contains("two channels"));
    }

    #[test]
    fn display_buffer_size() {
        let err = Error::BufferSize { expected: 12, actual: 10 };
        assert_eq!(err.to_string(), "buffer holds 10 samples, expected 12");
    }
}
