//! Logarithmic intensity transform.
//!
//! `s = c * ln(1 + r)` expands dark intensities and compresses bright ones.
//! The intermediate values are min-max normalized back onto `[0, 255]`.
//! Normalization removes any global scale, so apart from floating-point
//! rounding the gain `c` does not affect the 8-bit result.
//!
//! # Steps
//!
//! 1. Widen each sample `r` to `f32`
//! 2. `v = c * ln_1p(r)` ([`log_intensity`])
//! 3. [`Range::min_max_u8`] over `v`, rounded to nearest
//!
//! A constant image has an empty input range and maps to all zeros.
//!
//! # Example
//!
//! ```rust
//! use lumen_core::Image;
//! use lumen_ops::log_op::log_transform;
//!
//! let src = Image::gray(4, 1, vec![0, 3, 63, 255]).unwrap();
//! let out = log_transform(&src, 30.0).unwrap();
//! // ln(4)/ln(256) = 0.25, ln(64)/ln(256) = 0.75
//! assert_eq!(out.as_slice(), &[0, 64, 191, 255]);
//! ```

use lumen_core::Image;
use tracing::{debug, trace};

use crate::error::ensure_not_empty;
use crate::range::Range;
use crate::{OpsError, OpsResult};

/// Default gain `c`.
pub const DEFAULT_GAIN: f32 = 30.0;

fn check_input(src: &Image, gain: f32) -> OpsResult<()> {
    if !src.is_gray() {
        return Err(OpsError::UnsupportedChannels { op: "log transform", channels: src.channels() });
    }
    if !gain.is_finite() || gain <= 0.0 {
        return Err(OpsError::InvalidParameter(format!("log gain must be positive and finite, got {gain}")));
    }
    ensure_not_empty(src, "log transform")
}

/// Computes the unnormalized `c * ln(1 + r)` for every sample.
///
/// # Errors
///
/// Same as [`log_transform`].
pub fn log_intensity(src: &Image, gain: f32) -> OpsResult<Vec<f32>> {
    check_input(src, gain)?;
    Ok(src.as_slice().iter().map(|&r| gain * (r as f32).ln_1p()).collect())
}

/// Applies the logarithmic transform to a single-channel image.
///
/// # Errors
///
/// - [`OpsError::UnsupportedChannels`] if `src` is not single-channel
/// - [`OpsError::InvalidParameter`] if `gain` is not positive and finite
/// - [`OpsError::InvalidDimensions`] if `src` has no pixels
pub fn log_transform(src: &Image, gain: f32) -> OpsResult<Image> {
    trace!(width = src.width(), height = src.height(), gain, "log_transform");

    let values = log_intensity(src, gain)?;
    let range = Range::min_max_u8(&values)
        .ok_or_else(|| OpsError::InvalidDimensions("log transform produced no values".into()))?;

    debug!(min = range.min_in, max = range.max_in, scale = range.scale(), "Log normalization range");

    let out = Image::gray(src.width(), src.height(), range.apply_all_u8(&values))?;
    Ok(out)
}
