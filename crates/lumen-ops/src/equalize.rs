//! Histogram equalization.
//!
//! - **Gray** images are remapped through the CDF lookup table of
//!   [`Histogram::equalization_lut`].
//! - **RGB** images are converted to YCrCb. Only the Y plane of that working
//!   copy is equalized, and the result is converted back. Cr and Cb are
//!   never touched, so hue and saturation survive up to conversion rounding.
//!
//! # Example
//!
//! ```rust
//! use lumen_core::Image;
//! use lumen_ops::equalize_hist;
//!
//! let flat = Image::filled(4, 4, 1, 128).unwrap();
//! let out = equalize_hist(&flat).unwrap();
//! assert!(out.as_slice().iter().all(|&v| v == 128));
//! ```

use lumen_core::Image;
use tracing::{debug, trace};

use crate::color::{rgb_to_ycrcb, ycrcb_to_rgb};
use crate::error::ensure_not_empty;
use crate::histogram::Histogram;
use crate::{OpsError, OpsResult};

/// Equalizes a plane of samples, returning the remapped plane.
pub fn equalize_plane(samples: &[u8]) -> Vec<u8> {
    let hist = Histogram::from_samples(samples);
    let lut = hist.equalization_lut();
    samples.iter().map(|&v| lut[v as usize]).collect()
}

/// Equalizes the Y channel of a YCrCb image in place.
///
/// Cr and Cb are left as they are.
pub fn equalize_luma(ycrcb: &mut Image) -> OpsResult<()> {
    if ycrcb.channels() != 3 {
        return Err(OpsError::UnsupportedChannels { op: "luma equalization", channels: ycrcb.channels() });
    }
    let luma = equalize_plane(&ycrcb.plane(0));
    ycrcb.set_plane(0, &luma)?;
    Ok(())
}

/// Equalizes the histogram of a gray or RGB image.
///
/// # Errors
///
/// - [`OpsError::UnsupportedChannels`] for anything but 1 or 3 channels
/// - [`OpsError::InvalidDimensions`] if `src` has no pixels
pub fn equalize_hist(src: &Image) -> OpsResult<Image> {
    trace!(width = src.width(), height = src.height(), channels = src.channels(), "equalize_hist");
    ensure_not_empty(src, "histogram equalization")?;

    match src.channels() {
        1 => {
            let data = equalize_plane(src.as_slice());
            Ok(Image::gray(src.width(), src.height(), data)?)
        }
        3 => {
            debug!("Equalizing luma of YCrCb working copy");
            let mut working = rgb_to_ycrcb(src)?;
            equalize_luma(&mut working)?;
            ycrcb_to_rgb(&working)
        }
        channels => Err(OpsError::UnsupportedChannels { op: "histogram equalization", channels }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_to_ycrcb_pixel;

    #[test]
    fn two_level_image() {
        let src = Image::gray(2, 2, vec![0, 0, 255, 255]).unwrap();
        let out = equalize_hist(&src).unwrap();
        assert_eq!(out.as_slice(), &[128, 128, 255, 255]);
    }

    #[test]
    fn constant_image_unchanged() {
        for v in [0u8, 1, 128, 254, 255] {
            let src = Image::filled(4, 4, 1, v).unwrap();
            let out = equalize_hist(&src).unwrap();
            assert!(out.as_slice().iter().all(|&x| x == v));
        }
    }

    #[test]
    fn spreads_narrow_range() {
        let data: Vec<u8> = (0..64).map(|i| 100 + (i % 8) as u8).collect();
        let src = Image::gray(8, 8, data).unwrap();
        let out = equalize_hist(&src).unwrap();
        let (lo, hi) = out.min_max().unwrap();
        assert_eq!(hi, 255);
        assert!(lo <= 32);
    }

    #[test]
    fn uneven_histogram() {
        let src = Image::gray(5, 1, vec![10, 10, 10, 20, 250]).unwrap();
        let out = equalize_hist(&src).unwrap();
        assert_eq!(out.as_slice(), &[153, 153, 153, 204, 255]);

        let src = Image::gray(4, 1, vec![0, 0, 0, 255]).unwrap();
        let out = equalize_hist(&src).unwrap();
        assert_eq!(out.as_slice(), &[191, 191, 191, 255]);
    }

    #[test]
    fn luma_equalization_keeps_chroma_planes() {
        let src = Image::rgb(2, 2, vec![
            40, 50, 60, 90, 80, 70, 120, 140, 100, 30, 30, 30,
        ])
        .unwrap();
        let mut working = rgb_to_ycrcb(&src).unwrap();
        let before = working.clone();
        equalize_luma(&mut working).unwrap();

        assert_eq!(working.plane(1), before.plane(1));
        assert_eq!(working.plane(2), before.plane(2));
        assert_ne!(working.plane(0), before.plane(0));
    }

    #[test]
    fn gray_rgb_stays_gray() {
        let data: Vec<u8> = [10u8, 60, 60, 200].iter().flat_map(|&v| [v, v, v]).collect();
        let src = Image::rgb(2, 2, data).unwrap();
        let out = equalize_hist(&src).unwrap();
        for px in out.pixels() {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
        assert_eq!(out.plane(0), vec![64, 191, 191, 255]);
    }

    #[test]
    fn color_chroma_survives_roundtrip() {
        // Brightest pixel stays neutral so the stretched luma never clips.
        let src = Image::rgb(2, 2, vec![
            60, 50, 40, 110, 100, 90, 140, 150, 160, 200, 200, 200,
        ])
        .unwrap();
        let out = equalize_hist(&src).unwrap();
        for (a, b) in src.pixels().zip(out.pixels()) {
            let before = rgb_to_ycrcb_pixel([a[0], a[1], a[2]]);
            let after = rgb_to_ycrcb_pixel([b[0], b[1], b[2]]);
            assert!((before[1] as i16 - after[1] as i16).abs() <= 1, "{before:?} vs {after:?}");
            assert!((before[2] as i16 - after[2] as i16).abs() <= 1, "{before:?} vs {after:?}");
        }
    }

    #[test]
    fn rejects_unsupported() {
        let rgba = Image::new(2, 2, 4).unwrap();
        assert!(matches!(
            equalize_hist(&rgba),
            Err(OpsError::UnsupportedChannels { channels: 4, .. })
        ));
        let empty = Image::new(0, 0, 1).unwrap();
        assert!(matches!(equalize_hist(&empty), Err(OpsError::InvalidDimensions(_))));
    }

    #[test]
    fn input_untouched() {
        let src = Image::rgb(1, 2, vec![10, 20, 30, 200, 100, 50]).unwrap();
        let copy = src.clone();
        let _ = equalize_hist(&src).unwrap();
        assert_eq!(src, copy);
    }
}
