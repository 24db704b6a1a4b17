//! Color conversions for 8-bit RGB images.
//!
//! - [`rgb_to_gray`] - BT.601 luma
//! - [`rgb_to_ycrcb`] / [`ycrcb_to_rgb`] - luma/chroma split used by the
//!   color path of histogram equalization
//!
//! Forward:
//!
//! ```text
//! Y  = 0.299 R + 0.587 G + 0.114 B
//! Cr = (R - Y) * 0.713 + 128
//! Cb = (B - Y) * 0.564 + 128
//! ```
//!
//! Inverse:
//!
//! ```text
//! R = Y + 1.403 (Cr - 128)
//! G = Y - 0.714 (Cr - 128) - 0.344 (Cb - 128)
//! B = Y + 1.773 (Cb - 128)
//! ```
//!
//! Every result is rounded to nearest and clamped to `[0, 255]`.

use lumen_core::{luma_bt601, Image};

use crate::{OpsError, OpsResult};

const CR_SCALE: f32 = 0.713;
const CB_SCALE: f32 = 0.564;
const CHROMA_OFFSET: f32 = 128.0;

const R_FROM_CR: f32 = 1.403;
const G_FROM_CR: f32 = 0.714;
const G_FROM_CB: f32 = 0.344;
const B_FROM_CB: f32 = 1.773;

#[inline]
fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn require_rgb(src: &Image, op: &'static str) -> OpsResult<()> {
    if src.channels() != 3 {
        return Err(OpsError::UnsupportedChannels { op, channels: src.channels() });
    }
    Ok(())
}

/// Converts an RGB image to single-channel BT.601 luma.
///
/// A single-channel input is returned as a copy.
///
/// # Example
///
/// ```rust
/// use lumen_core::Image;
/// use lumen_ops::rgb_to_gray;
///
/// let rgb = Image::rgb(2, 1, vec![255, 255, 255, 255, 0, 0]).unwrap();
/// let gray = rgb_to_gray(&rgb).unwrap();
/// assert_eq!(gray.as_slice(), &[255, 76]);
/// ```
pub fn rgb_to_gray(src: &Image) -> OpsResult<Image> {
    if src.is_gray() {
        return Ok(src.clone());
    }
    require_rgb(src, "gray conversion")?;
    let data = src.pixels().map(|px| to_u8(luma_bt601([px[0], px[1], px[2]]))).collect();
    Ok(Image::gray(src.width(), src.height(), data)?)
}

/// Converts one RGB triple to `[Y, Cr, Cb]`.
#[inline]
pub fn rgb_to_ycrcb_pixel(rgb: [u8; 3]) -> [u8; 3] {
    let y = luma_bt601(rgb);
    let cr = (rgb[0] as f32 - y) * CR_SCALE + CHROMA_OFFSET;
    let cb = (rgb[2] as f32 - y) * CB_SCALE + CHROMA_OFFSET;
    [to_u8(y), to_u8(cr), to_u8(cb)]
}

/// Converts one `[Y, Cr, Cb]` triple to RGB.
#[inline]
pub fn ycrcb_to_rgb_pixel(ycc: [u8; 3]) -> [u8; 3] {
    let y = ycc[0] as f32;
    let cr = ycc[1] as f32 - CHROMA_OFFSET;
    let cb = ycc[2] as f32 - CHROMA_OFFSET;
    [
        to_u8(y + R_FROM_CR * cr),
        to_u8(y - G_FROM_CR * cr - G_FROM_CB * cb),
        to_u8(y + B_FROM_CB * cb),
    ]
}

fn map_pixels(src: &Image, f: fn([u8; 3]) -> [u8; 3]) -> OpsResult<Image> {
    let mut out = src.clone();
    for px in out.pixels_mut() {
        let [a, b, c] = f([px[0], px[1], px[2]]);
        px[0] = a;
        px[1] = b;
        px[2] = c;
    }
    Ok(out)
}

/// Converts an RGB image to YCrCb (channel order Y, Cr, Cb).
pub fn rgb_to_ycrcb(src: &Image) -> OpsResult<Image> {
    require_rgb(src, "YCrCb conversion")?;
    map_pixels(src, rgb_to_ycrcb_pixel)
}

/// Converts a YCrCb image (channel order Y, Cr, Cb) back to RGB.
pub fn ycrcb_to_rgb(src: &Image) -> OpsResult<Image> {
    require_rgb(src, "RGB conversion")?;
    map_pixels(src, ycrcb_to_rgb_pixel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_of_primaries() {
        let rgb = Image::rgb(3, 1, vec![255, 0, 0, 0, 255, 0, 0, 0, 255]).unwrap();
        let gray = rgb_to_gray(&rgb).unwrap();
        assert!(gray.is_gray());
        assert_eq!(gray.as_slice(), &[76, 150, 29]);
    }

    #[test]
    fn gray_passthrough() {
        let g = Image::gray(2, 1, vec![5, 6]).unwrap();
        assert_eq!(rgb_to_gray(&g).unwrap(), g);
    }

    #[test]
    fn neutral_has_centered_chroma() {
        for v in [0u8, 17, 128, 200, 255] {
            assert_eq!(rgb_to_ycrcb_pixel([v, v, v]), [v, 128, 128]);
            assert_eq!(ycrcb_to_rgb_pixel([v, 128, 128]), [v, v, v]);
        }
    }

    #[test]
    fn roundtrip_within_one() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let rgb = [r as u8, g as u8, b as u8];
                    let back = ycrcb_to_rgb_pixel(rgb_to_ycrcb_pixel(rgb));
                    for c in 0..3 {
                        let diff = (back[c] as i16 - rgb[c] as i16).abs();
                        assert!(diff <= 2, "{rgb:?} -> {back:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn channel_checks() {
        let gray = Image::new(2, 2, 1).unwrap();
        assert!(matches!(
            rgb_to_ycrcb(&gray),
            Err(OpsError::UnsupportedChannels { channels: 1, .. })
        ));
        let rgba = Image::new(2, 2, 4).unwrap();
        assert!(rgb_to_gray(&rgba).is_err());
        assert!(ycrcb_to_rgb(&rgba).is_err());
    }
}
