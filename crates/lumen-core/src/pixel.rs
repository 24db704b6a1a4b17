//! Luma coefficients.
//!
//! Gray conversion and the YCrCb working space both use the ITU-R BT.601
//! weights: `Y = 0.299*R + 0.587*G + 0.114*B`.

/// BT.601 luma coefficient for the red channel.
pub const BT601_LUMA_R: f32 = 0.299;

/// BT.601 luma coefficient for the green channel.
pub const BT601_LUMA_G: f32 = 0.587;

/// BT.601 luma coefficient for the blue channel.
pub const BT601_LUMA_B: f32 = 0.114;

/// BT.601 luma coefficients as an array [R, G, B].
pub const BT601_LUMA: [f32; 3] = [BT601_LUMA_R, BT601_LUMA_G, BT601_LUMA_B];

/// Unrounded BT.601 luma of an 8-bit RGB triple, in `[0, 255]`.
///
/// # Example
///
/// ```
/// use lumen_core::luma_bt601;
///
/// assert!((luma_bt601([255, 255, 255]) - 255.0).abs() < 1e-3);
/// assert_eq!(luma_bt601([0, 0, 0]), 0.0);
/// ```
#[inline]
pub fn luma_bt601(rgb: [u8; 3]) -> f32 {
    rgb[0] as f32 * BT601_LUMA_R + rgb[1] as f32 * BT601_LUMA_G + rgb[2] as f32 * BT601_LUMA_B
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn coefficients_sum_to_one() {
        let sum: f32 = BT601_LUMA.iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn green_dominates() {
        assert!(luma_bt601([0, 255, 0]) > luma_bt601([255, 0, 0]));
        assert!(luma_bt601([255, 0, 0]) > luma_bt601([0, 0, 255]));
    }
}
