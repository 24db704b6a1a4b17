//! Range operation for min-max normalization.
//!
//! A [`Range`] remaps `[min_in, max_in]` linearly onto `[min_out, max_out]`
//! and clamps the result to the output bounds.
//!
//! When the input range is empty (`min_in == max_in`) the scale is zero and
//! every value lands on `min_out`. A constant log image therefore
//! normalizes to all zeros.
//!
//! # Example
//!
//! ```rust
//! use lumen_ops::range::Range;
//!
//! let range = Range::new(2.0, 6.0, 0.0, 255.0);
//! assert_eq!(range.apply(2.0), 0.0);
//! assert_eq!(range.apply(4.0), 127.5);
//! assert_eq!(range.apply(6.0), 255.0);
//!
//! let flat = Range::new(3.0, 3.0, 0.0, 255.0);
//! assert_eq!(flat.apply(3.0), 0.0);
//! ```

/// Linear remapping parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Input value mapped to `min_out`.
    pub min_in: f64,
    /// Input value mapped to `max_out`.
    pub max_in: f64,
    /// Lower output bound.
    pub min_out: f64,
    /// Upper output bound.
    pub max_out: f64,
}

impl Range {
    /// Creates a remapping from `[min_in, max_in]` to `[min_out, max_out]`.
    pub fn new(min_in: f64, max_in: f64, min_out: f64, max_out: f64) -> Self {
        Self { min_in, max_in, min_out, max_out }
    }

    /// Creates the min-max normalization of `values` onto `[0, 255]`.
    ///
    /// Returns `None` for an empty slice. NaN values are skipped.
    pub fn min_max_u8(values: &[f32]) -> Option<Self> {
        let (lo, hi) = values
            .iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc: Option<(f32, f32)>, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;
        Some(Self::new(lo as f64, hi as f64, 0.0, 255.0))
    }

    /// Width of the input interval.
    #[inline]
    pub fn input_span(&self) -> f64 {
        self.max_in - self.min_in
    }

    /// Scale factor applied after subtracting `min_in`.
    ///
    /// Zero when the input interval is empty.
    pub fn scale(&self) -> f64 {
        let span = self.input_span();
        if span.abs() < f64::EPSILON {
            0.0
        } else {
            (self.max_out - self.min_out) / span
        }
    }

    /// Remaps one value and clamps it to the output bounds.
    ///
    /// The fraction `(v - min_in) / span` is formed first, so `max_in`
    /// lands exactly on `max_out`.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        let span = self.input_span();
        let out = if span.abs() < f64::EPSILON {
            self.min_out
        } else {
            self.min_out + (value - self.min_in) / span * (self.max_out - self.min_out)
        };
        if out.is_nan() {
            return self.min_out;
        }
        out.clamp(self.min_out, self.max_out)
    }

    /// Remaps one value and rounds it to the nearest `u8`.
    #[inline]
    pub fn apply_u8(&self, value: f64) -> u8 {
        self.apply(value).round().clamp(0.0, 255.0) as u8
    }

    /// Remaps a slice of `f32` values into 8-bit samples.
    pub fn apply_all_u8(&self, values: &[f32]) -> Vec<u8> {
        values.iter().map(|&v| self.apply_u8(v as f64)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_are_exact() {
        let r = Range::new(0.0, 5.545_177, 0.0, 255.0);
        assert_eq!(r.apply(0.0), 0.0);
        assert_eq!(r.apply(5.545_177), 255.0);
        assert_eq!(r.apply_u8(5.545_177), 255);
    }

    #[test]
    fn midpoint() {
        let r = Range::new(10.0, 20.0, 0.0, 100.0);
        assert_relative_eq!(r.apply(15.0), 50.0);
        assert_relative_eq!(r.scale(), 10.0);
    }

    #[test]
    fn clamps_outside_input() {
        let r = Range::new(0.0, 1.0, 0.0, 255.0);
        assert_eq!(r.apply(-1.0), 0.0);
        assert_eq!(r.apply(2.0), 255.0);
        assert_eq!(r.apply(f64::NAN), 0.0);
    }

    #[test]
    fn zero_span_maps_to_min_out() {
        let r = Range::new(4.0, 4.0, 0.0, 255.0);
        assert_eq!(r.scale(), 0.0);
        assert_eq!(r.apply(4.0), 0.0);
        assert_eq!(r.apply_all_u8(&[4.0, 4.0]), vec![0, 0]);
    }

    #[test]
    fn min_max_from_values() {
        let r = Range::min_max_u8(&[3.0, f32::NAN, -1.0, 7.5]).unwrap();
        assert_eq!(r.min_in, -1.0);
        assert_eq!(r.max_in, 7.5);
        assert!(Range::min_max_u8(&[]).is_none());
    }

    #[test]
    fn rounding_is_to_nearest() {
        let r = Range::new(0.0, 2.0, 0.0, 255.0);
        // 0.5 / 2 * 255 = 63.75
        assert_eq!(r.apply_u8(0.5), 64);
        // 1 / 2 * 255 = 127.5
        assert_eq!(r.apply_u8(1.0), 128);
    }
}
