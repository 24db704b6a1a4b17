//! 256-bin intensity histogram.
//!
//! [`Histogram`] counts every 8-bit value of a sample plane. Its cumulative
//! distribution drives histogram equalization:
//!
//! ```text
//! O(r) = round(255 * CDF(r) / N)
//! ```
//!
//! where `CDF(r)` counts the samples `<= r` and `N` is the sample count.

use lumen_core::Image;

/// Number of bins, one per 8-bit intensity.
pub const BINS: usize = 256;

/// Histogram of 8-bit samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    /// Count per intensity.
    pub bins: [u64; BINS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self { bins: [0; BINS] }
    }
}

impl Histogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every value in `samples`.
    pub fn from_samples(samples: &[u8]) -> Self {
        let mut hist = Self::new();
        for &v in samples {
            hist.bins[v as usize] += 1;
        }
        hist
    }

    /// Counts every sample of `image`, across all channels.
    ///
    /// For a single-channel image the total equals `width * height`.
    pub fn of_image(image: &Image) -> Self {
        Self::from_samples(image.as_slice())
    }

    /// Total number of samples.
    pub fn total(&self) -> u64 {
        self.bins.iter().sum()
    }

    /// Tallest bin count.
    pub fn peak(&self) -> u64 {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    /// Running sum of bin counts, inclusive.
    pub fn cdf(&self) -> [u64; BINS] {
        let mut cdf = [0u64; BINS];
        let mut sum = 0u64;
        for (out, &count) in cdf.iter_mut().zip(self.bins.iter()) {
            sum += count;
            *out = sum;
        }
        cdf
    }

    /// The only intensity present, if exactly one distinct value was counted.
    pub fn single_value(&self) -> Option<u8> {
        let mut occupied = self.bins.iter().enumerate().filter(|(_, c)| **c > 0);
        let (value, _) = occupied.next()?;
        match occupied.next() {
            None => Some(value as u8),
            Some(_) => None,
        }
    }

    /// Builds the equalization lookup table.
    ///
    /// `lut[r] = round(255 * CDF(r) / N)` with exact integer round-half-up.
    /// A histogram holding a single intensity `k` yields the identity table,
    /// so `k` maps to itself. An empty histogram also yields the identity.
    pub fn equalization_lut(&self) -> [u8; BINS] {
        let mut lut = [0u8; BINS];
        let total = self.total();
        if total == 0 || self.single_value().is_some() {
            for (i, v) in lut.iter_mut().enumerate() {
                *v = i as u8;
            }
            return lut;
        }

        for (out, cum) in lut.iter_mut().zip(self.cdf()) {
            let scaled = (2 * 255 * cum as u128 + total as u128) / (2 * total as u128);
            *out = scaled.min(255) as u8;
        }
        lut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_pixel_count() {
        let img = Image::gray(3, 2, vec![0, 1, 1, 255, 255, 255]).unwrap();
        let hist = Histogram::of_image(&img);
        assert_eq!(hist.total(), 6);
        assert_eq!(hist.bins[0], 1);
        assert_eq!(hist.bins[1], 2);
        assert_eq!(hist.bins[255], 3);
        assert_eq!(hist.peak(), 3);
    }

    #[test]
    fn cdf_is_cumulative() {
        let hist = Histogram::from_samples(&[2, 2, 5, 9]);
        let cdf = hist.cdf();
        assert_eq!(cdf[0], 0);
        assert_eq!(cdf[1], 0);
        assert_eq!(cdf[2], 2);
        assert_eq!(cdf[4], 2);
        assert_eq!(cdf[5], 3);
        assert_eq!(cdf[9], 4);
        assert_eq!(cdf[255], 4);
    }

    #[test]
    fn single_value_detection() {
        assert_eq!(Histogram::from_samples(&[7, 7, 7]).single_value(), Some(7));
        assert_eq!(Histogram::from_samples(&[7, 8]).single_value(), None);
        assert_eq!(Histogram::new().single_value(), None);
    }

    #[test]
    fn lut_follows_formula() {
        // 4 samples: CDF(10) = 1, CDF(20) = 2, CDF(30) = 4
        let lut = Histogram::from_samples(&[10, 20, 30, 30]).equalization_lut();
        assert_eq!(lut[10], 64); // 63.75
        assert_eq!(lut[20], 128); // 127.5 rounds up
        assert_eq!(lut[30], 255);
        assert_eq!(lut[0], 0);
        assert_eq!(lut[15], 64);
        assert_eq!(lut[200], 255);
    }

    #[test]
    fn lut_is_monotonic() {
        let samples: Vec<u8> = (0..1000u32).map(|i| ((i * 37) % 251) as u8).collect();
        let lut = Histogram::from_samples(&samples).equalization_lut();
        assert!(lut.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(lut[255], 255);
    }

    #[test]
    fn single_value_lut_is_identity() {
        let lut = Histogram::from_samples(&[128; 16]).equalization_lut();
        assert_eq!(lut[128], 128);
        assert_eq!(lut[0], 0);
        assert_eq!(lut[255], 255);
    }
}
