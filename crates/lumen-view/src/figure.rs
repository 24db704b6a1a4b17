//! Display-independent model of the comparison figure.
//!
//! A [`Figure`] is a 3 x 2 grid of [`Panel`]s. Each row pairs an image with
//! its intensity histogram. The geometry helpers here carry no egui types so
//! the layout can be checked without a window.

use lumen_core::Image;
use lumen_ops::histogram::{Histogram, BINS};

/// Grid rows.
pub const ROWS: usize = 3;
/// Grid columns.
pub const COLS: usize = 2;

/// Label under every histogram's x-axis.
pub const X_LABEL: &str = "Pixel Intensity";
/// Label beside every histogram's y-axis.
pub const Y_LABEL: &str = "Frequency";

/// What a panel draws.
#[derive(Debug, Clone)]
pub enum PanelContent {
    /// Single-channel image, drawn in gray.
    Image(Image),
    /// 256-bin intensity histogram.
    Histogram(Histogram),
}

/// One titled cell of the figure.
#[derive(Debug, Clone)]
pub struct Panel {
    /// Title drawn above the cell.
    pub title: String,
    /// Cell content.
    pub content: PanelContent,
}

impl Panel {
    /// Creates an image panel.
    pub fn image(title: impl Into<String>, image: Image) -> Self {
        Self { title: title.into(), content: PanelContent::Image(image) }
    }

    /// Creates a histogram panel.
    pub fn histogram(title: impl Into<String>, histogram: Histogram) -> Self {
        Self { title: title.into(), content: PanelContent::Histogram(histogram) }
    }
}

/// A titled grid of panels in row-major order.
#[derive(Debug, Clone)]
pub struct Figure {
    /// Window title.
    pub title: String,
    /// Panels, row-major, `ROWS * COLS` of them.
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Builds the original / log / equalized comparison.
    ///
    /// Every image must be single-channel. Each one is paired with its
    /// histogram on the same row.
    pub fn comparison(title: impl Into<String>, original: Image, log: Image, equalized: Image) -> Self {
        let rows = [
            ("Original Image", "Original Histogram", original),
            ("Logarithmic Transformation", "Logarithmic Histogram", log),
            ("Histogram Equalization", "Equalized Histogram", equalized),
        ];

        let panels = rows
            .into_iter()
            .flat_map(|(image_title, hist_title, image)| {
                let hist = Histogram::of_image(&image);
                [Panel::image(image_title, image), Panel::histogram(hist_title, hist)]
            })
            .collect();

        Self { title: title.into(), panels }
    }

    /// Panel titles, row-major.
    pub fn titles(&self) -> Vec<&str> {
        self.panels.iter().map(|p| p.title.as_str()).collect()
    }
}

/// Row and column of the `index`-th panel.
pub fn grid_cell(index: usize) -> (usize, usize) {
    (index / COLS, index % COLS)
}

/// Largest size with the aspect ratio of `image` that fits in `bounds`.
pub fn fit_size(image: [f32; 2], bounds: [f32; 2]) -> [f32; 2] {
    if image[0] <= 0.0 || image[1] <= 0.0 || bounds[0] <= 0.0 || bounds[1] <= 0.0 {
        return [0.0, 0.0];
    }
    let scale = (bounds[0] / image[0]).min(bounds[1] / image[1]);
    [image[0] * scale, image[1] * scale]
}

/// Bar heights as fractions of the tallest bin.
///
/// An empty histogram yields all zeros.
pub fn bar_heights(hist: &Histogram) -> [f32; BINS] {
    let mut heights = [0.0f32; BINS];
    let peak = hist.peak();
    if peak == 0 {
        return heights;
    }
    for (h, &count) in heights.iter_mut().zip(hist.bins.iter()) {
        *h = (count as f64 / peak as f64) as f32;
    }
    heights
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn gray(values: Vec<u8>) -> Image {
        Image::gray(values.len() as u32, 1, values).unwrap()
    }

    #[test]
    fn comparison_layout() {
        let fig = Figure::comparison(
            "lumen - test.png",
            gray(vec![0, 10, 20]),
            gray(vec![0, 128, 255]),
            gray(vec![85, 170, 255]),
        );
        assert_eq!(fig.panels.len(), ROWS * COLS);
        assert_eq!(
            fig.titles(),
            vec![
                "Original Image",
                "Original Histogram",
                "Logarithmic Transformation",
                "Logarithmic Histogram",
                "Histogram Equalization",
                "Equalized Histogram",
            ]
        );

        // Histogram sits next to the image it was computed from.
        match (&fig.panels[2].content, &fig.panels[3].content) {
            (PanelContent::Image(img), PanelContent::Histogram(hist)) => {
                assert_eq!(hist.total(), img.pixel_count() as u64);
                assert_eq!(hist.bins[128], 1);
            }
            _ => panic!("unexpected panel kinds"),
        }
    }

    #[test]
    fn grid_is_row_major() {
        assert_eq!(grid_cell(0), (0, 0));
        assert_eq!(grid_cell(1), (0, 1));
        assert_eq!(grid_cell(4), (2, 0));
        assert_eq!(grid_cell(5), (2, 1));
    }

    #[test]
    fn fit_keeps_aspect() {
        let [w, h] = fit_size([400.0, 200.0], [100.0, 100.0]);
        assert_relative_eq!(w, 100.0);
        assert_relative_eq!(h, 50.0);

        let [w, h] = fit_size([10.0, 40.0], [300.0, 200.0]);
        assert_relative_eq!(w, 50.0);
        assert_relative_eq!(h, 200.0);

        assert_eq!(fit_size([0.0, 10.0], [100.0, 100.0]), [0.0, 0.0]);
    }

    #[test]
    fn bars_scale_to_peak() {
        let hist = Histogram::from_samples(&[3, 3, 3, 3, 7, 7, 200]);
        let heights = bar_heights(&hist);
        assert_relative_eq!(heights[3], 1.0);
        assert_relative_eq!(heights[7], 0.5);
        assert_relative_eq!(heights[200], 0.25);
        assert_eq!(heights[0], 0.0);

        assert!(bar_heights(&Histogram::new()).iter().all(|&h| h == 0.0));
    }
}
