//! # lumen-view
//!
//! Comparison figure window for lumen.
//!
//! Shows a 3 x 2 grid: each processed image (original, logarithmic,
//! equalized) next to its 256-bin intensity histogram. Histograms are
//! labelled "Pixel Intensity" / "Frequency" and scaled to their tallest bin.
//!
//! # Quick Start
//!
//! ```ignore
//! use lumen_view::{run, Figure, ViewerConfig};
//!
//! let figure = Figure::comparison("lumen - photo.png", gray, log, equalized);
//! let exit_code = run(figure, ViewerConfig::default());
//! ```
//!
//! # Keyboard Shortcuts
//!
//! | Key | Action |
//! |-----|--------|
//! | `Esc` | Exit |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod app;
pub mod figure;

pub use app::{FigureApp, ViewerConfig};
pub use figure::{Figure, Panel, PanelContent};

use tracing::{debug, info, warn};

/// Run the figure viewer.
///
/// Creates an eframe window and blocks in the event loop until it closes.
///
/// # Returns
/// Exit code: 0 for success, 1 if the window could not be created
pub fn run(figure: Figure, config: ViewerConfig) -> i32 {
    let title = figure.title.clone();
    debug!(title = %title, panels = figure.panels.len(), "Starting viewer");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    let result = eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(FigureApp::new(cc, figure)))),
    );

    match result {
        Ok(()) => {
            info!("Viewer closed");
            0
        }
        Err(e) => {
            warn!("Viewer error: {e}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_config_default() {
        let config = ViewerConfig::default();
        assert!(config.inner_size[0] >= config.min_inner_size[0]);
        assert!(config.inner_size[1] >= config.min_inner_size[1]);
    }
}
