//! Enhance command: log transform plus histogram equalization.
//!
//! Pipeline: decode, convert to gray, run both transforms, encode both
//! outputs in memory, write them, print the summary, show the figure.

use anyhow::{Context, Result, bail};
use lumen_core::Image;
use lumen_ops::{equalize_hist, log_transform, rgb_to_gray};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, trace, warn};

/// Fixed parameters of the enhance pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhanceConfig {
    /// Gain `c` of the log transform.
    pub gain: f32,
    /// JPEG quality of both outputs.
    pub quality: u8,
    /// Appended to the input stem for the log output.
    pub log_suffix: &'static str,
    /// Appended to the input stem for the equalized output.
    pub equalized_suffix: &'static str,
    /// Extension of both outputs.
    pub extension: &'static str,
}

impl EnhanceConfig {
    /// The configuration every run uses.
    pub const DEFAULT: Self = Self {
        gain: lumen_ops::DEFAULT_GAIN,
        quality: 95,
        log_suffix: "_log",
        equalized_suffix: "_hist_eq",
        extension: "jpg",
    };
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Where the two results are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Log-transformed image.
    pub log: PathBuf,
    /// Histogram-equalized image.
    pub equalized: PathBuf,
}

/// Gray input and both transform results.
#[derive(Debug, Clone)]
pub struct Enhanced {
    /// Gray version of the decoded input.
    pub gray: Image,
    /// Log-transformed gray image.
    pub log: Image,
    /// Histogram-equalized gray image.
    pub equalized: Image,
}

/// Derives output paths in `out_dir` from the input file stem.
///
/// The input's directory and extension are dropped: `in/photo.png` becomes
/// `<out_dir>/photo_log.jpg` and `<out_dir>/photo_hist_eq.jpg`.
pub fn output_paths(input: &Path, out_dir: &Path, config: &EnhanceConfig) -> Result<OutputPaths> {
    let Some(stem) = input.file_stem() else {
        bail!("Input path has no file name: {}", input.display());
    };

    let name = |suffix: &str| {
        let mut name = OsString::from(stem);
        name.push(suffix);
        name.push(".");
        name.push(config.extension);
        out_dir.join(name)
    };
    Ok(OutputPaths { log: name(config.log_suffix), equalized: name(config.equalized_suffix) })
}

/// Runs both transforms on the gray version of `image`.
///
/// The branches share nothing, so they run in parallel.
pub fn enhance(image: &Image, config: &EnhanceConfig) -> Result<Enhanced> {
    let gray = rgb_to_gray(image).context("Failed to convert to grayscale")?;
    debug!(width = gray.width(), height = gray.height(), "Converted to grayscale");

    let (log, equalized) = rayon::join(|| log_transform(&gray, config.gain), || equalize_hist(&gray));
    let log = log.context("Logarithmic transformation failed")?;
    let equalized = equalized.context("Histogram equalization failed")?;

    Ok(Enhanced { gray, log, equalized })
}

/// Writes `bytes` to a hidden temporary file next to `target`.
fn stage(target: &Path, bytes: &[u8]) -> Result<NamedTempFile> {
    let dir = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = tempfile::Builder::new()
        .prefix(".lumen-")
        .suffix(".part")
        .tempfile_in(dir)
        .with_context(|| format!("Failed to save: {}", target.display()))?;

    file.write_all(bytes)
        .and_then(|()| file.as_file().sync_all())
        .with_context(|| format!("Failed to save: {}", target.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .with_context(|| format!("Failed to save: {}", target.display()))?;
    }

    Ok(file)
}

/// Removes an output that must not outlive a failed run.
fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %e, "Could not remove partial output");
    }
}

/// Writes both results, or neither.
///
/// Both images are encoded and written to temporary files first. The final
/// names only appear once both temporaries are complete. If renaming the
/// second one fails, the first output is removed again.
pub fn write_outputs(enhanced: &Enhanced, paths: &OutputPaths, config: &EnhanceConfig) -> Result<()> {
    let log_bytes = super::encode_jpeg(&enhanced.log, config.quality, "logarithmic result")?;
    let equalized_bytes = super::encode_jpeg(&enhanced.equalized, config.quality, "equalized result")?;

    // Unpersisted temporaries delete themselves on drop.
    let log_tmp = stage(&paths.log, &log_bytes)?;
    let equalized_tmp = stage(&paths.equalized, &equalized_bytes)?;

    log_tmp
        .persist(&paths.log)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to save: {}", paths.log.display()))?;

    if let Err(e) = equalized_tmp.persist(&paths.equalized) {
        discard(&paths.log);
        return Err(e.error).with_context(|| format!("Failed to save: {}", paths.equalized.display()));
    }

    info!(log = %paths.log.display(), equalized = %paths.equalized.display(), "Saved results");
    Ok(())
}

/// Loads `input`, enhances it and writes both results into `out_dir`.
pub fn process(input: &Path, out_dir: &Path, config: &EnhanceConfig) -> Result<(Enhanced, OutputPaths)> {
    trace!(input = %input.display(), out_dir = %out_dir.display(), "enhance::process");

    let paths = output_paths(input, out_dir, config)?;
    let image = super::load_image(input)?;
    info!(
        input = %input.display(),
        width = image.width(),
        height = image.height(),
        "Enhancing image"
    );

    let enhanced = enhance(&image, config)?;
    write_outputs(&enhanced, &paths, config)?;
    Ok((enhanced, paths))
}

/// Text printed after a successful run.
pub fn summary(config: &EnhanceConfig) -> String {
    format!(
        "Transformation Functions:\n\
         1. Logarithmic Transformation: s = c * log(1 + r), with c = {} (chosen to enhance dark regions).\n\
         2. Histogram Equalization: redistributes pixel intensities to cover the full range [0, 255].",
        config.gain
    )
}

/// Runs the full pipeline on `input`, writing into the working directory.
pub fn run(input: &Path) -> Result<()> {
    let config = EnhanceConfig::DEFAULT;
    let out_dir = std::env::current_dir().context("Could not determine working directory")?;

    let (enhanced, _) = process(input, &out_dir, &config)?;
    println!("{}", summary(&config));

    show_figure(input, enhanced);
    Ok(())
}

#[cfg(feature = "viewer")]
fn show_figure(input: &Path, enhanced: Enhanced) {
    let title = format!("lumen - {}", super::display_name(input));
    let figure = lumen_view::Figure::comparison(title, enhanced.gray, enhanced.log, enhanced.equalized);

    if lumen_view::run(figure, lumen_view::ViewerConfig::default()) != 0 {
        tracing::warn!("Could not display the comparison figure; results were saved");
    }
}

#[cfg(not(feature = "viewer"))]
fn show_figure(input: &Path, _enhanced: Enhanced) {
    info!(input = %super::display_name(input), "Display disabled; built without the viewer feature");
}
