//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Image has no pixels.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Operation does not accept this channel count.
    #[error("unsupported channel count {channels} for {op}")]
    UnsupportedChannels {
        /// Operation name.
        op: &'static str,
        /// Channel count of the rejected image.
        channels: u32,
    },

    /// Buffer construction failed.
    #[error(transparent)]
    Core(#[from] lumen_core::Error),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;

/// Rejects images without pixels.
pub(crate) fn ensure_not_empty(image: &lumen_core::Image, op: &str) -> OpsResult<()> {
    if image.is_empty() {
        return Err(OpsError::InvalidDimensions(format!(
            "{op} needs at least one pixel, got {}x{}",
            image.width(),
            image.height()
        )));
    }
    Ok(())
}
