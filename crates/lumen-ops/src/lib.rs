//! # lumen-ops
//!
//! Grayscale contrast-enhancement operations.
//!
//! # Modules
//!
//! - [`log_op`] - Logarithmic intensity mapping `s = c * ln(1 + r)`
//! - [`range`] - Linear min-max remapping to the 8-bit range
//! - [`histogram`] - 256-bin histogram, cumulative distribution, equalization LUT
//! - [`equalize`] - Histogram equalization (gray, or luma-only for RGB)
//! - [`color`] - RGB to gray and RGB ↔ YCrCb conversion
//!
//! Every operation is a pure function: it borrows its input and returns a
//! fresh [`Image`](lumen_core::Image) of the same dimensions.
//!
//! # Example
//!
//! ```rust
//! use lumen_core::Image;
//! use lumen_ops::{equalize_hist, log_transform, DEFAULT_GAIN};
//!
//! let gray = Image::gray(2, 2, vec![0, 0, 255, 255]).unwrap();
//!
//! let log = log_transform(&gray, DEFAULT_GAIN).unwrap();
//! assert_eq!(log.as_slice(), &[0, 0, 255, 255]);
//!
//! let eq = equalize_hist(&gray).unwrap();
//! assert_eq!(eq.as_slice(), &[128, 128, 255, 255]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod color;
pub mod equalize;
pub mod histogram;
pub mod log_op;
pub mod range;

pub use error::{OpsError, OpsResult};
pub use color::{rgb_to_gray, rgb_to_ycrcb, ycrcb_to_rgb};
pub use equalize::equalize_hist;
pub use histogram::Histogram;
pub use log_op::{log_transform, DEFAULT_GAIN};
pub use range::Range;
