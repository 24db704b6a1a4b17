//! # lumen-core
//!
//! Core types shared by every lumen crate.
//!
//! - [`Image`] - Row-major, interleaved 8-bit image buffer
//! - [`Error`] / [`Result`] - Buffer construction errors
//! - [`pixel`] - BT.601 luma coefficients
//!
//! ## Crate Structure
//!
//! ```text
//! lumen-core (this crate)
//!    ^
//!    |
//!    +-- lumen-ops (log transform, histogram equalization)
//!    +-- lumen-io (PNG / JPEG)
//!    +-- lumen-view (comparison figure)
//!    +-- lumen-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::Image;
pub use pixel::{BT601_LUMA, BT601_LUMA_B, BT601_LUMA_G, BT601_LUMA_R, luma_bt601};
