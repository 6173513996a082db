//! # epoxy-core
//!
//! Core types for epoxy floor visualization.
//!
//! This crate provides the foundational types used throughout epoxy-rs:
//!
//! - [`RgbaImage`] - Owned row-major RGBA8 pixel buffer
//! - [`FloorRegion`] - The band of rows treated as "floor"
//! - [`luma_bt601`] - Perceptual luma used by the saturation stage
//! - [`Error`], [`Result`] - Buffer and dimension errors
//!
//! ## Crate Structure
//!
//! `epoxy-core` has no internal dependencies. The other crates build on it:
//!
//! ```text
//! epoxy-core (this crate)
//!    ^
//!    |
//!    +-- epoxy-ops (pixel transform)
//!    +-- epoxy-io (data URIs, PNG/JPEG codecs)
//!    +-- epoxy-visualizer (decode -> transform -> encode)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize [`FloorRegion`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;
pub mod region;

pub use error::{Error, Result};
pub use image::RgbaImage;
pub use pixel::{luma_bt601, BT601_LUMA, BT601_LUMA_B, BT601_LUMA_G, BT601_LUMA_R, CHANNELS};
pub use region::{FloorRegion, FLOOR_START_DENOMINATOR, FLOOR_START_NUMERATOR};

/// Prelude module for convenient imports.
///
/// ```
/// use epoxy_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::RgbaImage;
    pub use crate::pixel::{luma_bt601, BT601_LUMA};
    pub use crate::region::FloorRegion;
}
